use sylphx_og::OptionExt as _;

use crate::{
    banner::BannerConfig,
    errors::BannerError,
    themes::{self, Gradient, ThemeKey},
};

/// Query parameters that must be present and non-empty.
pub const REQUIRED_PARAMETERS: [&str; 5] = ["title", "tagline", "features", "gradient", "icon"];

pub const MAX_FEATURES: usize = 4;

/// The raw `/banner` query string. Nothing is checked until
/// [`BannerParams::validate`].
#[derive(Clone, Debug, Default)]
pub struct BannerParams {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub features: Option<String>,
    pub gradient: Option<String>,
    pub icon: Option<String>,
    pub github: Option<String>,
    pub highlight: Option<String>,
    pub theme: Option<String>,
}

impl FromIterator<(String, String)> for BannerParams {
    /// Collect decoded query pairs. The first value given for a key wins, even
    /// an empty one; unknown keys are ignored.
    fn from_iter<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "title" => &mut params.title,
                "tagline" => &mut params.tagline,
                "features" => &mut params.features,
                "gradient" => &mut params.gradient,
                "icon" => &mut params.icon,
                "github" => &mut params.github,
                "highlight" => &mut params.highlight,
                "theme" => &mut params.theme,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

impl BannerParams {
    /// Check the parameters and build a [`BannerConfig`].
    ///
    /// Checks run in order (required fields, feature count, theme) and stop at
    /// the first failure. Colours and feature labels are not inspected, so
    /// `features=,` or `gradient=zzz` are accepted.
    pub fn validate(self) -> Result<BannerConfig, BannerError> {
        use BannerError::*;

        let BannerParams {
            title,
            tagline,
            features,
            gradient,
            icon,
            github,
            highlight,
            theme,
        } = self;

        let (Some(title), Some(tagline), Some(features), Some(gradient), Some(icon)) = (
            non_empty(title),
            non_empty(tagline),
            non_empty(features),
            non_empty(gradient),
            non_empty(icon),
        ) else {
            return Err(MissingParameters);
        };

        let features = features
            .split(',')
            .map(|feature| feature.trim().to_owned())
            .collect::<Vec<_>>();

        // A feature at index MAX_FEATURES means there are too many.
        let features = features
            .get(MAX_FEATURES)
            .map(|_| TooManyFeatures)
            .err_or(features)?;

        let gradient = Gradient::parse(&gradient);

        let theme = match non_empty(theme) {
            Some(raw) => themes::lookup(&raw).ok_or(UnknownTheme(raw))?.key,
            None => ThemeKey::default(),
        };

        Ok(BannerConfig {
            title,
            tagline,
            features,
            gradient,
            icon,
            github: non_empty(github),
            highlight: non_empty(highlight),
            theme,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
