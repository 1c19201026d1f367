use std::borrow::Cow;

use maud::Markup;
use tracing::debug;

use crate::{
    templates::{components::ThemeStyle, pages},
    themes::{Gradient, ThemeKey},
};

/// Glyphs handed out to features in order, wrapping around.
pub const FEATURE_ICONS: [&str; 12] = [
    "⚡", "🎯", "📦", "🚀", "💎", "🪶", "🧘", "📊", "📈", "⚙️", "🔥", "✨",
];

/// Organisation used for the footer link when no `github` is given.
pub const DEFAULT_GITHUB_OWNER: &str = "SylphxAI";

/// A validated banner request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerConfig {
    pub title: String,
    pub tagline: String,
    pub features: Vec<String>,
    pub gradient: Gradient,
    pub icon: String,
    pub github: Option<String>,
    pub highlight: Option<String>,
    pub theme: ThemeKey,
}

impl BannerConfig {
    /// Footer text: the given `github` value, or a repository path derived from
    /// the lowercased title.
    pub fn github_text(&self) -> Cow<'_, str> {
        match &self.github {
            Some(github) => Cow::Borrowed(github),
            None => Cow::Owned(format!(
                "github.com/{DEFAULT_GITHUB_OWNER}/{}",
                self.title.to_lowercase()
            )),
        }
    }

    /// Features paired with their icon glyphs.
    pub fn feature_items(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.features
            .iter()
            .enumerate()
            .map(|(index, label)| (feature_icon(index), label.as_str()))
    }
}

pub fn feature_icon(index: usize) -> &'static str {
    FEATURE_ICONS[index % FEATURE_ICONS.len()]
}

/// Render the full banner document for `config`.
pub fn compose(config: &BannerConfig) -> Markup {
    let theme = config.theme.theme();
    debug!(
        theme = %theme.key,
        features = config.features.len(),
        "composing banner"
    );

    pages::banner(config, ThemeStyle::new(theme, &config.gradient))
}
