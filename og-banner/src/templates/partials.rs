use maud::{html, Markup, PreEscaped};

use super::{components::ThemeStyle, BANNER_STYLESHEET, LANDING_STYLESHEET};

/// Banner `<head>`: the shared layout followed by the theme's overrides.
pub fn banner_head(theme_style: &ThemeStyle<'_>) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            style {
                (PreEscaped(BANNER_STYLESHEET))
                (theme_style)
            }
        }
    }
}

pub fn landing_head() -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { "OG - Beautiful Open Graph Images" }
            style { (PreEscaped(LANDING_STYLESHEET)) }
        }
    }
}
