use maud::{html, Markup, DOCTYPE};

use super::{
    components::{FeatureItem, Parameter, ThemeCard, ThemeStyle},
    partials,
};
use crate::{banner::BannerConfig, themes, themes::ThemeKey};

const REPOSITORY_URL: &str = "https://github.com/SylphxAI/og";

const BASIC_EXAMPLE: &str = "GET /banner?title=MyProject&tagline=An awesome project\
    &features=Fast,Secure,Simple&gradient=667eea,764ba2&icon=🚀&theme=modern";

const SELLING_POINTS: [(&str, &str, &str); 4] = [
    ("🎨", "6 Beautiful Themes", "Pick the look that fits your project"),
    ("⚡", "Lightning Fast", "Rendered on the fly with no headless browser"),
    ("🔧", "Fully Customizable", "Control colors, text, icons, and more via URL params"),
    ("🛡️", "Safe Output", "Everything you pass in is escaped before it hits the page"),
];

const REQUIRED_PARAMETER_DOCS: [(&str, &str); 5] = [
    ("title", "Project name (required)"),
    ("tagline", "One-line description (required)"),
    ("features", "Comma-separated features, max 4 (required)"),
    ("gradient", "Two hex colors without # (required) e.g. 667eea,764ba2"),
    ("icon", "Emoji icon (required)"),
];

const OPTIONAL_PARAMETER_DOCS: [(&str, &str); 2] = [
    ("highlight", "Highlighted text below tagline (optional)"),
    ("github", "GitHub URL (optional, defaults to SylphxAI/title)"),
];

const REAL_EXAMPLES: [(&str, &str); 3] = [
    (
        "Silk",
        "/banner?title=Silk&tagline=Zero-runtime CSS-in-TS with 92% smaller bundles\
        &features=Type-safe styling,92% smaller,Zero runtime,TypeScript\
        &gradient=667eea,764ba2&icon=🎨&theme=modern",
    ),
    (
        "Zen",
        "/banner?title=Zen&tagline=Immutable state management\
        &features=45× faster,Type-safe,Zero deps,Simple API\
        &gradient=0f2027,2c5364&icon=☯️&theme=glass&highlight=Up to 45× faster",
    ),
    (
        "Benchmark",
        "/banner?title=Benchmark&tagline=Performance testing for TypeScript\
        &features=Auto benchmarking,Regression detection,CI/CD integration,HTML reports\
        &gradient=f093fb,f5576c&icon=📊&theme=vibrant",
    ),
];

/// The 1280x640 banner document.
pub fn banner(config: &BannerConfig, theme_style: ThemeStyle<'_>) -> Markup {
    let github = config.github_text();

    html! {
        (DOCTYPE)
        html lang="en" {
            (partials::banner_head(&theme_style))
            body {
                div class="container" {
                    div class="header" {
                        div class="icon" { (config.icon) }
                        h1 { (config.title) }
                    }
                    div class="tagline" {
                        (config.tagline)
                        @if let Some(highlight) = &config.highlight {
                            div class="highlight" { (highlight) }
                        }
                    }
                    div class="features" {
                        @for (icon, label) in config.feature_items() {
                            (FeatureItem { icon, label })
                        }
                    }
                    div class="footer" {
                        div class="github" { (&*github) }
                    }
                }
            }
        }
    }
}

/// Landing page: what the service does, every theme with a preview link, and
/// the query parameters.
pub fn landing() -> Markup {
    let theme_docs = format!(
        "Theme: {} (optional, default: {})",
        ThemeKey::listing(),
        ThemeKey::default()
    );

    html! {
        (DOCTYPE)
        html lang="en" {
            (partials::landing_head())
            body {
                header {
                    div class="container" {
                        h1 { "🎨 OG" }
                        p class="subtitle" { "Beautiful Open Graph images for your GitHub projects" }
                        div class="hero-buttons" {
                            a href="#themes" class="btn btn-primary" { "Explore Themes" }
                            a href=(REPOSITORY_URL) class="btn btn-secondary" { "View on GitHub" }
                        }
                    }
                }

                div class="container" {
                    div class="section" {
                        h2 { "✨ Features" }
                        div class="features-grid" {
                            @for (icon, heading, text) in SELLING_POINTS {
                                div class="feature-item" {
                                    div class="feature-icon-large" { (icon) }
                                    h3 { (heading) }
                                    p { (text) }
                                }
                            }
                        }
                    }

                    div class="section" id="themes" {
                        h2 { "🎨 Themes" }
                        div class="themes" {
                            @for theme in themes::all() {
                                (ThemeCard(theme))
                            }
                        }
                    }

                    div class="section" {
                        h2 { "📖 Usage" }
                        div class="usage" {
                            h3 { "Basic Example" }
                            div class="code-block" { (BASIC_EXAMPLE) }
                        }

                        h3 class="params-heading" { "Parameters" }
                        div class="params" {
                            @for (name, description) in REQUIRED_PARAMETER_DOCS {
                                (Parameter { name, description })
                            }
                            (Parameter { name: "theme", description: &theme_docs })
                            @for (name, description) in OPTIONAL_PARAMETER_DOCS {
                                (Parameter { name, description })
                            }
                        }

                        div class="usage" {
                            h3 { "Real Examples" }
                            div class="code-block" {
                                @for (name, path) in REAL_EXAMPLES {
                                    "# " (name) "\n" (path) "\n\n"
                                }
                            }
                        }
                    }
                }

                footer {
                    div class="container" {
                        p {
                            "Made with ❤️ by "
                            a href="https://github.com/SylphxAI" { "SylphX" }
                        }
                        p class="licence" { "Open source • MIT License" }
                    }
                }
            }
        }
    }
}
