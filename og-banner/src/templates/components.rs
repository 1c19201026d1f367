use std::fmt;

use maud::{html, Markup, PreEscaped, Render};

use crate::themes::{Gradient, Theme, ThemeKey};

/// Query used by the landing page's preview links, minus the theme.
pub const PREVIEW_QUERY: &str = "title=Demo&tagline=Beautiful%20social%20preview%20images\
    &features=Feature%201,Feature%202,Feature%203,Feature%204&gradient=667eea,764ba2&icon=%F0%9F%8E%A8";

pub fn preview_href(key: ThemeKey) -> String {
    format!("/banner?{PREVIEW_QUERY}&theme={key}")
}

/// A theme's CSS for one gradient, ready to sit inside a `<style>` element.
pub struct ThemeStyle<'g> {
    theme: &'static Theme,
    gradient: &'g Gradient,
}

impl<'g> ThemeStyle<'g> {
    pub fn new(theme: &'static Theme, gradient: &'g Gradient) -> Self {
        Self { theme, gradient }
    }
}

impl fmt::Display for ThemeStyle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.theme.generate_css(self.gradient))
    }
}

impl Render for ThemeStyle<'_> {
    fn render(&self) -> Markup {
        // Colours are copied in verbatim, so a `</` in one could close the
        // style element. `<\/` means the same thing to a CSS parser.
        PreEscaped(self.to_string().replace("</", "<\\/"))
    }
}

pub struct FeatureItem<'a> {
    pub icon: &'a str,
    pub label: &'a str,
}

impl Render for FeatureItem<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="feature" {
                div class="feature-icon" { (self.icon) }
                span { (self.label) }
            }
        }
    }
}

/// Landing page card describing one theme, with a link to a sample banner.
pub struct ThemeCard<'a>(pub &'a Theme);

impl Render for ThemeCard<'_> {
    fn render(&self) -> Markup {
        let Theme {
            key,
            name,
            description,
            ..
        } = self.0;

        html! {
            div class="theme-card" {
                h3 { (name) }
                p { (description) }
                a href=(preview_href(*key)) class="btn-preview" { "Preview" }
            }
        }
    }
}

pub struct Parameter<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

impl Render for Parameter<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="param" {
                span class="param-name" { (self.name) }
                span class="param-desc" { (self.description) }
            }
        }
    }
}
