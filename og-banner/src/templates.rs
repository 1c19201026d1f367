pub mod components;
pub mod pages;
pub mod partials;

/// Compiled from `scss/banner.scss` by the build script.
pub const BANNER_STYLESHEET: &str = include_str!(concat!(env!("OUT_DIR"), "/banner.css"));

/// Compiled from `scss/landing.scss` by the build script.
pub const LANDING_STYLESHEET: &str = include_str!(concat!(env!("OUT_DIR"), "/landing.css"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheets_are_compiled_and_compressed() {
        assert!(BANNER_STYLESHEET.contains("width:1280px"));
        assert!(BANNER_STYLESHEET.contains("height:520px"));
        assert!(LANDING_STYLESHEET.contains(".theme-card"));
        for css in [BANNER_STYLESHEET, LANDING_STYLESHEET] {
            assert!(!css.contains('$'), "SCSS variables left in output");
            assert!(!css.contains("\n  "), "output is not compressed");
        }
    }
}
