//! Open Graph banners as HTML.
//!
//! `/banner` turns a query string into a 1280x640 themed HTML page meant to be
//! screenshotted as a social preview image; `/` describes the service and links
//! a preview of every theme.

use axum::{routing::any, Router};

pub mod banner;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod params;
pub mod templates;
pub mod themes;

pub use banner::{compose, BannerConfig};
pub use config::Args;
pub use errors::{BannerError, HandlerError, ServeError};
pub use params::BannerParams;
pub use themes::{Gradient, Theme, ThemeKey};

/// Both pages answer any method; the query string is all that matters.
pub fn router() -> Router {
    Router::new()
        .route("/", any(handlers::index))
        .route("/banner", any(handlers::banner))
        .fallback(handlers::not_found)
}
