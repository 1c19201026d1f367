use axum::{extract::Query, http::Uri};
use maud::Markup;
use tracing::{info, warn};

use crate::{banner, errors::HandlerError, params::BannerParams, templates::pages};

pub async fn index(uri: Uri) -> Markup {
    info!(route = %uri, "handling request");
    pages::landing()
}

/// Decoded as raw pairs so a repeated key keeps its first value instead of
/// failing deserialization.
pub async fn banner(
    uri: Uri,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Markup, HandlerError> {
    info!(route = %uri.path(), "handling request");

    let config = pairs
        .into_iter()
        .collect::<BannerParams>()
        .validate()
        .map_err(|error| {
            warn!(%error, theme = error.requested_theme(), "rejecting banner request");
            error
        })?;

    Ok(banner::compose(&config))
}

pub async fn not_found(uri: Uri) -> HandlerError {
    warn!(route = %uri, "request received for unknown URI");
    HandlerError::NotFound
}
