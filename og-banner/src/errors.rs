use std::{io, net::SocketAddr};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sylphx_og::TracingError;
use thiserror::Error;

use crate::{
    params::{MAX_FEATURES, REQUIRED_PARAMETERS},
    themes::ThemeKey,
};

/// Reasons a banner request is rejected. The display text is the response body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BannerError {
    /// One or more of the required query parameters is absent or empty.
    #[error("Missing required parameters: {}", REQUIRED_PARAMETERS.join(", "))]
    MissingParameters,

    #[error("Maximum {} features allowed", MAX_FEATURES)]
    TooManyFeatures,

    /// The requested theme key isn't registered.
    #[error("Invalid theme. Available: {}", ThemeKey::listing())]
    UnknownTheme(String),
}

impl BannerError {
    /// The rejected theme key, for logging. The response body lists the valid
    /// keys instead.
    pub fn requested_theme(&self) -> Option<&str> {
        match self {
            BannerError::UnknownTheme(requested) => Some(requested.as_str()),
            _ => None,
        }
    }
}

/// Errors that can be returned by request handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// The requested page was not found.
    #[error("Not Found")]
    NotFound,

    /// The banner query failed validation.
    #[error(transparent)]
    InvalidBanner(#[from] BannerError),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self {
            HandlerError::NotFound => StatusCode::NOT_FOUND,
            HandlerError::InvalidBanner(_) => StatusCode::BAD_REQUEST,
        };

        (status, self.to_string()).into_response()
    }
}

/// Errors that stop the server from starting or running.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error(transparent)]
    Tracing(#[from] TracingError),

    #[error("could not bind to {0}: {1}")]
    Bind(SocketAddr, #[source] io::Error),

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}
