use std::fmt;

use cfg_if::cfg_if;
use thiserror::Error;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{
    filter::ParseError,
    fmt as tracing_fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

mod option_ext;

pub use option_ext::OptionExt;

/// Directives used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_LOG_DIRECTIVES: &str = "otel::tracing=trace,info";

#[derive(Error, Debug)]
pub enum TracingError {
    #[error("invalid log directives: {0}")]
    Directives(#[from] ParseError),

    #[error("failed to install global subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Install the global subscriber. Filters come from `RUST_LOG`, falling back to
/// `default_directives`.
pub fn init_tracing(default_directives: &str) -> Result<(), TracingError> {
    #[cfg(debug_assertions)]
    let fmt_layer = tracing_fmt::layer()
        .with_timer(tracing_fmt::time::uptime())
        .pretty();
    #[cfg(not(debug_assertions))]
    let fmt_layer = tracing_fmt::layer();

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directives)?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// The signal that ended the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShutdownSignal {
    CtrlC,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::CtrlC => f.write_str("ctrl-c"),
            ShutdownSignal::Terminate => f.write_str("terminate"),
        }
    }
}

/// Resolves once ctrl-c or (on unix) SIGTERM is received.
///
/// A handler that can't be installed is logged and never fires, so the other
/// one still can.
pub async fn shutdown_signal() -> ShutdownSignal {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            error!(%error, "failed to listen for ctrl-c event");
            std::future::pending::<()>().await;
        }
    };

    cfg_if! {
        if #[cfg(unix)] {
            let terminate = async {
                match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                    Ok(mut stream) => {
                        stream.recv().await;
                    }
                    Err(error) => {
                        error!(%error, "failed to install SIGTERM handler");
                        std::future::pending::<()>().await;
                    }
                }
            };
        } else {
            // Non-unix platforms have no SIGTERM.
            let terminate = std::future::pending::<()>();
        }
    };

    let received = tokio::select! {
        _ = ctrl_c => ShutdownSignal::CtrlC,
        _ = terminate => ShutdownSignal::Terminate,
    };

    info!(signal = %received, "starting graceful shutdown");
    received
}
