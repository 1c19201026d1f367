use axum_tracing_opentelemetry::middleware::OtelAxumLayer;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{debug, info};

use sylphx_og_banner::{router, Args, ServeError};

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    // Load .env before parsing so it can supply OG_* settings.
    let dotenv = dotenv::dotenv();
    let args = Args::parse();

    sylphx_og::init_tracing(sylphx_og::DEFAULT_LOG_DIRECTIVES)?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded environment file"),
        Err(error) => debug!(%error, "no environment file loaded"),
    }

    let app = router().layer(OtelAxumLayer::default());

    let address = args.socket_addr();
    let listener = TcpListener::bind(address)
        .await
        .map_err(|err| ServeError::Bind(address, err))?;

    info!(%address, "starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            sylphx_og::shutdown_signal().await;
        })
        .await
        .map_err(ServeError::Serve)?;

    info!("finished shutting down; see you soon!");
    Ok(())
}
