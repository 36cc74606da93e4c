pub mod routes;
pub mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;
    let data_dir = shared::config::resolve_path(&config.data.dir);
    let dist_dir = shared::config::resolve_path(&config.frontend.dist);

    match shared::data_files::inspect_dir(&data_dir) {
        Ok(summary) => {
            tracing::info!(
                "Serving {} events and {} categories from {}",
                summary.events,
                summary.categories,
                data_dir.display()
            );
            for warning in &summary.warnings {
                tracing::warn!("{}", warning);
            }
        }
        // The files are served regardless; the frontend reports load failures itself.
        Err(e) => tracing::error!("Data files in {} are not usable: {:#}", data_dir.display(), e),
    }

    if !dist_dir.join("index.html").exists() {
        tracing::warn!(
            "No frontend build found in {}; only the data files will be served",
            dist_dir.display()
        );
    }

    let app = routes::router(&data_dir, &dist_dir);
    let addr: SocketAddr = config.server.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
