use anyhow::anyhow;
use axum::serve;
use log::{error, info};
use std::{net::SocketAddr, str::FromStr};
use surfsup::{app, build_app_state, get_config_info, get_log_level, setup_logger};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = get_config_info();
    let log_level = get_log_level(&cli);

    setup_logger()
        .level(log_level)
        .level_for("sqlx", log::LevelFilter::Warn)
        .level_for("surfsup", log_level)
        .level_for("http_response", log_level)
        .level_for("http_request", log_level)
        .apply()?;

    let db_path = cli.db_path();
    let host = cli.host();
    let port = cli.port();

    let socket_addr = SocketAddr::from_str(&format!("{}:{}", host, port))
        .map_err(|e| anyhow!("invalid address: {}", e))?;

    info!("Climate API starting...");
    info!("  Dataset: {}", db_path);

    // Snapshot is computed before the listener accepts anything
    let app_state = build_app_state(&db_path).await.map_err(|e| {
        error!("error building app: {}", e);
        e
    })?;

    let listener = TcpListener::bind(socket_addr)
        .await
        .map_err(|e| anyhow!("error binding to socket: {}", e))?;
    info!("  Listen: http://{}", socket_addr);

    serve(listener, app(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Climate API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
