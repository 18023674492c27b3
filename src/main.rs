use std::io;

use clap::Parser;

use axum_server::Handle;

use playmate_mock::{
    app::AppState,
    cli::{Args, Command, show_config},
    config::read_config,
    routes,
    seed::Seed,
};

use anyhow::Error;

use tokio::{main, select, signal};

use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
};

#[main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    fmt::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Args::parse();

    // Read config file
    let mut config = read_config(cli.config_path())?;
    cli.apply(&mut config);

    if let Some(command) = cli.command.as_ref() {
        match command {
            Command::ShowConfig => show_config(&config)?,
        }

        return Ok(());
    }

    let state = AppState::new(Seed::new()?);
    let router = routes::router(state);

    let addr = config.http.addr();
    let port = config.http.port;

    println!("🚀 启动简单API服务器...");
    println!("📍 地址: http://localhost:{port}");
    println!("🔗 健康检查: http://localhost:{port}/api/health");
    println!("🌐 前端可以正常连接到后端了!");

    let handle = Handle::new();

    // run shutdown task to detect shutdowns
    tokio::spawn(shutdown_signal(handle.clone(), config.http.shutdown_timeout));

    tracing::info!("listening on {} (http)", addr);

    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await?;

    tracing::info!("shutting down");

    Ok(())
}

async fn shutdown_signal(handle: Handle, timeout: std::time::Duration) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("draining connections for up to {:?}", timeout);
    handle.graceful_shutdown(Some(timeout));
}
