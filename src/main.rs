use fyp_shell::{
    AppState,
    config::{AppConfig, Env},
    create_router,
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Entry point: loads configuration, sets up logging and serves the shell.
#[tokio::main]
async fn main() {
    // 1. Configuration (fail-fast)
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging
    // RUST_LOG takes precedence over the local-development defaults.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fyp_shell=debug,tower_http=info,axum=trace".into());

    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // JSON lines for the log aggregator.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Shell starting in {:?} mode", config.env);
    for route in fyp_shell::ROUTES {
        tracing::debug!(path = route.path, action = ?route.action, "route registered");
    }

    // 3. Router and server
    let bind_addr = config.bind_addr;
    let app = create_router(AppState { config });

    let listener = TcpListener::bind(bind_addr)
        .await
        .unwrap_or_else(|err| panic!("FATAL: Failed to bind {bind_addr}: {err}"));

    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app)
        .await
        .expect("FATAL: HTTP server terminated unexpectedly");
}
