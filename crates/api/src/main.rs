use std::net::SocketAddr;
use std::sync::Arc;

use billed_core::user::CurrentUser;
use billed_db::{MemoryStore, SessionStore, Store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use billed_api::config::ServerConfig;
use billed_api::routes;
use billed_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "billed_api=debug,billed_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Store ---
    let store: Arc<dyn Store> = if config.seed_fixtures {
        Arc::new(
            MemoryStore::seeded(config.public_base_url.clone())
                .expect("Failed to load fixture bills"),
        )
    } else {
        Arc::new(MemoryStore::new(config.public_base_url.clone()))
    };
    tracing::info!(seeded = config.seed_fixtures, "Bill store ready");

    // --- Session ---
    let session = Arc::new(SessionStore::new());
    session
        .set_current_user(&CurrentUser::employee(
            config.employee_email.clone(),
            config.employee_password.clone(),
        ))
        .await
        .expect("Failed to store the current user");
    tracing::info!(email = %config.employee_email, "Employee session opened");

    // --- App state ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let state = AppState {
        store,
        session,
        config: Arc::new(config),
    };

    let app = routes::build_app(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
