use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tupermiso_core::service::ServiceKind;
use tupermiso_db::DbPool;
use tupermiso_registry::{GeminiClient, GeminiConfig, RegistryClients, UpstreamConfig};

use tupermiso_api::config::ServerConfig;
use tupermiso_api::router::build_app_router;
use tupermiso_api::state::AppState;

const DEFAULT_LOG_FILTER: &str = "tupermiso_api=debug,tupermiso_registry=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        service = %config.service,
        host = %config.host,
        port = config.port,
        "Configuration loaded"
    );

    let pool = open_database(config.service).await;
    let app = build_app_router(assemble_state(pool, &config), &config);

    let ip: IpAddr = config.host.parse().expect("HOST must be an IP address");
    let addr = SocketAddr::new(ip, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!(%addr, service = %config.service, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!(service = %config.service, "Stopped");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect, verify and migrate the database of `service`.
async fn open_database(service: ServiceKind) -> DbPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = tupermiso_db::create_pool(&url)
        .await
        .expect("Failed to connect to database");
    tupermiso_db::health_check(&pool)
        .await
        .expect("Database is not answering");
    tupermiso_db::run_migrations(&pool, service)
        .await
        .expect("Failed to run database migrations");

    tracing::info!(%service, "Database ready");
    pool
}

/// Only `back` talks to other services, so only it gets registry and
/// Gemini clients.
fn assemble_state(pool: DbPool, config: &ServerConfig) -> AppState {
    let state = AppState::new(pool, config.clone());
    if config.service != ServiceKind::Back {
        return state;
    }

    let upstream = UpstreamConfig::from_env();
    tracing::info!(mode = ?upstream.mode, "Registry endpoints resolved");
    let registry = RegistryClients::new(&upstream).expect("Failed to build HTTP client");

    let gemini = GeminiClient::new(GeminiConfig::from_env());
    if !gemini.is_configured() {
        tracing::warn!("GEMINI_API_KEY is not set; /chatbot will fail");
    }

    state.with_registry(registry).with_gemini(gemini)
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let interrupt = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let which = tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal = which, "Shutting down");
}
