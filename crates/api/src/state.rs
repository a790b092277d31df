use std::sync::Arc;

use tupermiso_registry::{GeminiClient, RegistryClients};

use crate::auth::jwt::JwtConfig;
use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tupermiso_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Clients for the registry services. Only `back` has them.
    pub registry: Option<Arc<RegistryClients>>,
    /// Chatbot client. Only `back` has it.
    pub gemini: Option<Arc<GeminiClient>>,
}

impl AppState {
    /// State for a service that makes no outbound calls.
    pub fn new(pool: tupermiso_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            registry: None,
            gemini: None,
        }
    }

    pub fn with_registry(mut self, registry: RegistryClients) -> Self {
        self.registry = Some(Arc::new(registry));
        self
    }

    pub fn with_gemini(mut self, gemini: GeminiClient) -> Self {
        self.gemini = Some(Arc::new(gemini));
        self
    }

    pub fn registry(&self) -> AppResult<&RegistryClients> {
        self.registry
            .as_deref()
            .ok_or_else(|| AppError::InternalError("Registry clients are not configured".into()))
    }

    pub fn gemini(&self) -> AppResult<&GeminiClient> {
        self.gemini
            .as_deref()
            .ok_or_else(|| AppError::InternalError("Gemini client is not configured".into()))
    }

    pub fn jwt(&self) -> AppResult<&JwtConfig> {
        self.config
            .jwt
            .as_ref()
            .ok_or_else(|| AppError::InternalError("JWT_SECRET is not configured".into()))
    }
}
