/// Errors from calls to downstream services.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The HTTP request itself failed (connection refused, DNS, timeout, bad body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The downstream service answered with a non-2xx status.
    #[error("Upstream error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The Gemini API key is not configured.
    #[error("GEMINI_API_KEY no configurada en variables de entorno")]
    MissingApiKey,

    /// Gemini answered without any candidate text.
    #[error("Gemini returned an empty completion")]
    EmptyCompletion,
}

impl RegistryError {
    /// Status code returned by the downstream service, if it answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
