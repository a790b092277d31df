//! Downstream service locations and chatbot settings.

use std::collections::HashMap;
use std::time::Duration;

use tupermiso_core::service::ServiceKind;

/// How the registries are reached when no `API_*` override is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployMode {
    /// Everything on one host: `http://localhost:{port}`.
    Local,
    /// Compose containers reaching the host: `http://host.docker.internal:{port}`.
    Docker,
    /// In-cluster services on port 80: `http://{service}-api:80`.
    Kubernetes,
}

impl DeployMode {
    /// Default base URL of `service` in this mode.
    pub fn base_url(&self, service: ServiceKind) -> String {
        match self {
            Self::Local => format!("http://localhost:{}", service.default_port()),
            Self::Docker => format!("http://host.docker.internal:{}", service.default_port()),
            Self::Kubernetes => format!("http://{}:80", service.k8s_host()),
        }
    }
}

/// Base URLs of the eight registries plus the outbound timeout.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub mode: DeployMode,
    base_urls: HashMap<ServiceKind, String>,
    pub timeout: Duration,
}

impl UpstreamConfig {
    /// Load from environment variables.
    ///
    /// | Env Var                 | Default                          |
    /// |-------------------------|----------------------------------|
    /// | `K8S_MODE`              | `false`                          |
    /// | `DOCKER_MODE`           | `false`                          |
    /// | `API_<SERVICE>`         | derived from the deploy mode     |
    /// | `UPSTREAM_TIMEOUT_SECS` | `30`                             |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| {
            lookup(key)
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false)
        };

        let mode = if flag("K8S_MODE") {
            DeployMode::Kubernetes
        } else if flag("DOCKER_MODE") {
            DeployMode::Docker
        } else {
            DeployMode::Local
        };

        let base_urls = ServiceKind::REGISTRIES
            .into_iter()
            .map(|service| {
                let key = format!("API_{}", service.name().to_ascii_uppercase());
                let url = lookup(&key)
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| mode.base_url(service));
                (service, url.trim_end_matches('/').to_string())
            })
            .collect();

        let timeout_secs: u64 = lookup("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        Self {
            mode,
            base_urls,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Point every registry at `base_url`. Used when one stub serves all routes.
    pub fn single_host(base_url: &str) -> Self {
        Self {
            mode: DeployMode::Local,
            base_urls: ServiceKind::REGISTRIES
                .into_iter()
                .map(|service| (service, base_url.trim_end_matches('/').to_string()))
                .collect(),
            timeout: Duration::from_secs(5),
        }
    }

    /// Base URL of `service`. `back` itself has no entry.
    pub fn base_url(&self, service: ServiceKind) -> Option<&str> {
        self.base_urls.get(&service).map(String::as_str)
    }

    /// Override the base URL of one service.
    pub fn with_base_url(mut self, service: ServiceKind, url: impl Into<String>) -> Self {
        self.base_urls.insert(service, url.into());
        self
    }
}

/// Gemini chatbot settings.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// `GEMINI_API_KEY`. Chat requests fail with 500 when missing.
    pub api_key: Option<String>,
    /// `GEMINI_MODEL` (default `gemini-2.5-flash`).
    pub model: String,
    /// `GEMINI_API_URL` (default `https://generativelanguage.googleapis.com/v1beta`).
    pub api_url: String,
}

impl GeminiConfig {
    pub const DEFAULT_MODEL: &'static str = "gemini-2.5-flash";
    pub const DEFAULT_API_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.into()),
            api_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| Self::DEFAULT_API_URL.into()),
        }
    }
}
