use std::str::FromStr;

use tupermiso_core::service::ServiceKind;

use crate::auth::jwt::JwtConfig;

const DEFAULT_SERVICE: &str = "back";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Process settings, read once at startup.
///
/// `SERVICE` (default `back`) picks the route table, the migration set and
/// the default `PORT`. `HOST` defaults to `0.0.0.0`, `CORS_ORIGINS` to `*`
/// and `REQUEST_TIMEOUT_SECS` to 30.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub service: ServiceKind,
    pub host: String,
    pub port: u16,
    /// Comma-separated in the environment; `*` means any origin.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// Present only for `tgr` and `back`, which sign tokens.
    pub jwt: Option<JwtConfig>,
}

impl ServerConfig {
    /// # Panics
    ///
    /// On an unknown `SERVICE`, an unparseable number, or a missing
    /// `JWT_SECRET` for a token-issuing service.
    pub fn from_env() -> Self {
        let service: ServiceKind = parsed("SERVICE", DEFAULT_SERVICE.to_string());

        Self {
            service,
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parsed("PORT", service.default_port().to_string()),
            cors_origins: split_origins(&var("CORS_ORIGINS").unwrap_or_else(|| "*".to_string())),
            request_timeout_secs: parsed(
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
            ),
            jwt: service.issues_tokens().then(JwtConfig::from_env),
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed<T: FromStr>(key: &str, fallback: String) -> T {
    let raw = var(key).unwrap_or(fallback);
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => panic!("{key} has an invalid value: {raw:?}"),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
