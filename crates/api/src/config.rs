/// Media type accepted when nothing is configured.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Content negotiation settings.
///
/// Built once at startup and shared read-only with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegotiationConfig {
    /// The single media type accepted in `Content-Type` and `Accept`.
    pub content_type: String,
}

impl NegotiationConfig {
    /// An empty (or whitespace-only) value falls back to [`DEFAULT_CONTENT_TYPE`].
    pub fn new(content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        let content_type = if content_type.trim().is_empty() {
            DEFAULT_CONTENT_TYPE.to_string()
        } else {
            content_type
        };
        Self { content_type }
    }

    /// Load from `API_CONTENT_TYPE`, defaulting to `application/json`.
    pub fn from_env() -> Self {
        Self::new(std::env::var("API_CONTENT_TYPE").unwrap_or_default())
    }
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CONTENT_TYPE)
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Accepted media type for `/api/v1` routes.
    pub negotiation: NegotiationConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default            |
    /// |------------------------|--------------------|
    /// | `HOST`                 | `0.0.0.0`          |
    /// | `PORT`                 | `3000`             |
    /// | `REQUEST_TIMEOUT_SECS` | `30`               |
    /// | `API_CONTENT_TYPE`     | `application/json` |
    ///
    /// Panics on unparsable numbers so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            request_timeout_secs,
            negotiation: NegotiationConfig::from_env(),
        }
    }
}
