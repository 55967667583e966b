// Configuration for the facility HTTP client

/// Default API base, matching the backend's `/api` mount point
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Configuration for the HTTP client
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// API base URL; resource paths are appended to it (e.g. "http://host:8080/api")
    pub base_url: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            user_agent: concat!("facility-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config for the given base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}
