use std::net::SocketAddr;

/// Process-wide configuration, loaded once at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub news_api_key: String,
    pub gemini_api_key: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("reddit_client_id", &self.reddit_client_id)
            .field("reddit_client_secret", &"[redacted]")
            .field("news_api_key", &"[redacted]")
            .field("gemini_api_key", &"[redacted]")
            .finish()
    }
}
