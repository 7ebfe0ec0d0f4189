//! Runtime configuration.

use std::net::SocketAddr;
use std::time::Duration;

/// Default arrivals board URL.
pub const DEFAULT_BASE_URL: &str = "http://yorkshire.acisconnect.com/Text/WebDisplay.aspx";

/// Browser user agent sent to the board, which refuses unknown clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.2; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/30.0.1599.17 Safari/537.36";

/// Default API listen port.
pub const DEFAULT_PORT: u16 = 7654;

/// How long the realtime view waits between refreshes.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Configuration shared by the client, the realtime view and the API server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Arrivals board URL (the stop code is appended as `stopRef`)
    pub base_url: String,
    /// User agent for board requests
    pub user_agent: String,
    /// Address the API server listens on
    pub bind: SocketAddr,
    /// Delay between realtime refreshes
    pub refresh_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            bind: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            refresh_interval: REFRESH_INTERVAL,
        }
    }
}

impl Config {
    /// Set a custom board URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API listen address.
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    /// Set the realtime refresh interval.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }
}
