//! Server configuration.

/// Default listen port.
pub const DEFAULT_PORT: u16 = 4000;

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Where the HTTP listener binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host or IP address to bind to (default: 127.0.0.1)
    pub host: String,

    /// Port to listen on (default: 4000)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_string(), port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// The `host:port` string handed to the listener.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_addr() {
        assert_eq!(ServerConfig::default().addr(), "127.0.0.1:4000");
    }
}
