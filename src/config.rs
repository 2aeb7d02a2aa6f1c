use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind the HTTP server to, e.g. "0.0.0.0"
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables (populated by dotenvy before this is called).
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self> {
        let port = port
            .unwrap_or_else(|| "8080".into())
            .parse::<u16>()
            .context("PORT must be a valid port number (1–65535)")?;

        Ok(Self {
            host: host.unwrap_or_else(|| "0.0.0.0".into()),
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::from_vars(None, None).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn overrides() {
        let config =
            AppConfig::from_vars(Some("127.0.0.1".into()), Some("3000".into())).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn bad_port_is_rejected() {
        assert!(AppConfig::from_vars(None, Some("http".into())).is_err());
        assert!(AppConfig::from_vars(None, Some("70000".into())).is_err());
    }
}
