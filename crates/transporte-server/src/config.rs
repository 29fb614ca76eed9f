use anyhow::Result;
use std::net::SocketAddr;

/// Server configuration
///
/// Resolved from the environment once at startup and immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_address: SocketAddr,

    /// Database connection string
    pub database_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://data/transporte.db".to_string());

        Ok(Config {
            bind_address,
            database_url,
        })
    }
}
