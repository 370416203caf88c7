//! Process configuration loaded from the environment (and `.env`).

use std::env;
use std::net::SocketAddr;

use anyhow::Context;

/// Server configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub database_max_connections: u32,
    /// Sender address of confirmation emails.
    pub mail_from: String,
}

fn env_str(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// `DATABASE_URL` is required; everything else has a default.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env_str("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr: SocketAddr = env_str("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()
            .context("BIND_ADDR is not a valid socket address")?;

        let database_max_connections: u32 = match env_str("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => 5,
        };

        let mail_from = env_str("MAIL_FROM")
            .or_else(|| env_str("EMAILER_USER"))
            .unwrap_or_else(|| "noreply@thehouse.local".to_string());

        Ok(Self {
            database_url,
            bind_addr,
            database_max_connections,
            mail_from,
        })
    }
}
