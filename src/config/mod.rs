//! Application configuration management

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host (for generating URLs)
    pub host: Option<String>,

    /// Server port (0 = let the OS pick an ephemeral port)
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
            Err(_) => 4000,
        };

        Ok(Self {
            host: env::var("HOST").ok(),
            port,
        })
    }
}
