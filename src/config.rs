use std::env;
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_uri: Option<String>,
    listen_address: String,
}

impl Config {
    /// `LISTEN_URI` wins; `SERVER_IP`/`SERVER_PORT` are only read without it.
    pub fn from_env() -> Result<Self> {
        if let Ok(uri) = env::var("LISTEN_URI") {
            let listen_address = parse_listen_uri(&uri)
                .with_context(|| format!("LISTEN_URI must look like host:port, got '{}'", uri))?;

            return Ok(Config {
                listen_uri: Some(uri),
                listen_address,
            });
        }

        let server_ip = env::var("SERVER_IP")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid port number (0-65535)")?;

        Ok(Config {
            listen_uri: None,
            listen_address: format!("{}:{}", server_ip, server_port),
        })
    }

    /// Address the server binds to
    pub fn listen_address(&self) -> &str {
        &self.listen_address
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  LISTEN_URI: {}",
            self.listen_uri.as_deref().unwrap_or("unset (using SERVER_IP/SERVER_PORT)"));
        tracing::info!("  Service listening on: {}", self.listen_address);
    }
}

/// Reduce `http://host:port/` style values to a bindable `host:port`
fn parse_listen_uri(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let without_scheme = trimmed.strip_prefix("http://").unwrap_or(trimmed);
    let address = without_scheme.trim_end_matches('/');

    if address.is_empty() {
        bail!("empty address");
    }
    if address.contains('/') {
        bail!("paths are not supported");
    }

    Ok(address.to_string())
}
