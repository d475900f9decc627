use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
    pub site_title: String,
    pub mount_prefix: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let site_title = env::var("SITE_TITLE")
            .unwrap_or_else(|_| "Course Site".to_string());

        let mount_prefix = normalize_mount_prefix(env::var("SITE_MOUNT_PREFIX").ok().as_deref());

        Ok(Config {
            service_host,
            service_port,
            site_title,
            mount_prefix,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Site title: {}", self.site_title);
        tracing::info!("  Mount prefix: {}",
            self.mount_prefix.as_deref().unwrap_or("none (pages served at the root)"));
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

/// Normalize the mount prefix to a single canonical form: a leading slash,
/// no trailing slash, and `None` for anything that means "no prefix".
///
/// The raw value may arrive as `p`, `/p`, or `/p/`; all three mount the
/// pages under `/p`.
fn normalize_mount_prefix(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("/{}", trimmed))
}
