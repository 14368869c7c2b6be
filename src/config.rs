use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

pub const DEFAULT_ROOT_FLAG: &str = "HTB{default_root_flag_not_set}";
pub const DEFAULT_TOKEN_FILE: &str = "/app/expected-token";
pub const DEFAULT_TOKEN: &str = "test-token-12345";

/// Where the expected token came from, for startup logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    File(PathBuf),
    Default,
}

#[derive(Debug, Clone)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub root_flag: String,
    pub expected_token: String,
    pub token_source: TokenSource,
    pub service_port: u16,
    pub service_host: String,
    pub tls: Option<TlsPaths>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let root_flag = lookup("ROOT_FLAG")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ROOT_FLAG.to_string());

        let token_file = lookup("VALID_TOKEN_FILE")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_TOKEN_FILE.to_string());
        let (expected_token, token_source) = load_token(Path::new(&token_file));

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "443".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let tls = match (lookup("TLS_CERT_PATH"), lookup("TLS_KEY_PATH")) {
            (Some(cert), Some(key)) => Some(TlsPaths {
                cert: PathBuf::from(cert),
                key: PathBuf::from(key),
            }),
            (None, None) => None,
            (Some(_), None) => bail!("TLS_KEY_PATH is required when TLS_CERT_PATH is set"),
            (None, Some(_)) => bail!("TLS_CERT_PATH is required when TLS_KEY_PATH is set"),
        };

        Ok(Config {
            root_flag,
            expected_token,
            token_source,
            service_port,
            service_host,
            tls,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        match &self.token_source {
            TokenSource::File(path) => {
                tracing::info!("  Expected token: read from {}", path.display())
            }
            TokenSource::Default => tracing::info!("  Expected token: built-in default"),
        }
        tracing::info!(
            "  Root flag: {}",
            if self.root_flag == DEFAULT_ROOT_FLAG { "default" } else { "set via ROOT_FLAG" }
        );
        match &self.tls {
            Some(tls) => tracing::info!(
                "  TLS: cert {}, key {}",
                tls.cert.display(),
                tls.key.display()
            ),
            None => tracing::warn!("  TLS: disabled, serving plaintext HTTP"),
        }
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

/// Read the expected token from `path`, trimming surrounding whitespace.
///
/// An unreadable or blank file falls back to [`DEFAULT_TOKEN`].
pub fn load_token(path: &Path) -> (String, TokenSource) {
    match fs::read_to_string(path) {
        Ok(contents) if !contents.trim().is_empty() => {
            (contents.trim().to_string(), TokenSource::File(path.to_path_buf()))
        }
        Ok(_) => {
            tracing::warn!("Token file {} is empty, using default token", path.display());
            (DEFAULT_TOKEN.to_string(), TokenSource::Default)
        }
        Err(e) => {
            tracing::warn!("Could not read token file {}: {}", path.display(), e);
            (DEFAULT_TOKEN.to_string(), TokenSource::Default)
        }
    }
}
