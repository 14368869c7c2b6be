use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;

use crate::config::Config;

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Serve `app` until Ctrl-C or SIGTERM.
///
/// With TLS paths configured the listener speaks HTTPS via rustls, otherwise
/// plaintext HTTP.
pub async fn serve(config: &Config, app: Router) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.service_host, config.service_port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid listen address {}:{}",
                config.service_host, config.service_port
            )
        })?;

    let rustls_config = match &config.tls {
        Some(tls) => Some(
            RustlsConfig::from_pem_file(&tls.cert, &tls.key)
                .await
                .with_context(|| {
                    format!(
                        "Failed to load TLS certificate {} / key {}",
                        tls.cert.display(),
                        tls.key.display()
                    )
                })?,
        ),
        None => None,
    };

    let handle = Handle::new();
    tokio::spawn(shutdown_on_signal(handle.clone()));

    match rustls_config {
        Some(rustls_config) => {
            tracing::info!("Secrets vault starting on https://{}", addr);
            axum_server::bind_rustls(addr, rustls_config)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTPS server failed")?;
        }
        None => {
            tracing::info!("Secrets vault starting on http://{}", addr);
            axum_server::bind(addr)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTP server failed")?;
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_on_signal(handle: Handle) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!(
        "Shutdown signal received, draining connections for up to {}s",
        SHUTDOWN_GRACE.as_secs()
    );
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TlsPaths, TokenSource};
    use std::path::PathBuf;

    fn config_with(host: &str, tls: Option<TlsPaths>) -> Config {
        Config {
            root_flag: "HTB{test}".to_string(),
            expected_token: "test-token-12345".to_string(),
            token_source: TokenSource::Default,
            service_port: 0,
            service_host: host.to_string(),
            tls,
        }
    }

    #[tokio::test]
    async fn test_invalid_host_is_rejected() {
        let result = serve(&config_with("not a host", None), Router::new()).await;

        let error = result.unwrap_err();
        assert!(error.to_string().contains("Invalid listen address"));
    }

    #[tokio::test]
    async fn test_missing_certificate_is_rejected() {
        let tls = TlsPaths {
            cert: PathBuf::from("/nonexistent/secrets-vault/cert.pem"),
            key: PathBuf::from("/nonexistent/secrets-vault/key.pem"),
        };

        let result = serve(&config_with("127.0.0.1", Some(tls)), Router::new()).await;

        let error = result.unwrap_err();
        assert!(error.to_string().contains("Failed to load TLS certificate"));
    }
}
