//! Server runtime
//!
//! [`ServerHandle`] owns the whole lifecycle: storage, services, router,
//! the TCP listener and graceful shutdown. The binary only parses the CLI,
//! loads config and waits for a signal.

use std::net::SocketAddr;

use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::domain::Repositories;
use crate::infrastructure::{in_memory_repositories, seed_demo_data};
use crate::interfaces::http::create_api_router;
use crate::shared::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

#[derive(Default)]
pub struct ServerOptions {
    pub config: AppConfig,
    /// Storage to serve; fresh in-memory repositories when `None`.
    pub repositories: Option<Repositories>,
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running API server.
///
/// ```rust,no_run
/// use telemed::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.shutdown_signal().wait().await;
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    pub repos: Repositories,
    pub config: AppConfig,
    /// Address actually bound; differs from the config when port 0 was asked for.
    pub local_addr: SocketAddr,

    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let config = opts.config;
        config.validate()?;

        info!("Starting telemedicine service...");

        let repos = opts.repositories.unwrap_or_else(in_memory_repositories);
        if config.storage.seed_demo_data {
            seed_demo_data(&repos).await?;
        }

        let router = create_api_router(repos.clone(), config.pagination.default_limit);

        let shutdown = ShutdownCoordinator::new(config.server.shutdown_timeout);
        let listener = tokio::net::TcpListener::bind(config.server.address()).await?;
        let local_addr = listener.local_addr()?;
        info!(
            address = %local_addr,
            default_limit = config.pagination.default_limit,
            "REST API listening"
        );

        let api_shutdown = shutdown.signal();
        let api_server = axum::serve(listener, router).with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("REST API received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!(error = %e, "REST API server error");
            }
        });

        Ok(Self {
            repos,
            config,
            local_addr,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the server to stop once shutdown has been triggered, bounded
    /// by `server.shutdown_timeout`.
    pub async fn wait(self) {
        let Self {
            shutdown, api_task, ..
        } = self;

        let finished = shutdown
            .shutdown_with_cleanup(|| async move {
                match api_task.await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!(error = %e, "REST API task panicked"),
                }
            })
            .await;

        if finished {
            info!("Shutdown complete");
        } else {
            warn!("In-flight requests were abandoned");
        }
    }

    pub async fn shutdown(self) {
        info!("Shutting down telemedicine service...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

/// Initialize tracing from the logging config. `RUST_LOG` wins over
/// `logging.level` when set.
///
/// Call once at process startup, before [`ServerHandle::start`].
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".into();
        config.server.port = 0;
        config.server.shutdown_timeout = 5;
        config
    }

    #[tokio::test]
    async fn starts_seeds_and_shuts_down() {
        let handle = ServerHandle::start(ServerOptions {
            config: local_config(),
            repositories: None,
        })
        .await
        .unwrap();

        assert_ne!(handle.local_addr.port(), 0);
        assert!(handle.is_running());
        assert!(!handle.repos.roles.find_all().await.unwrap().is_empty());

        tokio::time::timeout(std::time::Duration::from_secs(10), handle.shutdown())
            .await
            .expect("server stopped in time");
    }

    #[tokio::test]
    async fn seeding_can_be_disabled() {
        let mut config = local_config();
        config.storage.seed_demo_data = false;
        let handle = ServerHandle::start(ServerOptions {
            config,
            repositories: None,
        })
        .await
        .unwrap();

        assert!(handle.repos.drug_types.find_all().await.unwrap().is_empty());
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn invalid_config_is_refused() {
        let mut config = local_config();
        config.pagination.default_limit = 0;
        let result = ServerHandle::start(ServerOptions {
            config,
            repositories: None,
        })
        .await;
        assert!(result.is_err());
    }
}
