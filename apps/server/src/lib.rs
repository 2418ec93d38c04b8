//! # ClaimsHub Server
//!
//! The Income Insurance Claims API on `Axum`: login, itinerary lookup, baggage claim
//! filing and policy details over the seeded traveller directory.
//!
//! ## Example
//! ```no_run
//! use chub_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(8001)
//!         .build()
//!         .await?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use anyhow::{Context, Result};
use axum::Router;
use axum_server::Handle;
use chub::Capabilities;
use chub::domain::config::ApiConfig;
use chub::kernel::clock::Clock;
use chub::kernel::directory::Directory;
use chub::kernel::ids::ClaimIdGenerator;
use chub::kernel::server::state::ApiState;
use chub_database::Database;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// A fluent builder for configuring and initializing the [`Server`].
///
/// Unset collaborators fall back to production ones: the seeded directory,
/// the system clock and random claim ids.
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
    directory: Option<Directory>,
    clock: Option<Arc<dyn Clock>>,
    claim_ids: Option<Arc<dyn ClaimIdGenerator>>,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Serves `directory` instead of the seeded travellers.
    pub fn directory(mut self, directory: Directory) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn claim_ids(mut self, claim_ids: impl ClaimIdGenerator + 'static) -> Self {
        self.claim_ids = Some(Arc::new(claim_ids));
        self
    }

    async fn init_database(&self) -> Result<Option<Database>> {
        let Some(db_cfg) = &self.cfg.database else {
            info!("No [database] section configured, document store disabled");
            return Ok(None);
        };

        let mut builder =
            Database::builder().url(&db_cfg.url).session(&db_cfg.namespace, &db_cfg.database);

        if let Some(creds) = &db_cfg.credentials {
            builder = builder.auth(&creds.username, &creds.password);
        }

        let db = builder.init().await.context("Failed to establish database connection")?;
        Ok(Some(db))
    }

    fn validate_ssl_config(&self) -> Result<()> {
        if let Some(ssl) = &self.cfg.server.ssl {
            if !ssl.cert.exists() {
                anyhow::bail!("SSL certificate not found at: {}", ssl.cert.display());
            }
            if !ssl.key.exists() {
                anyhow::bail!("SSL key not found at: {}", ssl.key.display());
            }

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let metadata = ssl.key.metadata()?;
                if metadata.permissions().mode() & 0o077 != 0 {
                    tracing::warn!(
                        "SECURITY: SSL Private Key {} has insecure permissions (should be 600)",
                        ssl.key.display()
                    );
                }
            }
        }
        Ok(())
    }

    fn capabilities(&mut self) -> Result<Capabilities> {
        let mut capabilities =
            Capabilities::production().context("Failed to prepare production capabilities")?;

        if let Some(directory) = self.directory.take() {
            capabilities.directory = directory;
        }
        if let Some(clock) = self.clock.take() {
            capabilities.clock = clock;
        }
        if let Some(claim_ids) = self.claim_ids.take() {
            capabilities.claim_ids = claim_ids;
        }

        Ok(capabilities)
    }

    /// Consumes the builder and initializes the server.
    ///
    /// # Process
    /// 1. Validates the TLS files, if HTTPS is configured
    /// 2. Connects the optional document store
    /// 3. Initializes the feature slices over the injected capabilities
    /// 4. Constructs application state
    ///
    /// # Errors
    /// Returns an error if:
    /// * The configured database cannot be reached
    /// * A feature slice rejects its capabilities (e.g. an empty directory)
    /// * SSL certificate/key files are missing
    pub async fn build(mut self) -> Result<Server> {
        self.validate_ssl_config()?;

        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(%address, "Initializing server");

        let db = self.init_database().await?;

        let capabilities = self.capabilities()?;
        let slices = chub::init(&capabilities).context("Platform bootstrap failed")?;

        let state = ApiState::builder()
            .config(self.cfg)
            .db(db)
            .register_slices(slices)
            .build()
            .context("Failed to finalize API state registry")?;

        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The complete application router: API, health, docs and middleware.
    ///
    /// ```no_run
    /// # use chub_server::Server;
    /// # async fn example() -> anyhow::Result<()> {
    /// let app = Server::builder().build().await?.router();
    /// # drop(app);
    /// # Ok(())
    /// # }
    /// ```
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    /// Starts the server and runs until the shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured address
    /// or if SSL/TLS setup fails.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);

        info!(%address, ssl = cfg.server.ssl.is_some(), "Starting server");

        let app = self.router();

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        });

        if let Some(ssl_config) = &cfg.server.ssl {
            info!("Starting HTTPS server on https://{address}");

            let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
                &ssl_config.cert,
                &ssl_config.key,
            )
            .await
            .context("Failed to load SSL/TLS certificates")?;

            axum_server::bind_rustls(address, tls_config)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTPS server failed")?;
        } else {
            info!("Starting HTTP server on http://{address}");

            axum_server::bind(address)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTP server failed")?;
        }

        let database = self.state.database.clone();
        drop(self.state);
        if let Some(db) = database {
            db.close();
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res.context("Ctrl+C signal received")?;
        },
        res = terminate => {
            res.context("SIGTERM signal received")?;
        },
    }

    Ok(())
}
