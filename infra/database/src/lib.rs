//! # Document Store Connection
//!
//! Opens the optional [SurrealDB](https://surrealdb.com) connection configured for the
//! claims server. The connection is established at startup, reported by the health
//! endpoint and closed on shutdown; no endpoint reads or writes through it.
//!
//! ```rust
//! use chub_database::{Database, DatabaseError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), DatabaseError> {
//!     let db = Database::builder().url("mem://").session("chub", "claims").init().await?;
//!     assert!(db.is_healthy().await);
//!     db.close();
//!     Ok(())
//! }
//! ```

mod error;

pub use error::{DatabaseError, DatabaseErrorExt};
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;
use surrealdb::Surreal;
use surrealdb::engine::any::{Any, connect};
use surrealdb::opt::auth::Root;
use tracing::{info, instrument, warn};

const HEALTH_ATTEMPTS: u32 = 3;
const INITIAL_RETRY_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct DatabaseInner {
    instance: Surreal<Any>,
    ns: String,
    db: String,
}

impl Drop for DatabaseInner {
    fn drop(&mut self) {
        info!(ns = %self.ns, db = %self.db, "SurrealDB connection closed");
    }
}

/// Cloneable handle to the document store session.
#[derive(Debug, Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl Database {
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::default()
    }

    /// Runs the engine health check once.
    pub async fn is_healthy(&self) -> bool {
        self.inner.instance.health().await.is_ok()
    }

    /// Releases this handle. The connection itself closes once the last clone is gone.
    pub fn close(self) {
        if Arc::strong_count(&self.inner) > 1 {
            warn!(ns = %self.inner.ns, "Database handle released while other clones are alive");
        }
    }
}

impl Deref for Database {
    type Target = Surreal<Any>;

    fn deref(&self) -> &Self::Target {
        &self.inner.instance
    }
}

/// A fluent builder for establishing the `SurrealDB` connection.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug, Default)]
pub struct DatabaseBuilder {
    url: Option<String>,
    ns: Option<String>,
    db: Option<String>,
    auth: Option<(String, String)>,
}

impl DatabaseBuilder {
    /// Connection URL (`mem://`, `ws://host:8000`, `http://...`).
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Namespace and database to activate once connected.
    pub fn session(mut self, namespace: impl Into<String>, database: impl Into<String>) -> Self {
        self.ns = Some(namespace.into());
        self.db = Some(database.into());
        self
    }

    /// Root credentials; omit for unauthenticated engines like `mem://`.
    pub fn auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some((username.into(), password.into()));
        self
    }

    /// Connects, waits for the engine to report healthy (3 attempts, exponential
    /// backoff from 500 ms), signs in when credentials were given and activates the session.
    ///
    /// # Errors
    /// * [`DatabaseError::Validation`] if URL, namespace or database is missing.
    /// * [`DatabaseError::Connection`] if the engine cannot start or stays unhealthy.
    /// * [`DatabaseError::Auth`] if the credentials are rejected.
    /// * [`DatabaseError::Surreal`] if the session cannot be activated.
    #[instrument(skip(self), fields(url = self.url, ns = self.ns, db = self.db))]
    pub async fn init(self) -> Result<Database, DatabaseError> {
        let url = required(self.url, "URL is required")?;
        let ns = required(self.ns, "Namespace is required")?;
        let db = required(self.db, "Database is required")?;

        let instance = connect(&url).await.map_err(|e| DatabaseError::Connection {
            message: e.to_string().into(),
            context: Some("Initializing engine".into()),
        })?;

        let mut delay = INITIAL_RETRY_DELAY;
        for attempt in 1..=HEALTH_ATTEMPTS {
            if instance.health().await.is_ok() {
                break;
            }
            if attempt == HEALTH_ATTEMPTS {
                return Err(DatabaseError::Connection {
                    message: "Unhealthy after retries".into(),
                    context: Some(url.into()),
                });
            }
            warn!(attempt, ?delay, "Database not ready, retrying...");
            tokio::time::sleep(delay).await;
            delay *= 2;
        }

        if let Some((username, password)) = self.auth {
            instance.signin(Root { username, password }).await.map_err(|e| {
                DatabaseError::Auth { message: e.to_string().into(), context: Some(url.into()) }
            })?;
        }

        instance.use_ns(&ns).use_db(&db).await.context("Activating session")?;

        let version =
            instance.version().await.map_or_else(|_| "unknown".to_owned(), |v| v.to_string());
        info!(namespace = %ns, database = %db, %version, "SurrealDB connection established");

        Ok(Database { inner: Arc::new(DatabaseInner { instance, ns, db }) })
    }
}

fn required(value: Option<String>, message: &'static str) -> Result<String, DatabaseError> {
    value.ok_or(DatabaseError::Validation { message: message.into(), context: None })
}
