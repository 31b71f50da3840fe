//! codepad-store: Postgres-backed persistence for codepad editing sessions
//!
//! A session is an id, an editable text body, and a syntax tag. The store
//! exposes destructive table bootstrap (`initialize`), bulk `clear`, and a
//! single CRUD `dispatch` entry point over a pooled connection set.
//!
//! ```ignore
//! let config = DbConfig::from_env()?;
//! let pool = db::create_pool(&config).await?;
//! let store = SessionStore::new(pool);
//! store.initialize().await?;
//! let row = store.dispatch(&request).await;
//! ```

pub mod config;
pub mod db;
pub mod models;

pub use config::{ConfigError, DbConfig};
pub use db::{create_pool, DbError, Session, SessionStore};
pub use models::{Method, SessionRequest};
