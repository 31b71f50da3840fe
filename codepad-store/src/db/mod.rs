//! Database layer - connection pool and the session store
//!
//! # Design Principles
//!
//! - Fixed-size connection pool passed in explicitly - no process-global state
//! - One statement per operation, implicitly atomic - no transactions
//! - Concurrent dispatches for the same id are resolved by Postgres row
//!   consistency, not serialized here

pub mod pool;
pub mod sessions;

pub use pool::{create_pool, POOL_CONNECTIONS};
pub use sessions::{DbError, Session, SessionStore};
