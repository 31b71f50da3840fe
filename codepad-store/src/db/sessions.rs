//! Session store - CRUD over the sessions table
//!
//! Every operation is one request/response round trip on a pooled
//! connection. The typed methods return `Result<Option<Session>, DbError>`
//! so callers can tell failure from absence; `dispatch` layers the legacy
//! contract on top, absorbing errors into `None`.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::models::{Method, SessionRequest};

/// Session record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Session {
    pub id: String,
    pub text: Option<String>,
    pub syntax: Option<String>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Store for codepad editing sessions.
pub struct SessionStore {
    pool: PgPool,
}

impl SessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Drop and recreate the sessions table.
    ///
    /// Destructive: existing data is discarded on every release reset. Not
    /// safe against concurrent readers.
    pub async fn initialize(&self) -> Result<(), DbError> {
        tracing::info!("resetting sessions table");

        sqlx::query("DROP TABLE IF EXISTS sessions")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE sessions (
                id TEXT,
                text TEXT,
                syntax TEXT,
                PRIMARY KEY (id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove all sessions without altering the schema.
    pub async fn clear(&self) -> Result<(), DbError> {
        sqlx::query("TRUNCATE sessions")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Insert a new session with only the id set; the remaining columns
    /// take their defaults. A duplicate id surfaces as an error.
    pub async fn create(&self, id: &str) -> Result<Option<Session>, DbError> {
        let session: Session =
            sqlx::query_as("INSERT INTO sessions (id) VALUES ($1) RETURNING id, text, syntax")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(Some(session))
    }

    /// Fetch a session by id.
    pub async fn get(&self, id: &str) -> Result<Option<Session>, DbError> {
        let session: Option<Session> =
            sqlx::query_as("SELECT id, text, syntax FROM sessions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(session)
    }

    /// Delete a session by id, returning the removed row when it existed.
    /// Idempotent: a miss is `None`, not an error.
    pub async fn delete(&self, id: &str) -> Result<Option<Session>, DbError> {
        let session: Option<Session> =
            sqlx::query_as("DELETE FROM sessions WHERE id = $1 RETURNING id, text, syntax")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(session)
    }

    /// Partial update of `text` and/or `syntax`.
    ///
    /// An empty `text` is an alias for deletion; `syntax` is ignored on that
    /// branch even when supplied. With neither field present the call
    /// degrades to a plain read instead of issuing a SET-less statement.
    pub async fn update(
        &self,
        id: &str,
        text: Option<&str>,
        syntax: Option<&str>,
    ) -> Result<Option<Session>, DbError> {
        if text == Some("") {
            return self.delete(id).await;
        }
        if text.is_none() && syntax.is_none() {
            return self.get(id).await;
        }

        let sql = build_update_sql(text.is_some(), syntax.is_some());
        let mut query = sqlx::query_as::<_, Session>(&sql);
        if let Some(text) = text {
            query = query.bind(text);
        }
        if let Some(syntax) = syntax {
            query = query.bind(syntax);
        }

        let session = query.bind(id).fetch_optional(&self.pool).await?;
        Ok(session)
    }

    /// Perform one CRUD operation and return at most one resulting row.
    ///
    /// Legacy contract: any store error is logged and absorbed, so `None`
    /// covers both "not found" and "store failed". Callers that need the
    /// distinction use the typed methods directly.
    pub async fn dispatch(&self, request: &SessionRequest) -> Option<Session> {
        let id = request.session_id.as_str();

        let result = match request.method {
            Method::Create => {
                tracing::info!(session_id = %id, "creating session");
                self.create(id).await
            }
            Method::Read => self.get(id).await,
            Method::Update => {
                self.update(id, request.text.as_deref(), request.syntax.as_deref())
                    .await
            }
            Method::Delete => {
                tracing::info!(session_id = %id, "deleting session");
                self.delete(id).await
            }
        };

        match result {
            Ok(session) => session,
            Err(e) => {
                tracing::error!(session_id = %id, error = %e, "session dispatch failed");
                None
            }
        }
    }
}

/// Assemble the partial UPDATE statement for the fields being set.
///
/// Each present field appends `name = $n,`; the trailing comma is trimmed
/// before the WHERE clause so that one or both fields yield valid SQL. The
/// id always binds last. Callers guarantee at least one field is set.
fn build_update_sql(set_text: bool, set_syntax: bool) -> String {
    let mut sql = String::from("UPDATE sessions SET");
    let mut n = 1;

    if set_text {
        sql.push_str(&format!(" text = ${n},"));
        n += 1;
    }
    if set_syntax {
        sql.push_str(&format!(" syntax = ${n},"));
        n += 1;
    }
    if sql.ends_with(',') {
        sql.pop();
    }

    sql.push_str(&format!(" WHERE id = ${n} RETURNING id, text, syntax"));
    sql
}
