//! Connectivity smoke test against a `posts` table.
//!
//! Used only to prove that a connection opened from a URL or a settings file can
//! run queries. The table's columns are not known up front, so rows come back as
//! JSON objects.

use crate::errors::Result;
use sea_orm::{ConnectionTrait, FromQueryResult, JsonValue, Statement};

const SELECT_POSTS: &str = "SELECT * FROM posts";

/// The statement [`fetch_posts`] runs.
#[must_use]
pub fn posts_statement<C>(db: &C) -> Statement
where
    C: ConnectionTrait,
{
    Statement::from_string(db.get_database_backend(), SELECT_POSTS)
}

/// Fetches every row of `posts`.
///
/// # Errors
/// Returns a database error if the table does not exist or the connection is gone.
pub async fn fetch_posts<C>(db: &C) -> Result<Vec<JsonValue>>
where
    C: ConnectionTrait,
{
    JsonValue::find_by_statement(posts_statement(db))
        .all(db)
        .await
        .map_err(Into::into)
}
