// src/db/users.rs
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

pub(crate) fn timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

/// Insert a new user. Returns `Ok(None)` when the email is already taken.
/// Email should already be normalized by caller (trim/lowercase).
pub fn create_user(
    conn: &Connection,
    name: &str,
    email: &str,
    password_hash: &str,
    now: i64,
) -> Result<Option<User>, ServerError> {
    let inserted = conn
        .execute(
            "insert or ignore into users (name, email, password_hash, created_at) values (?, ?, ?, ?)",
            params![name, email, password_hash, now],
        )
        .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    if inserted == 0 {
        return Ok(None);
    }

    Ok(Some(User {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        email: email.to_string(),
        created_at: timestamp(now),
    }))
}

pub fn find_credentials_by_email(
    conn: &Connection,
    email: &str,
) -> Result<Option<UserCredentials>, ServerError> {
    conn.query_row(
        "select id, name, email, password_hash, created_at from users where email = ?",
        params![email],
        |r| {
            Ok(UserCredentials {
                user: User {
                    id: r.get(0)?,
                    name: r.get(1)?,
                    email: r.get(2)?,
                    created_at: timestamp(r.get(4)?),
                },
                password_hash: r.get(3)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select user failed: {e}")))
}
