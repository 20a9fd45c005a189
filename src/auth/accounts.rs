// src/auth/accounts.rs

//! Sign-up and sign-in. Both end with a fresh session token.

use crate::auth::password::{hash_password, normalize_email, validate_password, verify_password};
use crate::auth::sessions::create_session;
use crate::db::users::{create_user, find_credentials_by_email, User};
use crate::errors::ServerError;
use rusqlite::Connection;

#[derive(Debug, Clone)]
pub struct SignedIn {
    pub user: User,
    /// Raw session token for the cookie.
    pub session_token: String,
}

pub fn register(
    conn: &Connection,
    name: &str,
    email: &str,
    password: &str,
    now: i64,
) -> Result<SignedIn, ServerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ServerError::BadRequest("Name is required".into()));
    }
    let email = normalize_email(email)?;
    validate_password(password)?;

    let hash = hash_password(password)?;
    let Some(user) = create_user(conn, name, &email, &hash, now)? else {
        return Err(ServerError::BadRequest("User already exists".into()));
    };

    let session_token = create_session(conn, user.id, now)?;
    tracing::info!(user_id = user.id, "registered new user");
    Ok(SignedIn {
        user,
        session_token,
    })
}

pub fn login(
    conn: &Connection,
    email: &str,
    password: &str,
    now: i64,
) -> Result<SignedIn, ServerError> {
    let invalid = || ServerError::Unauthorized("Invalid credentials".into());

    let email = normalize_email(email).map_err(|_| invalid())?;
    let creds = find_credentials_by_email(conn, &email)?.ok_or_else(invalid)?;
    if !verify_password(password, &creds.password_hash) {
        return Err(invalid());
    }

    let session_token = create_session(conn, creds.user.id, now)?;
    tracing::info!(user_id = creds.user.id, "user logged in");
    Ok(SignedIn {
        user: creds.user,
        session_token,
    })
}
