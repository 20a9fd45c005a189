// src/auth/context.rs
use crate::auth::sessions::load_user_from_session;
use crate::db::users::User;
use crate::db::Database;
use crate::errors::ServerError;
use astra::Request;

pub const SESSION_COOKIE: &str = "session";

/// Who is making this request. Built fresh for every request from the
/// session cookie and handed to the handlers that need it.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub user: Option<User>,
    pub session_token: Option<String>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_request(req: &Request, db: &Database, now: i64) -> Result<Self, ServerError> {
        let Some(token) = session_cookie(req) else {
            return Ok(Self::anonymous());
        };
        let user = db.with_conn(|conn| load_user_from_session(conn, &token, now))?;
        Ok(Self {
            user,
            session_token: Some(token),
        })
    }

    pub fn require_user(&self) -> Result<&User, ServerError> {
        self.user
            .as_ref()
            .ok_or_else(|| ServerError::Unauthorized("Please log in".into()))
    }
}

/// Value of the `session` cookie, if present and non-empty.
pub fn session_cookie(req: &Request) -> Option<String> {
    req.headers()
        .get_all("cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

pub fn session_set_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie =
        format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

pub fn session_clear_cookie(secure: bool) -> String {
    session_set_cookie("", 0, secure)
}
