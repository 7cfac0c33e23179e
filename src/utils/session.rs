// src/utils/session.rs

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::Config, error::AppError, quiz::QuizAttempt};

pub const SESSION_COOKIE_NAME: &str = "session";

/// Session claims, signed into the session cookie.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject - the authenticated username.
    pub sub: String,
    /// Expiration time as Unix timestamp.
    pub exp: usize,
    /// The in-flight quiz attempt, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt: Option<QuizAttempt>,
}

impl Claims {
    pub fn new(username: &str) -> Self {
        Self {
            sub: username.to_owned(),
            exp: 0,
            attempt: None,
        }
    }
}

/// Signs `claims` with a fresh expiration.
pub fn sign_session(
    claims: &Claims,
    secret: &str,
    expiration_seconds: u64,
) -> Result<String, AppError> {
    let expiration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::Internal(e.to_string()))?
        .as_secs() as usize
        + expiration_seconds as usize;

    let claims = Claims {
        exp: expiration,
        ..claims.clone()
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.to_string()))
}

/// Verifies and decodes a session token.
pub fn verify_session(token: &str, secret: &str) -> Result<Claims, AppError> {
    let token_data = decode(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::NotAuthenticated)?;

    Ok(token_data.claims)
}

/// Claims of the current request, if the session cookie is present and valid.
pub fn read_session(jar: &CookieJar, secret: &str) -> Option<Claims> {
    let token = jar.get(SESSION_COOKIE_NAME)?;
    verify_session(token.value(), secret).ok()
}

/// Writes `claims` into the session cookie.
pub fn store_session(jar: CookieJar, claims: &Claims, config: &Config) -> Result<CookieJar, AppError> {
    let token = sign_session(claims, &config.secret_key, config.session_expiration)?;

    Ok(jar.add(
        Cookie::build((SESSION_COOKIE_NAME, token))
            .path("/")
            .http_only(true)
            .secure(config.secure_cookies)
            .same_site(SameSite::Lax),
    ))
}

/// Drops the whole session.
pub fn clear_session(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/"))
}

/// Axum Middleware: Authentication.
///
/// Reads the session cookie. If it carries a valid identity, injects the
/// `Claims` into the request extensions for handlers to use.
/// Otherwise redirects to the login page with a notice.
pub async fn auth_middleware(
    State(config): State<Config>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let jar = CookieJar::from_headers(req.headers());

    match read_session(&jar, &config.secret_key) {
        Some(claims) if !claims.sub.is_empty() => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        _ => {
            tracing::debug!("Rejected unauthenticated request to {}", req.uri().path());
            Err(AppError::NotAuthenticated)
        }
    }
}
