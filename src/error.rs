// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use std::fmt;

use crate::{
    utils::flash::{Notice, redirect_with},
    views,
};

/// The record a `NotFound` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    User,
    LearnItems,
    Questions,
}

/// Global Application Error Enum.
/// Every variant ends in a rendered page or a redirect carrying a notice,
/// never in an unhandled fault.
#[derive(Debug)]
pub enum AppError {
    // No identity in the session: back to the login page.
    NotAuthenticated,

    // Username or email already taken.
    DuplicateIdentity,

    // Unknown user, or a quiz without content.
    NotFound(Missing),

    // Known user, wrong password.
    BadCredential,

    // Form input failed validation.
    BadRequest(String),

    // Store unreachable or query failure.
    Persistence(String),

    // Hashing or session signing failure.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotAuthenticated => write!(f, "not authenticated"),
            AppError::DuplicateIdentity => write!(f, "username or email already exists"),
            AppError::NotFound(missing) => write!(f, "{missing:?} not found"),
            AppError::BadCredential => write!(f, "bad credential"),
            AppError::BadRequest(msg) => write!(f, "bad request: {msg}"),
            AppError::Persistence(msg) => write!(f, "persistence error: {msg}"),
            AppError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// The notice shown to the user for this error.
    pub fn notice(&self) -> Notice {
        match self {
            AppError::NotAuthenticated => Notice::LoginRequired,
            AppError::DuplicateIdentity => Notice::DuplicateIdentity,
            AppError::NotFound(Missing::User) => Notice::UserNotFound,
            AppError::NotFound(Missing::LearnItems) => Notice::NoLearningItems,
            AppError::NotFound(Missing::Questions) => Notice::NoQuestions,
            AppError::BadCredential => Notice::IncorrectPassword,
            AppError::BadRequest(_) => Notice::InvalidForm,
            AppError::Persistence(_) | AppError::Internal(_) => Notice::Unexpected,
        }
    }
}

/// Redirects with a notice where the user can recover, renders an error page otherwise.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let notice = self.notice();
        let target = match &self {
            AppError::NotAuthenticated | AppError::BadCredential => "/login",
            AppError::DuplicateIdentity => "/signup",
            AppError::NotFound(_) => "/quiz",
            AppError::BadRequest(msg) => {
                tracing::debug!("Rejected form input: {}", msg);
                return (
                    StatusCode::BAD_REQUEST,
                    views::pages::error_page(notice, None),
                )
                    .into_response();
            }
            AppError::Persistence(msg) | AppError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    views::pages::error_page(notice, None),
                )
                    .into_response();
            }
        };

        redirect_with(CookieJar::new(), notice, target)
    }
}

/// Converts `sqlx::Error` into `AppError::Persistence`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}
