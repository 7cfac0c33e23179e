// src/handlers/auth.rs

use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use maud::Markup;
use validator::Validate;

use crate::{
    config::Config,
    error::{AppError, Missing},
    models::user::{LoginForm, SignupForm, invalid_fields},
    services::credentials::{authenticate, register},
    store::Store,
    utils::{
        flash::{Notice, redirect_with, take_flash},
        session::{Claims, clear_session, read_session, store_session},
    },
    views,
};

/// Sends signed-in users to the quiz list, everyone else to the login page.
pub async fn home(State(config): State<Config>, jar: CookieJar) -> Redirect {
    match read_session(&jar, &config.secret_key) {
        Some(_) => Redirect::to("/quiz"),
        None => Redirect::to("/login"),
    }
}

pub async fn login_form(jar: CookieJar) -> (CookieJar, Markup) {
    let (jar, pending) = take_flash(jar);
    (jar, views::auth::login_page(pending))
}

/// Verifies the credentials and establishes the session.
pub async fn login(
    State(store): State<Arc<dyn Store>>,
    State(config): State<Config>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if let Err(validation_errors) = form.validate() {
        tracing::debug!("Invalid login form: {}", invalid_fields(&validation_errors));
        return Ok(redirect_with(jar, Notice::InvalidForm, "/login"));
    }

    match authenticate(store.as_ref(), &form.username, &form.password).await {
        Ok(user) => {
            let jar = store_session(jar, &Claims::new(&user.username), &config)?;
            tracing::info!("User {} logged in", user.username);
            Ok((jar, Redirect::to("/quiz")).into_response())
        }
        Err(AppError::NotFound(Missing::User)) => Ok(redirect_with(jar, Notice::NoAccount, "/signup")),
        Err(AppError::BadCredential) => {
            Ok(redirect_with(jar, Notice::IncorrectPassword, "/login"))
        }
        Err(e) => Err(e),
    }
}

pub async fn signup_form(jar: CookieJar) -> (CookieJar, Markup) {
    let (jar, pending) = take_flash(jar);
    (jar, views::auth::signup_page(pending))
}

/// Creates the account, then sends the user to the login page.
pub async fn signup(
    State(store): State<Arc<dyn Store>>,
    jar: CookieJar,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    match register(store.as_ref(), form).await {
        Ok(_) => Ok(redirect_with(jar, Notice::AccountCreated, "/login")),
        Err(AppError::DuplicateIdentity) => {
            Ok(redirect_with(jar, Notice::DuplicateIdentity, "/signup"))
        }
        Err(AppError::BadRequest(msg)) => {
            tracing::debug!("Invalid signup form: {}", msg);
            Ok(redirect_with(jar, Notice::InvalidForm, "/signup"))
        }
        Err(e) => Err(e),
    }
}

/// Clears the whole session, including any in-flight attempt.
pub async fn logout(jar: CookieJar) -> Response {
    redirect_with(clear_session(jar), Notice::LoggedOut, "/login")
}
