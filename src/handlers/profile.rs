use std::sync::Arc;

use axum::{
    Extension,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::{
    error::{AppError, Missing},
    store::Store,
    utils::{
        flash::{Notice, redirect_with},
        session::Claims,
    },
    views,
};

/// Get current user's profile.
/// A store failure sends the user back to the quiz list instead of an error page.
pub async fn get_me(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    jar: CookieJar,
) -> Response {
    match store.find_user_by_username(&claims.sub).await {
        Ok(Some(user)) => views::pages::profile_page(&user).into_response(),
        Ok(None) => AppError::NotFound(Missing::User).into_response(),
        Err(e) => {
            tracing::error!("Failed to load profile for {}: {}", claims.sub, e);
            redirect_with(jar, Notice::ProfileUnavailable, "/quiz")
        }
    }
}
