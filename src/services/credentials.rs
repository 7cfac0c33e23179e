// src/services/credentials.rs

use validator::Validate;

use crate::{
    error::{AppError, Missing},
    models::user::{NewUser, SignupForm, User, invalid_fields},
    store::Store,
    utils::hash::{hash_password, verify_password},
};

/// Creates an account.
///
/// Fails with `DuplicateIdentity` when the username or email is taken; the
/// store is left untouched in that case.
pub async fn register(store: &dyn Store, form: SignupForm) -> Result<User, AppError> {
    let form = form.trimmed();
    form.validate()
        .map_err(|validation_errors| AppError::BadRequest(invalid_fields(&validation_errors)))?;

    if store.find_user_by_username(&form.username).await?.is_some() {
        return Err(AppError::DuplicateIdentity);
    }

    let password_hash = hash_password(&form.password)?;

    let user = store
        .insert_user(NewUser {
            username: form.username,
            email: form.email,
            password_hash,
        })
        .await?;

    tracing::info!("Registered user {}", user.username);
    Ok(user)
}

/// Checks a username/password pair.
///
/// Unknown users are `NotFound(User)`, wrong passwords `BadCredential`.
pub async fn authenticate(
    store: &dyn Store,
    username: &str,
    password: &str,
) -> Result<User, AppError> {
    let username = username.trim();

    let user = store
        .find_user_by_username(username)
        .await?
        .ok_or(AppError::NotFound(Missing::User))?;

    if !verify_password(password, &user.password)? {
        return Err(AppError::BadCredential);
    }

    Ok(user)
}
