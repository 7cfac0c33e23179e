// src/utils/flash.rs

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const FLASH_COOKIE_NAME: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Success,
}

impl Level {
    /// CSS class used by the layout.
    pub fn class(self) -> &'static str {
        match self {
            Level::Error => "notice error",
            Level::Success => "notice success",
        }
    }
}

/// One-shot messages carried across a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    LoginRequired,
    NoAccount,
    IncorrectPassword,
    DuplicateIdentity,
    AccountCreated,
    LoggedOut,
    NoQuizzes,
    NoLearningItems,
    NoQuestions,
    UserNotFound,
    ProfileUnavailable,
    InvalidForm,
    Unexpected,
}

const ALL_NOTICES: [Notice; 13] = [
    Notice::LoginRequired,
    Notice::NoAccount,
    Notice::IncorrectPassword,
    Notice::DuplicateIdentity,
    Notice::AccountCreated,
    Notice::LoggedOut,
    Notice::NoQuizzes,
    Notice::NoLearningItems,
    Notice::NoQuestions,
    Notice::UserNotFound,
    Notice::ProfileUnavailable,
    Notice::InvalidForm,
    Notice::Unexpected,
];

impl Notice {
    /// Stable identifier stored in the flash cookie.
    pub fn code(self) -> &'static str {
        match self {
            Notice::LoginRequired => "login_required",
            Notice::NoAccount => "no_account",
            Notice::IncorrectPassword => "incorrect_password",
            Notice::DuplicateIdentity => "duplicate_identity",
            Notice::AccountCreated => "account_created",
            Notice::LoggedOut => "logged_out",
            Notice::NoQuizzes => "no_quizzes",
            Notice::NoLearningItems => "no_learning_items",
            Notice::NoQuestions => "no_questions",
            Notice::UserNotFound => "user_not_found",
            Notice::ProfileUnavailable => "profile_unavailable",
            Notice::InvalidForm => "invalid_form",
            Notice::Unexpected => "unexpected",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ALL_NOTICES.into_iter().find(|n| n.code() == code)
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::LoginRequired => "Please log in first.",
            Notice::NoAccount => "No account found. Please sign up first.",
            Notice::IncorrectPassword => "Incorrect password.",
            Notice::DuplicateIdentity => "Username or Email already exists!",
            Notice::AccountCreated => "Account created successfully!",
            Notice::LoggedOut => "You have been logged out.",
            Notice::NoQuizzes => "No quizzes available.",
            Notice::NoLearningItems => "This quiz has no learning items.",
            Notice::NoQuestions => "This quiz has no questions.",
            Notice::UserNotFound => "User not found.",
            Notice::ProfileUnavailable => "Unable to fetch user data.",
            Notice::InvalidForm => "Please check the form and try again.",
            Notice::Unexpected => "Something went wrong. Please try again.",
        }
    }

    pub fn level(self) -> Level {
        match self {
            Notice::AccountCreated | Notice::LoggedOut => Level::Success,
            _ => Level::Error,
        }
    }
}

/// Queues a notice for the next rendered page.
pub fn flash(jar: CookieJar, notice: Notice) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE_NAME, notice.code()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Reads and removes the pending notice, if any.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Notice>) {
    let Some(code) = jar.get(FLASH_COOKIE_NAME).map(|c| c.value().to_owned()) else {
        return (jar, None);
    };

    let jar = jar.remove(Cookie::build(FLASH_COOKIE_NAME).path("/"));
    (jar, Notice::from_code(&code))
}

/// `303 See Other` to `target` with a queued notice.
pub fn redirect_with(jar: CookieJar, notice: Notice, target: &str) -> Response {
    (flash(jar, notice), Redirect::to(target)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_resolves_to_its_notice() {
        for notice in ALL_NOTICES {
            assert_eq!(Notice::from_code(notice.code()), Some(notice));
        }
    }

    #[test]
    fn test_unknown_code_is_ignored() {
        assert_eq!(Notice::from_code("<script>"), None);
    }

    #[test]
    fn test_take_flash_consumes_notice() {
        let jar = flash(CookieJar::new(), Notice::LoggedOut);
        let (jar, notice) = take_flash(jar);

        assert_eq!(notice, Some(Notice::LoggedOut));
        assert!(jar.get(FLASH_COOKIE_NAME).is_none());
    }

    #[test]
    fn test_take_flash_without_cookie() {
        let (_, notice) = take_flash(CookieJar::new());
        assert_eq!(notice, None);
    }
}
