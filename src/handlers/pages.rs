// src/handlers/pages.rs

use axum::{Extension, extract::State};
use axum_extra::extract::CookieJar;
use maud::Markup;

use crate::{
    config::Config,
    utils::session::{Claims, read_session},
    views,
};

fn identity(jar: &CookieJar, config: &Config) -> Option<String> {
    read_session(jar, &config.secret_key).map(|claims| claims.sub)
}

pub async fn reviews(State(config): State<Config>, jar: CookieJar) -> Markup {
    views::pages::reviews_page(identity(&jar, &config).as_deref())
}

pub async fn about(State(config): State<Config>, jar: CookieJar) -> Markup {
    views::pages::about_page(identity(&jar, &config).as_deref())
}

pub async fn help(Extension(claims): Extension<Claims>) -> Markup {
    views::pages::help_page(&claims.sub)
}
