// src/views/layout.rs

use maud::{DOCTYPE, Markup, html};

use crate::utils::flash::Notice;

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/style.css";
    }
}

fn header(identity: Option<&str>) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li { a href="/" { strong { "SignMaster" } } }
                    li { a href="/about" { "About" } }
                    li { a href="/reviews" { "Reviews" } }
                }
                ul {
                    @if let Some(username) = identity {
                        li { a href="/quiz" { "Quizzes" } }
                        li { a href="/help" { "Help" } }
                        li { a href="/profile" { (username) } }
                        li { a href="/logout" { "Log out" } }
                    } @else {
                        li { a href="/login" { "Log in" } }
                        li { a href="/signup" { "Sign up" } }
                    }
                }
            }
        }
    }
}

pub fn notice(notice: Option<Notice>) -> Markup {
    html! {
        @if let Some(n) = notice {
            div class=(n.level().class()) role="alert" { (n.message()) }
        }
    }
}

pub fn page(title: &str, identity: Option<&str>, pending: Option<Notice>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (css())
                title { (title) " - SignMaster" }
            }
            body {
                (header(identity))
                main {
                    (notice(pending))
                    (body)
                }
            }
        }
    }
}
