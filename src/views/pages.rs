// src/views/pages.rs

use maud::{Markup, html};

use crate::{models::user::User, utils::flash::Notice};

use super::page;

pub fn reviews_page(identity: Option<&str>) -> Markup {
    page(
        "Reviews",
        identity,
        None,
        html! {
            h1 { "Reviews" }
            blockquote { "Short daily sessions made the signs stick." }
            blockquote { "The shuffled quizzes keep me honest." }
        },
    )
}

pub fn about_page(identity: Option<&str>) -> Markup {
    page(
        "About",
        identity,
        None,
        html! {
            h1 { "About" }
            p {
                "SignMaster helps you learn item by item, then test yourself "
                "with quizzes whose questions and options are shuffled on every attempt."
            }
        },
    )
}

pub fn help_page(username: &str) -> Markup {
    page(
        "Help",
        Some(username),
        None,
        html! {
            h1 { "Help" }
            dl {
                dt { "Learn" }
                dd { "Step through a quiz's items with their answers shown." }
                dt { "Take quiz" }
                dd {
                    "Answer one question at a time. Your progress is kept until you finish "
                    "or start a different quiz."
                }
            }
        },
    )
}

pub fn profile_page(user: &User) -> Markup {
    page(
        "Profile",
        Some(&user.username),
        None,
        html! {
            h1 { "Profile" }
            dl {
                dt { "Username" }
                dd { (user.username) }
                dt { "Email" }
                dd { (user.email) }
            }
        },
    )
}

pub fn error_page(notice: Notice, identity: Option<&str>) -> Markup {
    page(
        "Error",
        identity,
        Some(notice),
        html! {
            p { a href="/" { "Back to the start page" } }
        },
    )
}
