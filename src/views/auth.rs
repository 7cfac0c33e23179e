// src/views/auth.rs

use maud::{Markup, html};

use crate::utils::flash::Notice;

use super::page;

pub fn login_page(pending: Option<Notice>) -> Markup {
    page(
        "Log in",
        None,
        pending,
        html! {
            h1 { "Log in" }
            form method="post" action="/login" {
                label {
                    "Username"
                    input name="username" type="text" autocomplete="username" required;
                }
                label {
                    "Password"
                    input name="password" type="password" autocomplete="current-password" required;
                }
                button type="submit" { "Log in" }
            }
            p { "No account yet? " a href="/signup" { "Sign up" } }
        },
    )
}

pub fn signup_page(pending: Option<Notice>) -> Markup {
    page(
        "Sign up",
        None,
        pending,
        html! {
            h1 { "Sign up" }
            form method="post" action="/signup" {
                label {
                    "Username"
                    input name="username" type="text" autocomplete="username" minlength="3" maxlength="50" required;
                }
                label {
                    "Email"
                    input name="email" type="email" autocomplete="email" required;
                }
                label {
                    "Password"
                    input name="password" type="password" autocomplete="new-password" minlength="4" maxlength="128" required;
                }
                button type="submit" { "Create account" }
            }
            p { "Already registered? " a href="/login" { "Log in" } }
        },
    )
}
