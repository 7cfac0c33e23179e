// src/views/quiz.rs

use maud::{Markup, html};

use crate::{
    models::quiz::{LearnItem, Quiz, RandomizedQuestion},
    utils::flash::Notice,
};

use super::page;

pub fn quiz_url(quiz_id: i64) -> String {
    format!("/take_quiz/{quiz_id}")
}

pub fn learn_url(quiz_id: i64, idx: usize) -> String {
    format!("/learn/{quiz_id}?idx={idx}")
}

fn image(src: Option<&str>, alt: &str) -> Markup {
    html! {
        @if let Some(src) = src {
            img class="question-image" src=(src) alt=(alt);
        }
    }
}

pub fn quiz_list_page(username: &str, quizzes: &[Quiz], pending: Option<Notice>) -> Markup {
    page(
        "Quizzes",
        Some(username),
        pending,
        html! {
            h1 { "Welcome, " (username) }
            @if quizzes.is_empty() {
                p { (Notice::NoQuizzes.message()) }
            } @else {
                ul class="quiz-list" {
                    @for quiz in quizzes {
                        li {
                            strong { (quiz.title) }
                            " "
                            a href=(learn_url(quiz.id, 0)) { "Learn" }
                            " "
                            a href=(quiz_url(quiz.id)) { "Take quiz" }
                        }
                    }
                }
            }
        },
    )
}

pub fn learn_page(username: &str, quiz_id: i64, item: &LearnItem, idx: usize, total: usize) -> Markup {
    page(
        "Learn",
        Some(username),
        None,
        html! {
            p { "Item " (idx + 1) " / " (total) }
            h2 { (item.question_text) }
            (image(item.question_image.as_deref(), &item.question_text))
            p { "Answer: " strong { (item.answer) } }
            nav {
                ul {
                    @if idx > 0 {
                        li { a href=(learn_url(quiz_id, idx - 1)) { "Previous" } }
                    }
                    @if idx + 1 < total {
                        li { a href=(learn_url(quiz_id, idx + 1)) { "Next" } }
                    } @else {
                        li { a href=(quiz_url(quiz_id)) { "Take the quiz" } }
                    }
                }
            }
        },
    )
}

/// `current` is 1-based.
pub fn question_page(
    username: &str,
    quiz_id: i64,
    question: &RandomizedQuestion,
    current: usize,
    total: usize,
) -> Markup {
    page(
        "Quiz",
        Some(username),
        None,
        html! {
            p { "Question " (current) " of " (total) }
            h2 { (question.question_text) }
            (image(question.question_image.as_deref(), &question.question_text))
            form method="post" action=(quiz_url(quiz_id)) {
                fieldset {
                    @for (i, option) in question.options.iter().enumerate() {
                        label {
                            input type="radio" name="option" value=(i) required;
                            " " (option)
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
        },
    )
}

pub fn result_page(username: &str, quiz_id: i64, score: usize, total: usize) -> Markup {
    page(
        "Result",
        Some(username),
        None,
        html! {
            h1 { "Quiz complete" }
            p class="score" { "You scored " strong { (score) " / " (total) } }
            nav {
                ul {
                    li { a href=(quiz_url(quiz_id)) { "Try again" } }
                    li { a href="/quiz" { "Back to quizzes" } }
                }
            }
        },
    )
}
