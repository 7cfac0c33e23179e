// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Extension, Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use maud::Markup;
use serde::Deserialize;

use crate::{
    error::{AppError, Missing},
    models::quiz::RandomizedQuestion,
    quiz::{QuizAttempt, Step, randomize_quiz},
    state::AppState,
    store::Store,
    utils::{
        flash::take_flash,
        session::{Claims, store_session},
    },
    views::{self, quiz::quiz_url},
};

/// Form posted from the question page. `option` is the position of the
/// chosen option on the page.
#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    pub option: Option<String>,
}

impl AnswerForm {
    fn choice(&self) -> Option<usize> {
        self.option.as_deref()?.trim().parse().ok()
    }
}

/// Lists all quizzes.
pub async fn list_quizzes(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    jar: CookieJar,
) -> Result<(CookieJar, Markup), AppError> {
    let (jar, pending) = take_flash(jar);
    let quizzes = store.list_quizzes().await?;

    Ok((jar, views::quiz::quiz_list_page(&claims.sub, &quizzes, pending)))
}

/// Starts or resumes the session's attempt at `quiz_id` and materializes its
/// question order from the attempt seed.
async fn load_attempt(
    store: &dyn Store,
    current: Option<QuizAttempt>,
    quiz_id: i64,
) -> Result<(QuizAttempt, Vec<RandomizedQuestion>), AppError> {
    let attempt = QuizAttempt::start_or_resume(current, quiz_id, rand::random::<u64>);
    let questions = randomize_quiz(store, quiz_id, attempt.seed).await?;

    if questions.is_empty() {
        return Err(AppError::NotFound(Missing::Questions));
    }

    Ok((attempt, questions))
}

/// Shows the current question of the attempt.
pub async fn show_question(
    State(state): State<AppState>,
    Extension(mut claims): Extension<Claims>,
    Path(quiz_id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let store = state.store.as_ref();
    let (mut attempt, mut questions) = load_attempt(store, claims.attempt.take(), quiz_id).await?;

    if attempt.is_exhausted(questions.len()) {
        tracing::warn!(
            "Attempt for quiz {} is past its last question, starting over",
            quiz_id
        );
        (attempt, questions) = load_attempt(store, None, quiz_id).await?;
    }

    let total = questions.len();
    let question = questions
        .get(attempt.index)
        .ok_or(AppError::NotFound(Missing::Questions))?;
    let markup = views::quiz::question_page(&claims.sub, quiz_id, question, attempt.index + 1, total);

    claims.attempt = Some(attempt);
    let jar = store_session(jar, &claims, &state.config)?;

    Ok((jar, markup).into_response())
}

/// Records the selected option and advances the attempt.
pub async fn submit_answer(
    State(state): State<AppState>,
    Extension(mut claims): Extension<Claims>,
    Path(quiz_id): Path<i64>,
    jar: CookieJar,
    Form(form): Form<AnswerForm>,
) -> Result<Response, AppError> {
    let Some(choice) = form.choice() else {
        return Ok(Redirect::to(&quiz_url(quiz_id)).into_response());
    };

    // Only an attempt whose question was shown can take an answer.
    let Some(current) = claims.attempt.take().filter(|a| a.quiz_id == quiz_id) else {
        tracing::debug!("No attempt at quiz {} for {}, showing the question", quiz_id, claims.sub);
        return Ok(Redirect::to(&quiz_url(quiz_id)).into_response());
    };

    let (mut attempt, questions) = load_attempt(state.store.as_ref(), Some(current), quiz_id).await?;

    match attempt.submit(choice, &questions) {
        Step::Completed { score, total } => {
            // Completed attempts are not kept.
            let jar = store_session(jar, &claims, &state.config)?;
            tracing::info!(
                "User {} finished quiz {} with {}/{}",
                claims.sub,
                quiz_id,
                score,
                total
            );
            let markup = views::quiz::result_page(&claims.sub, quiz_id, score, total);
            Ok((jar, markup).into_response())
        }
        Step::InProgress { .. } => {
            claims.attempt = Some(attempt);
            let jar = store_session(jar, &claims, &state.config)?;
            Ok((jar, Redirect::to(&quiz_url(quiz_id))).into_response())
        }
        Step::Stale | Step::UnknownOption => {
            tracing::warn!("Ignored answer {} for quiz {} from {}", choice, quiz_id, claims.sub);
            Ok(Redirect::to(&quiz_url(quiz_id)).into_response())
        }
    }
}
