// src/handlers/learn.rs

use std::sync::Arc;

use axum::{
    Extension,
    extract::{Path, Query, State},
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    error::{AppError, Missing},
    models::quiz::LearnItem,
    quiz::clamp_index,
    store::Store,
    utils::session::Claims,
    views,
};

#[derive(Debug, Deserialize)]
pub struct LearnParams {
    /// Kept as text so that a malformed value falls back to the first item.
    pub idx: Option<String>,
}

/// Shows one learning item of the quiz, the index clamped into range.
pub async fn learn(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    Path(quiz_id): Path<i64>,
    Query(params): Query<LearnParams>,
) -> Result<Markup, AppError> {
    let items = store.list_questions_by_quiz(quiz_id).await?;
    let total = items.len();

    let requested = params
        .idx
        .as_deref()
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0);
    let idx = clamp_index(requested, total);

    let item: LearnItem = items
        .into_iter()
        .nth(idx)
        .ok_or(AppError::NotFound(Missing::LearnItems))?
        .into();

    Ok(views::quiz::learn_page(&claims.sub, quiz_id, &item, idx, total))
}
