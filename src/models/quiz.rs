// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};

/// Represents the 'quizzes' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
}

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: i64,

    pub quiz_id: i64,

    pub question_text: String,

    /// Image URL shown above the question, if any.
    pub question_image: Option<String>,

    /// The single correct option.
    pub answer: String,

    /// Distractors, stored as a JSON array.
    /// May or may not already contain the answer.
    pub options: Json<Vec<String>>,
}

/// A question as shown on the learning page (no options).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnItem {
    pub id: i64,
    pub question_text: String,
    pub question_image: Option<String>,
    pub answer: String,
}

impl From<Question> for LearnItem {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question_text: q.question_text,
            question_image: q.question_image,
            answer: q.answer,
        }
    }
}

/// A question prepared for one attempt: options include the answer exactly once, shuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomizedQuestion {
    pub id: i64,
    pub quiz_id: i64,
    pub question_text: String,
    pub question_image: Option<String>,
    pub answer: String,
    pub options: Vec<String>,
}
