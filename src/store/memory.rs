// src/store/memory.rs

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use sqlx::types::Json;

use crate::{
    error::AppError,
    models::{
        quiz::{Question, Quiz},
        user::{NewUser, User},
    },
};

use super::Store;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    quizzes: Vec<Quiz>,
    questions: Vec<Question>,
}

/// In-process store with the same uniqueness rules as the Postgres schema.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, AppError> {
        self.tables
            .lock()
            .map_err(|_| AppError::Persistence("memory store lock poisoned".to_string()))
    }

    /// Adds a quiz and returns its id.
    pub fn add_quiz(&self, title: &str) -> Result<i64, AppError> {
        let mut tables = self.lock()?;
        let id = tables.quizzes.len() as i64 + 1;
        tables.quizzes.push(Quiz {
            id,
            title: title.to_string(),
        });
        Ok(id)
    }

    /// Adds a question to `quiz_id` and returns its id.
    pub fn add_question(
        &self,
        quiz_id: i64,
        question_text: &str,
        question_image: Option<&str>,
        answer: &str,
        distractors: &[&str],
    ) -> Result<i64, AppError> {
        let mut tables = self.lock()?;
        let id = tables.questions.len() as i64 + 1;
        tables.questions.push(Question {
            id,
            quiz_id,
            question_text: question_text.to_string(),
            question_image: question_image.map(str::to_string),
            answer: answer.to_string(),
            options: Json(distractors.iter().map(|s| s.to_string()).collect()),
        });
        Ok(id)
    }

    pub fn user_count(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.users.len())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .lock()?
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, AppError> {
        let mut tables = self.lock()?;

        let taken = tables
            .users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email);
        if taken {
            return Err(AppError::DuplicateIdentity);
        }

        let record = User {
            id: tables.users.len() as i64 + 1,
            username: user.username,
            email: user.email,
            password: user.password_hash,
            created_at: Some(chrono::Utc::now()),
        };
        tables.users.push(record.clone());
        Ok(record)
    }

    async fn list_quizzes(&self) -> Result<Vec<Quiz>, AppError> {
        let mut quizzes = self.lock()?.quizzes.clone();
        quizzes.sort_by_key(|q| q.id);
        Ok(quizzes)
    }

    async fn list_questions_by_quiz(&self, quiz_id: i64) -> Result<Vec<Question>, AppError> {
        let mut questions: Vec<Question> = self
            .lock()?
            .questions
            .iter()
            .filter(|q| q.quiz_id == quiz_id)
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }
}
