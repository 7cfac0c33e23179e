// src/store/mod.rs

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        quiz::{Question, Quiz},
        user::{NewUser, User},
    },
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence capability used by the handlers.
///
/// Implementations map backend failures to `AppError::Persistence` and a
/// uniqueness clash on insert to `AppError::DuplicateIdentity`.
#[async_trait]
pub trait Store: Send + Sync {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    async fn insert_user(&self, user: NewUser) -> Result<User, AppError>;

    /// All quizzes, ordered by id.
    async fn list_quizzes(&self) -> Result<Vec<Quiz>, AppError>;

    /// The quiz's questions, ordered by id. Unknown quizzes have none.
    async fn list_questions_by_quiz(&self, quiz_id: i64) -> Result<Vec<Question>, AppError>;
}
