// src/quiz/attempt.rs

use serde::{Deserialize, Serialize};

use crate::models::quiz::RandomizedQuestion;

/// Progress of one session through one quiz.
///
/// Absent from the session means NotStarted; present means InProgress.
/// Completion removes it again, so a Completed attempt is never stored.
///
/// Invariant: `score <= index <= total` and `answers.len() == index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub quiz_id: i64,
    pub index: usize,
    pub score: usize,
    /// Position of the chosen option within each answered question's options.
    pub answers: Vec<u8>,
    /// Seed for this attempt's question and option order.
    pub seed: u64,
}

/// Result of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// More questions remain; `index` is the next one to show.
    InProgress { index: usize },
    /// Last question answered. The attempt must be dropped from the session.
    Completed { score: usize, total: usize },
    /// Submission after the last question. Nothing was recorded.
    Stale,
    /// The choice is not one of the current question's options. Nothing was recorded.
    UnknownOption,
}

impl QuizAttempt {
    pub fn new(quiz_id: i64, seed: u64) -> Self {
        Self {
            quiz_id,
            index: 0,
            score: 0,
            answers: Vec::new(),
            seed,
        }
    }

    /// Resumes `current` when it belongs to `quiz_id`, otherwise starts over
    /// with a fresh seed. An attempt for another quiz is discarded.
    pub fn start_or_resume(
        current: Option<QuizAttempt>,
        quiz_id: i64,
        seed: impl FnOnce() -> u64,
    ) -> Self {
        match current {
            Some(attempt) if attempt.quiz_id == quiz_id => attempt,
            Some(other) => {
                tracing::debug!(
                    "Discarding attempt for quiz {} at question {}",
                    other.quiz_id,
                    other.index
                );
                Self::new(quiz_id, seed())
            }
            None => Self::new(quiz_id, seed()),
        }
    }

    /// True when there is no question left to answer out of `total`.
    pub fn is_exhausted(&self, total: usize) -> bool {
        self.index >= total
    }

    /// Records option number `choice` against the question at the current index.
    pub fn submit(&mut self, choice: usize, questions: &[RandomizedQuestion]) -> Step {
        let total = questions.len();
        let Some(question) = questions.get(self.index) else {
            return Step::Stale;
        };
        let (Some(selected), Ok(recorded)) = (question.options.get(choice), u8::try_from(choice))
        else {
            return Step::UnknownOption;
        };

        if *selected == question.answer {
            self.score += 1;
        }
        self.answers.push(recorded);
        self.index += 1;

        if self.index == total {
            Step::Completed {
                score: self.score,
                total,
            }
        } else {
            Step::InProgress { index: self.index }
        }
    }
}
