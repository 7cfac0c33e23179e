// src/quiz/mod.rs

pub mod attempt;
pub mod randomizer;

pub use attempt::{QuizAttempt, Step};
pub use randomizer::randomize_quiz;

/// Clamps a requested learning index into `0..total`.
pub fn clamp_index(idx: i64, total: usize) -> usize {
    if total == 0 || idx <= 0 {
        return 0;
    }
    usize::try_from(idx).map_or(total - 1, |i| i.min(total - 1))
}
