// src/quiz/randomizer.rs

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    error::AppError,
    models::quiz::{Question, RandomizedQuestion},
    store::Store,
};

/// Upper bound on the options offered for one question, answer included.
/// A chosen option is recorded as a `u8` index in the session.
pub const MAX_OPTIONS_PER_QUESTION: usize = u8::MAX as usize + 1;

/// Upper bound on the questions served in one attempt.
/// Keeps the recorded answers inside a single session cookie.
pub const MAX_QUIZ_QUESTIONS: usize = 300;

/// Distinct distractors in first-seen order, followed by the answer.
/// The answer is always kept; surplus distractors are dropped.
pub fn build_options(answer: &str, distractors: &[String]) -> Vec<String> {
    let mut options: Vec<String> = Vec::with_capacity(distractors.len().min(MAX_OPTIONS_PER_QUESTION));

    for option in distractors.iter().map(String::as_str) {
        if options.len() == MAX_OPTIONS_PER_QUESTION - 1 {
            break;
        }
        if option != answer && !options.iter().any(|o| o == option) {
            options.push(option.to_string());
        }
    }
    options.push(answer.to_string());

    options
}

/// Shuffles every question's options, then the question order itself.
/// At most [`MAX_QUIZ_QUESTIONS`] survive.
pub fn randomize<R: Rng + ?Sized>(questions: Vec<Question>, rng: &mut R) -> Vec<RandomizedQuestion> {
    let mut randomized = Vec::with_capacity(questions.len());

    for q in questions {
        let mut options = build_options(&q.answer, &q.options.0);
        options.shuffle(rng);

        randomized.push(RandomizedQuestion {
            id: q.id,
            quiz_id: q.quiz_id,
            question_text: q.question_text,
            question_image: q.question_image,
            answer: q.answer,
            options,
        });
    }

    randomized.shuffle(rng);
    randomized.truncate(MAX_QUIZ_QUESTIONS);
    randomized
}

/// Same as [`randomize`], driven by an attempt seed so that every request of
/// one attempt sees the same order.
pub fn randomize_seeded(questions: Vec<Question>, seed: u64) -> Vec<RandomizedQuestion> {
    let mut rng = StdRng::seed_from_u64(seed);
    randomize(questions, &mut rng)
}

/// Fetches the quiz's questions from the store and randomizes them.
///
/// Nothing is cached: the questions are re-read on every call.
/// A quiz without questions yields an empty list.
pub async fn randomize_quiz(
    store: &dyn Store,
    quiz_id: i64,
    seed: u64,
) -> Result<Vec<RandomizedQuestion>, AppError> {
    let questions = store.list_questions_by_quiz(quiz_id).await?;
    Ok(randomize_seeded(questions, seed))
}
