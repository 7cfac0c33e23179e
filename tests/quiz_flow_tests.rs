// tests/quiz_flow_tests.rs

mod common;

use common::{ALPHABET, CORRECT, EMPTY, GREETINGS, NUMBERS, WRONG, heading, location, spawn_app};

fn quiz_path(quiz_id: i64) -> String {
    format!("/take_quiz/{quiz_id}")
}

#[tokio::test]
async fn full_attempt_scores_and_resets() {
    let app = spawn_app().await;
    app.login_new_user().await;
    let path = quiz_path(GREETINGS);

    let page = app.get_text(&path).await;
    assert!(page.contains("Question 1 of 3"));

    for option in [CORRECT, WRONG] {
        let response = app.answer(&path, option).await;
        assert_eq!(location(&response), path);
    }

    let response = app.answer(&path, CORRECT).await;
    assert_eq!(response.status().as_u16(), 200);
    let result = response.text().await.unwrap();
    assert!(result.contains("2 / 3"));

    // Completed attempts are dropped: the next visit starts over.
    assert!(app.get_text(&path).await.contains("Question 1 of 3"));
}

#[tokio::test]
async fn progress_and_order_survive_between_requests() {
    let app = spawn_app().await;
    app.login_new_user().await;
    let path = quiz_path(GREETINGS);

    let first = heading(&app.get_text(&path).await);
    assert_eq!(heading(&app.get_text(&path).await), first);

    app.answer(&path, CORRECT).await;

    let page = app.get_text(&path).await;
    assert!(page.contains("Question 2 of 3"));
    let second = heading(&page);
    assert_ne!(second, first);
    assert_eq!(heading(&app.get_text(&path).await), second);
}

#[tokio::test]
async fn switching_quiz_discards_previous_attempt() {
    let app = spawn_app().await;
    app.login_new_user().await;

    app.answer(&quiz_path(GREETINGS), CORRECT).await;
    assert!(app.get_text(&quiz_path(GREETINGS)).await.contains("Question 2 of 3"));

    assert!(app.get_text(&quiz_path(NUMBERS)).await.contains("Question 1 of 2"));

    assert!(app.get_text(&quiz_path(GREETINGS)).await.contains("Question 1 of 3"));
}

#[tokio::test]
async fn options_contain_answer_once() {
    let app = spawn_app().await;
    app.login_new_user().await;

    // Distractors of this quiz already contain the answer.
    let page = app.get_text(&quiz_path(NUMBERS)).await;

    assert_eq!(page.matches(&format!("> {CORRECT}</label>")).count(), 1);
    assert_eq!(page.matches(&format!("> {WRONG}</label>")).count(), 1);
    assert_eq!(page.matches("type=\"radio\"").count(), 2);
}

#[tokio::test]
async fn missing_option_does_not_advance() {
    let app = spawn_app().await;
    app.login_new_user().await;
    let path = quiz_path(GREETINGS);

    app.get(&path).await;
    let response = app.post_form(&path, &[]).await;
    assert_eq!(location(&response), path);

    assert!(app.get_text(&path).await.contains("Question 1 of 3"));
}

#[tokio::test]
async fn unknown_option_does_not_advance() {
    let app = spawn_app().await;
    app.login_new_user().await;
    let path = quiz_path(GREETINGS);

    app.get(&path).await;
    for option in ["3", "256", "-1", "Yes"] {
        let response = app.post_form(&path, &[("option", option)]).await;
        assert_eq!(location(&response), path, "{option}");
    }

    assert!(app.get_text(&path).await.contains("Question 1 of 3"));
}

#[tokio::test]
async fn answer_before_any_question_is_not_scored() {
    let app = spawn_app().await;
    app.login_new_user().await;
    let path = quiz_path(GREETINGS);

    let response = app.post_form(&path, &[("option", "0")]).await;
    assert_eq!(location(&response), path);

    assert!(app.get_text(&path).await.contains("Question 1 of 3"));
}

#[tokio::test]
async fn answer_for_another_quiz_leaves_attempt_untouched() {
    let app = spawn_app().await;
    app.login_new_user().await;

    app.answer(&quiz_path(NUMBERS), CORRECT).await;

    // A form left open on another quiz.
    let response = app.post_form(&quiz_path(GREETINGS), &[("option", "0")]).await;
    assert_eq!(location(&response), quiz_path(GREETINGS));

    assert!(app.get_text(&quiz_path(NUMBERS)).await.contains("Question 2 of 2"));
}

#[tokio::test]
async fn learn_index_is_clamped() {
    let app = spawn_app().await;
    app.login_new_user().await;

    let page = app.get_text(&format!("/learn/{ALPHABET}?idx=-5")).await;
    assert_eq!(heading(&page), "Sign 1");
    assert!(page.contains("Item 1 / 10"));

    let page = app.get_text(&format!("/learn/{ALPHABET}?idx=999")).await;
    assert_eq!(heading(&page), "Sign 10");
    assert!(page.contains("Letter 10"));

    let page = app.get_text(&format!("/learn/{ALPHABET}?idx=4")).await;
    assert_eq!(heading(&page), "Sign 5");

    let page = app.get_text(&format!("/learn/{ALPHABET}?idx=abc")).await;
    assert_eq!(heading(&page), "Sign 1");
}

#[tokio::test]
async fn empty_quiz_redirects_with_notice() {
    let app = spawn_app().await;
    app.login_new_user().await;

    let response = app.get(&format!("/learn/{EMPTY}")).await;
    assert_eq!(location(&response), "/quiz");
    assert!(app.get_text("/quiz").await.contains("This quiz has no learning items."));

    let response = app.get(&quiz_path(EMPTY)).await;
    assert_eq!(location(&response), "/quiz");
    assert!(app.get_text("/quiz").await.contains("This quiz has no questions."));
}
