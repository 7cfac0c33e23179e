// src/routes.rs

use axum::{Router, middleware, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{auth, learn, pages, profile, quiz},
    state::AppState,
    utils::session::auth_middleware,
};

/// Assembles the main application router.
///
/// * Public routes: start page, login, signup, logout, reviews, about.
/// * Protected routes sit behind `auth_middleware`.
/// * Applies the global trace layer and serves `/static`.
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(auth::home))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/logout", get(auth::logout))
        .route("/reviews", get(pages::reviews))
        .route("/about", get(pages::about));

    let protected_routes = Router::new()
        .route("/quiz", get(quiz::list_quizzes))
        .route("/learn/{quiz_id}", get(learn::learn))
        .route(
            "/take_quiz/{quiz_id}",
            get(quiz::show_question).post(quiz::submit_answer),
        )
        .route("/help", get(pages::help))
        .route("/profile", get(profile::get_me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        // Global Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
