use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/habits", post(handlers::add_habit))
        .route("/habits/clear", post(handlers::clear_habits))
        .route("/habits/:id/toggle", post(handlers::toggle_habit))
        .route("/habits/:id/delete", post(handlers::delete_habit))
        .route("/filter/:filter", post(handlers::select_filter))
        .route(
            "/api/habits",
            get(handlers::list_habits)
                .post(handlers::create_habit)
                .delete(handlers::clear_habits_json),
        )
        .route("/api/habits/:id", delete(handlers::delete_habit_json))
        .route("/api/habits/:id/toggle", post(handlers::toggle_habit_json))
        .route("/api/filter", put(handlers::set_filter))
        .with_state(state)
}
