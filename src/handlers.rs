use crate::errors::AppError;
use crate::models::{AddHabitRequest, Filter, FilterRequest, HabitId, HabitView, HabitsSnapshot};
use crate::relative::habit_message;
use crate::state::AppState;
use crate::storage::persist_habits;
use crate::store::HabitStore;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::{DateTime, Utc};
use tokio::sync::MutexGuard;
use tracing::{debug, error};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_index(&store, Utc::now()))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Form(payload): Form<AddHabitRequest>,
) -> Redirect {
    mutate(&state, |store| store.add(&payload.name).is_some()).await;
    Redirect::to("/")
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id: HabitId = id.parse()?;
    mutate(&state, |store| store.toggle(id)).await;
    Ok(Redirect::to("/"))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id: HabitId = id.parse()?;
    mutate(&state, |store| store.remove(id)).await;
    Ok(Redirect::to("/"))
}

pub async fn clear_habits(State(state): State<AppState>) -> Redirect {
    mutate(&state, clear).await;
    Redirect::to("/")
}

pub async fn select_filter(
    State(state): State<AppState>,
    Path(filter): Path<String>,
) -> Result<Redirect, AppError> {
    let filter: Filter = filter.parse().map_err(AppError::bad_request)?;
    state.store.lock().await.set_filter(filter);
    Ok(Redirect::to("/"))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<HabitsSnapshot> {
    let store = state.store.lock().await;
    Json(snapshot(&store, Utc::now()))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<AddHabitRequest>,
) -> Json<HabitsSnapshot> {
    let store = mutate(&state, |store| store.add(&payload.name).is_some()).await;
    Json(snapshot(&store, Utc::now()))
}

pub async fn toggle_habit_json(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HabitsSnapshot>, AppError> {
    let id: HabitId = id.parse()?;
    let store = mutate(&state, |store| store.toggle(id)).await;
    Ok(Json(snapshot(&store, Utc::now())))
}

pub async fn delete_habit_json(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HabitsSnapshot>, AppError> {
    let id: HabitId = id.parse()?;
    let store = mutate(&state, |store| store.remove(id)).await;
    Ok(Json(snapshot(&store, Utc::now())))
}

pub async fn clear_habits_json(State(state): State<AppState>) -> Json<HabitsSnapshot> {
    let store = mutate(&state, clear).await;
    Json(snapshot(&store, Utc::now()))
}

pub async fn set_filter(
    State(state): State<AppState>,
    Json(payload): Json<FilterRequest>,
) -> Result<Json<HabitsSnapshot>, AppError> {
    let filter: Filter = payload.filter.parse().map_err(AppError::bad_request)?;
    let mut store = state.store.lock().await;
    store.set_filter(filter);
    Ok(Json(snapshot(&store, Utc::now())))
}

fn clear(store: &mut HabitStore) -> bool {
    store.clear_all();
    true
}

/// Applies `change` under the lock and saves the full list when it reports a change.
/// A failed save is logged; the in-memory list stays authoritative.
async fn mutate(
    state: &AppState,
    change: impl FnOnce(&mut HabitStore) -> bool,
) -> MutexGuard<'_, HabitStore> {
    let mut store = state.store.lock().await;
    if change(&mut store) {
        match persist_habits(&state.data_path, store.habits()).await {
            Ok(()) => debug!(count = store.len(), "saved habits"),
            Err(err) => error!("failed to save habits to {}: {err}", state.data_path.display()),
        }
    }
    store
}

pub fn snapshot(store: &HabitStore, now: DateTime<Utc>) -> HabitsSnapshot {
    HabitsSnapshot {
        filter: store.filter(),
        progress: store.progress(),
        total: store.len(),
        completed: store.completed_count(),
        habits: store
            .visible()
            .into_iter()
            .map(|habit| HabitView {
                id: habit.id.to_string(),
                name: habit.name.clone(),
                completed: habit.completed,
                added_date: habit.added_date.clone(),
                completion_date: habit.completion_date.clone(),
                message: habit_message(habit, now),
            })
            .collect(),
    }
}
