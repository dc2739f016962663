pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod relative;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_habits;
pub use store::HabitStore;
