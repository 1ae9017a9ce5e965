pub mod health;
pub mod login;
pub mod stream;
pub mod tools;

use axum::Router;

use crate::state::AppState;

/// Assemble the full route surface over shared state. Transport-level layers
/// (tracing, CORS, static assets, API docs) are added by `main`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(tools::router())
        .merge(login::router())
        .merge(stream::router())
        .with_state(state)
}
