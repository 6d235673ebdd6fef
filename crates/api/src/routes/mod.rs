pub mod health;
pub mod scripts;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /health                                          service health (GET)
/// /create                                          create script (any method)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(scripts::router())
}
