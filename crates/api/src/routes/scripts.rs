//! Route definitions for script intake.

use axum::routing::any;
use axum::Router;

use crate::handlers::scripts;
use crate::state::AppState;

/// Script intake routes, mounted at the root.
///
/// The method is deliberately left open; `POST` is the intended usage.
///
/// ```text
/// *   /create                  -> create_script
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/create", any(scripts::create_script))
}
