//! Handler for script intake.

use axum::body::Bytes;
use axum::extract::State;
use script_intake_core::script::{Script, ScriptBody};

use crate::error::AppResult;
use crate::middleware::headers::ScriptHeaders;
use crate::state::AppState;

/// `/create` (any method)
///
/// Validate the script headers and body, persist a new record as
/// `<id>.json`, and reply with the minted identifier as plain text.
pub async fn create_script(
    State(state): State<AppState>,
    ScriptHeaders {
        server,
        content_type,
    }: ScriptHeaders,
    body: Bytes,
) -> AppResult<String> {
    let body = ScriptBody::from_json(&body)?;
    let query_count = body.queries.len();

    let script = Script::new(server, content_type, body);
    state.store.save(&script).await?;

    tracing::info!(
        script_id = %script.id,
        server = %script.server,
        query_count,
        "Script created"
    );

    Ok(format!("Script created with UUID: {}\n", script.id))
}
