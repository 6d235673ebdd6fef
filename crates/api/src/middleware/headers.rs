//! Extractor for the request headers that describe a new script.
//!
//! Runs before the body is read, so a missing header is always reported
//! ahead of any body problem.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use script_intake_core::error::CoreError;
use script_intake_core::script::{HEADER_CONTENT_TYPE, HEADER_SERVER};

use crate::error::AppError;

/// `X-Server` and `X-Header-Content-Type`, both guaranteed non-empty.
///
/// ```ignore
/// async fn handler(ScriptHeaders { server, content_type }: ScriptHeaders) { .. }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptHeaders {
    pub server: String,
    pub content_type: String,
}

impl<S> FromRequestParts<S> for ScriptHeaders
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let server = required_header(&parts.headers, HEADER_SERVER)?;
        let content_type = required_header(&parts.headers, HEADER_CONTENT_TYPE)?;
        Ok(ScriptHeaders {
            server,
            content_type,
        })
    }
}

/// First value of header `name`, rejecting absent or empty values.
fn required_header(headers: &HeaderMap, name: &'static str) -> Result<String, AppError> {
    let value = headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();

    if value.is_empty() {
        return Err(AppError::Core(CoreError::MissingHeader(name)));
    }
    Ok(value)
}
