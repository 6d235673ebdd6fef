/// Domain errors raised while decoding, building, or persisting a script.
///
/// The `Display` text of each variant is the exact message returned to the
/// client, so keep the wording stable.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing '{0}' in request headers")]
    MissingHeader(&'static str),

    /// The request body is not a JSON object.
    #[error("{0}")]
    Decode(String),

    #[error("Missing '{0}' in request body")]
    MissingField(&'static str),

    #[error("Invalid '{0}' in request body")]
    InvalidField(&'static str),

    #[error("{0}")]
    Serialize(#[source] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Whether the error was caused by the client's request rather than by
    /// the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoreError::MissingHeader(_) | CoreError::MissingField(_) | CoreError::InvalidField(_)
        )
    }
}
