use thiserror::Error;

/// Errors that can occur while parsing or resolving references.
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("grammar error: {0}")]
    Grammar(#[from] regex::Error),

    #[error("invalid location: {chapter_count} chapters mixed with an explicit verse set")]
    InvalidLocation { chapter_count: usize },

    #[error("catalog error: {message} (version: {version})")]
    Catalog { message: String, version: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `ReferenceError`.
pub type Result<T> = std::result::Result<T, ReferenceError>;
