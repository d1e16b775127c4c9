use thiserror::Error;

/// Errors surfaced by scenario loading and replay
#[derive(Debug, Error)]
pub enum HoverpopError {
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("Unknown element '{0}' referenced in scenario")]
    UnknownElement(String),

    #[error("Invalid JSON in scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
