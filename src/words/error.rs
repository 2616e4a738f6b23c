use thiserror::Error;

/// Errors surfaced by the scheduling core.
///
/// Every variant belongs to the "invalid input" category: the caller handed in
/// something outside the declared domain and no record was modified.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SchedulerError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
