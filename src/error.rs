use crate::model::Category;
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrandError {
    #[error(
        "Your todo file appears to be corrupt. Could not parse valid JSON from {} ({source}). Please fix or delete this file.",
        .path.display()
    )]
    StorageCorrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I couldn't find a todo with an ID of {0}")]
    NotFound(usize),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Scheduled todos should not happen in the past. {0} is in the past.")]
    DateInPast(NaiveDate),

    #[error("A {from} todo cannot move to {to}")]
    InvalidTransition { from: Category, to: Category },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StrandError {
    /// Recoverable errors are shown to the user and the command loop keeps
    /// running; anything else terminates the process.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StrandError::NotFound(_)
                | StrandError::InvalidArgument(_)
                | StrandError::DateInPast(_)
                | StrandError::InvalidTransition { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StrandError>;
