use crate::model::NoteId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotezError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Note with id {0} not found")]
    NotFound(NoteId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NotezError>;
