use std::path::PathBuf;
use thiserror::*;

use crate::model::TodoId;
use crate::result_code::ResultCode;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Todo with id {0} not found")]
    NotFound(TodoId),

    #[error("no to-do id left after {0}")]
    IdExhausted(TodoId),

    #[error("cannot read database '{0}': {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("cannot write database '{0}': {1}")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("database '{0}' is not a valid to-do list: {1}")]
    Decode(PathBuf, #[source] serde_json::Error),

    #[error("cannot encode to-do list: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StorageError {
    pub fn code(&self) -> ResultCode {
        match self {
            StorageError::NotFound(_) | StorageError::IdExhausted(_) => ResultCode::IdError,
            StorageError::Read(..) => ResultCode::DbReadError,
            StorageError::Write(..) => ResultCode::DbWriteError,
            StorageError::Decode(..) | StorageError::Encode(_) => ResultCode::JsonError,
        }
    }
}
