use thiserror::*;

use super::storage::StorageError;
use crate::model::ModelError;
use crate::result_code::ResultCode;

#[derive(Debug, Error)]
pub enum DataStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl DataStoreError {
    pub fn code(&self) -> ResultCode {
        match self {
            DataStoreError::Storage(err) => err.code(),
            DataStoreError::Model(err) => err.code(),
        }
    }
}
