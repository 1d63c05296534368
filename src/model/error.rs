use thiserror::Error;

use crate::result_code::ResultCode;

// Errors raised while building or parsing model values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("to-do description must not be empty")]
    EmptyDescription,
    #[error("unknown priority {0:?}, expected one of: high, medium, low")]
    UnknownPriority(String),
    #[error("unknown status {0:?}, expected one of: pending, completed")]
    UnknownStatus(String),
    #[error("invalid to-do id {0:?}")]
    InvalidId(String),
}

impl ModelError {
    pub fn code(&self) -> ResultCode {
        ResultCode::InputError
    }
}
