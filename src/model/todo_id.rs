//! Todo-ID is the positive integer a store hands out to every item it creates

use serde_derive::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::str::FromStr;

use super::error::ModelError;

/// Identifier of a stored to-do item
#[derive(Clone, Debug, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Id that comes right after this one, `None` once the id space is used up.
    pub fn next(self) -> Option<TodoId> {
        self.0.checked_add(1).map(TodoId)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        TodoId(id)
    }
}

impl From<TodoId> for u64 {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

/// Parses an id typed on the command line
///
/// # Examples
///
/// ```ignore
/// let id: TodoId = "42".parse().unwrap();
/// assert_eq!(id.value(), 42);
/// ```
impl FromStr for TodoId {
    type Err = ModelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        input
            .trim()
            .parse::<u64>()
            .map(TodoId)
            .map_err(|_| ModelError::InvalidId(input.to_string()))
    }
}

impl<'a> TryFrom<&'a str> for TodoId {
    type Error = ModelError;

    fn try_from(input: &'a str) -> Result<Self, Self::Error> {
        input.parse()
    }
}
