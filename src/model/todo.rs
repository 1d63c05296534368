use serde_derive::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ModelError;
use super::TodoId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ModelError::UnknownPriority(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Completed => "completed",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "completed" => Ok(Status::Completed),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

/// A to-do item as it is stored and persisted.
///
/// Field order is the key order of the records in the JSON database file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
}

impl TodoItem {
    #[allow(dead_code)]
    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// Merges the supplied fields of `patch` over this item, returns whether anything changed.
    pub fn apply(&mut self, patch: &TodoPatch) -> bool {
        let mut changed = false;
        if let Some(description) = patch.description() {
            if self.description != description {
                self.description = description.to_string();
                changed = true;
            }
        }
        if let Some(priority) = patch.priority {
            if self.priority != priority {
                self.priority = priority;
                changed = true;
            }
        }
        if let Some(status) = patch.status {
            if self.status != status {
                self.status = status;
                changed = true;
            }
        }
        changed
    }
}

/// A to-do item that has not been stored yet, so it carries no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub description: String,
    pub priority: Priority,
    pub status: Status,
}

impl NewTodo {
    pub fn new(
        description: impl Into<String>,
        priority: Priority,
        status: Status,
    ) -> Result<Self, ModelError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ModelError::EmptyDescription);
        }
        Ok(Self {
            description,
            priority,
            status,
        })
    }

    pub fn into_item(self, id: TodoId) -> TodoItem {
        TodoItem {
            id,
            description: self.description,
            priority: self.priority,
            status: self.status,
        }
    }
}

/// Partial update of a to-do item; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl TodoPatch {
    pub fn complete() -> Self {
        Self {
            status: Some(Status::Completed),
            ..Self::default()
        }
    }

    #[allow(dead_code)]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[allow(dead_code)]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    #[allow(dead_code)]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    // an empty description counts as not supplied
    fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.description().is_none() && self.priority.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> TodoItem {
        NewTodo::new("buy milk", Priority::Low, Status::Pending)
            .unwrap()
            .into_item(TodoId::from(1))
    }

    #[test]
    fn test_new_todo_rejects_empty_description() {
        assert_eq!(
            NewTodo::new("   ", Priority::High, Status::Pending).unwrap_err(),
            ModelError::EmptyDescription
        );
        assert!(NewTodo::new("write report", Priority::High, Status::Pending).is_ok());
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("completed".parse::<Status>().unwrap(), Status::Completed);
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(ModelError::UnknownPriority(_))
        ));
        assert!(matches!(
            "done".parse::<Status>(),
            Err(ModelError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_apply_patch_merges_only_supplied_fields() {
        // GIVEN
        let mut todo = item();

        // WHEN
        let changed = todo.apply(&TodoPatch::default().with_description("buy oat milk"));

        // THEN
        assert!(changed);
        assert_eq!(todo.description, "buy oat milk");
        assert_eq!(todo.priority, Priority::Low);
        assert_eq!(todo.status, Status::Pending);

        // WHEN
        let changed = todo.apply(&TodoPatch::complete());

        // THEN
        assert!(changed);
        assert!(todo.is_completed());
        assert_eq!(todo.description, "buy oat milk");
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut todo = item();
        let patch = TodoPatch::default().with_description("");
        assert!(patch.is_empty(), "empty description is not a change");
        assert!(!todo.apply(&patch));
        assert_eq!(todo, item());

        // same values are not a change either
        assert!(!todo.apply(&TodoPatch::default().with_priority(Priority::Low)));
    }

    #[test]
    fn test_json_record_layout() {
        let json = serde_json::to_string(&item()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"description":"buy milk","priority":"low","status":"pending"}"#
        );
        let back: TodoItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item());
    }
}
