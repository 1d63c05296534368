use serde_derive::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    error::DataStoreError,
    storage::{JsonFileTodoStorage, MemoryTodoStorage, TodoStorage},
};
use crate::model::{NewTodo, Priority, Status, TodoId, TodoItem, TodoPatch};

/// Which storage the manager runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    InMemory,
    JsonFile,
}

impl Default for StorageKind {
    fn default() -> Self {
        StorageKind::JsonFile
    }
}

impl std::str::FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "in_memory" | "memory" => Ok(StorageKind::InMemory),
            "json_file" | "json" => Ok(StorageKind::JsonFile),
            _ => Err(format!(
                "unknown storage backend {:?}, expected in_memory or json_file",
                s
            )),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Filter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

impl Filter {
    #[allow(dead_code)]
    pub fn pending() -> Self {
        Self {
            status: Some(Status::Pending),
            priority: None,
        }
    }

    #[allow(dead_code)]
    pub fn completed() -> Self {
        Self {
            status: Some(Status::Completed),
            priority: None,
        }
    }

    pub fn matches(&self, todo: &TodoItem) -> bool {
        self.status.map_or(true, |status| todo.status == status)
            && self.priority.map_or(true, |priority| todo.priority == priority)
    }
}

/// Single entry point for to-do operations, whatever storage sits underneath.
pub struct TodoManager<S: TodoStorage> {
    storage: S,
}

pub type DynTodoManager = TodoManager<Box<dyn TodoStorage>>;

impl<S> TodoManager<S>
where
    S: TodoStorage,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn create(
        &mut self,
        description: impl Into<String>,
        priority: Priority,
        status: Status,
    ) -> Result<TodoItem, DataStoreError> {
        let item = NewTodo::new(description, priority, status)?;
        let todo = self.storage.create(item)?;
        info!(id = todo.id.value(), "to-do created");
        Ok(todo)
    }

    pub fn get_by_id(&self, id: TodoId) -> Result<TodoItem, DataStoreError> {
        Ok(self.storage.get_by_id(id)?)
    }

    /// Merges the supplied fields of `patch` over the stored item.
    pub fn update(&mut self, id: TodoId, patch: TodoPatch) -> Result<TodoItem, DataStoreError> {
        let mut todo = self.storage.get_by_id(id)?;
        if !todo.apply(&patch) {
            debug!(id = id.value(), "nothing to update");
            return Ok(todo);
        }
        Ok(self.storage.update(todo)?)
    }

    pub fn delete(&mut self, id: TodoId) -> Result<(), DataStoreError> {
        self.storage.delete_by_id(id)?;
        Ok(())
    }

    pub fn list_all(&self) -> Vec<TodoItem> {
        self.storage.list_all()
    }

    pub fn items(&self, filter: &Filter) -> Vec<TodoItem> {
        let mut list = self.storage.list_all();
        list.retain(|todo| filter.matches(todo));
        list
    }
}

/// Builds the manager for the configured storage.
pub fn open_manager(config: &crate::config::StorageConfig) -> Result<DynTodoManager, DataStoreError> {
    let storage: Box<dyn TodoStorage> = match config.backend {
        StorageKind::InMemory => Box::new(MemoryTodoStorage::new()),
        StorageKind::JsonFile => Box::new(JsonFileTodoStorage::open(&config.path)?),
    };
    debug!(backend = ?config.backend, "storage opened");
    Ok(TodoManager::new(storage))
}
