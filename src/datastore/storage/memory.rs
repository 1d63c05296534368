use tracing::debug;

use super::error::StorageError;
use super::{find, next_id, position, TodoStorage};
use crate::model::{NewTodo, TodoId, TodoItem};

/// Process-local storage, everything is gone when the process exits.
#[derive(Debug, Default)]
pub struct MemoryTodoStorage {
    todos: Vec<TodoItem>,
}

impl MemoryTodoStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStorage for MemoryTodoStorage {
    fn create(&mut self, item: NewTodo) -> Result<TodoItem, StorageError> {
        let todo = item.into_item(next_id(&self.todos)?);
        debug!(id = todo.id.value(), "storing to-do in memory");
        self.todos.push(todo.clone());
        Ok(todo)
    }

    fn get_by_id(&self, id: TodoId) -> Result<TodoItem, StorageError> {
        find(&self.todos, id)
    }

    fn update(&mut self, item: TodoItem) -> Result<TodoItem, StorageError> {
        let index = position(&self.todos, item.id)?;
        self.todos[index] = item.clone();
        Ok(item)
    }

    fn delete_by_id(&mut self, id: TodoId) -> Result<(), StorageError> {
        self.todos.retain(|todo| todo.id != id);
        Ok(())
    }

    fn list_all(&self) -> Vec<TodoItem> {
        self.todos.clone()
    }
}
