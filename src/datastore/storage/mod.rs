mod error;
mod json_file;
mod memory;

use crate::model::{NewTodo, TodoId, TodoItem};
pub use error::StorageError;
pub use json_file::JsonFileTodoStorage;
pub use memory::MemoryTodoStorage;

// Storage
pub trait TodoStorage {
    fn create(&mut self, item: NewTodo) -> Result<TodoItem, StorageError>;
    fn get_by_id(&self, id: TodoId) -> Result<TodoItem, StorageError>;
    fn update(&mut self, item: TodoItem) -> Result<TodoItem, StorageError>;
    fn delete_by_id(&mut self, id: TodoId) -> Result<(), StorageError>;
    fn list_all(&self) -> Vec<TodoItem>;
}

impl<S> TodoStorage for Box<S>
where
    S: TodoStorage + ?Sized,
{
    fn create(&mut self, item: NewTodo) -> Result<TodoItem, StorageError> {
        (**self).create(item)
    }

    fn get_by_id(&self, id: TodoId) -> Result<TodoItem, StorageError> {
        (**self).get_by_id(id)
    }

    fn update(&mut self, item: TodoItem) -> Result<TodoItem, StorageError> {
        (**self).update(item)
    }

    fn delete_by_id(&mut self, id: TodoId) -> Result<(), StorageError> {
        (**self).delete_by_id(id)
    }

    fn list_all(&self) -> Vec<TodoItem> {
        (**self).list_all()
    }
}

/// The next id follows the highest id still stored, so ids are never reused
/// while a higher id exists. Deleting the highest item frees its id again.
fn next_id(items: &[TodoItem]) -> Result<TodoId, StorageError> {
    let highest = items
        .iter()
        .map(|item| item.id)
        .max()
        .unwrap_or_else(|| TodoId::from(0));
    highest.next().ok_or(StorageError::IdExhausted(highest))
}

fn find(items: &[TodoItem], id: TodoId) -> Result<TodoItem, StorageError> {
    items
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .ok_or(StorageError::NotFound(id))
}

fn position(items: &[TodoItem], id: TodoId) -> Result<usize, StorageError> {
    items
        .iter()
        .position(|item| item.id == id)
        .ok_or(StorageError::NotFound(id))
}
