//! Storage backed by a single JSON file holding the whole to-do list.
//!
//! The file is read once when the storage is opened and rewritten in full after
//! every change. The in-memory list only moves forward once the write succeeded.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::error::StorageError;
use super::{find, next_id, position, TodoStorage};
use crate::model::{NewTodo, TodoId, TodoItem};

#[derive(Debug)]
pub struct JsonFileTodoStorage {
    path: PathBuf,
    todos: Vec<TodoItem>,
}

impl JsonFileTodoStorage {
    /// Opens the database at `path`. A file that does not exist yet is an empty list.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_owned();
        let todos = Self::load(&path)?;
        info!("Loaded to-dos from {}: {}", path.display(), todos.len());
        Ok(Self { path, todos })
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<Vec<TodoItem>, StorageError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("database {} does not exist yet", path.display());
                return Ok(vec![]);
            }
            Err(err) => return Err(StorageError::Read(path.to_owned(), err)),
        };
        if contents.trim().is_empty() {
            return Ok(vec![]);
        }
        serde_json::from_str(&contents).map_err(|err| StorageError::Decode(path.to_owned(), err))
    }

    /// Writes `todos` to disk and, only then, makes them the current list.
    fn commit(&mut self, todos: Vec<TodoItem>) -> Result<(), StorageError> {
        let contents = serde_json::to_string(&todos).map_err(StorageError::Encode)?;
        if let Err(err) = fs::write(&self.path, contents) {
            error!(
                "Failed to persistently store the to-do list in {}: {:?}.",
                self.path.display(),
                err
            );
            return Err(StorageError::Write(self.path.clone(), err));
        }
        self.todos = todos;
        Ok(())
    }
}

impl TodoStorage for JsonFileTodoStorage {
    fn create(&mut self, item: NewTodo) -> Result<TodoItem, StorageError> {
        let todo = item.into_item(next_id(&self.todos)?);
        let mut todos = self.todos.clone();
        todos.push(todo.clone());
        self.commit(todos)?;
        debug!(id = todo.id.value(), "stored to-do");
        Ok(todo)
    }

    fn get_by_id(&self, id: TodoId) -> Result<TodoItem, StorageError> {
        find(&self.todos, id)
    }

    fn update(&mut self, item: TodoItem) -> Result<TodoItem, StorageError> {
        let index = position(&self.todos, item.id)?;
        let mut todos = self.todos.clone();
        todos[index] = item.clone();
        self.commit(todos)?;
        Ok(item)
    }

    fn delete_by_id(&mut self, id: TodoId) -> Result<(), StorageError> {
        let todos = self
            .todos
            .iter()
            .filter(|todo| todo.id != id)
            .cloned()
            .collect::<Vec<TodoItem>>();
        self.commit(todos)
    }

    fn list_all(&self) -> Vec<TodoItem> {
        self.todos.clone()
    }
}
