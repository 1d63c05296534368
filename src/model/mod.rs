pub mod error;
pub mod todo;
pub mod todo_id;

pub use error::ModelError;
pub use todo::{NewTodo, Priority, Status, TodoItem, TodoPatch};
pub use todo_id::TodoId;
