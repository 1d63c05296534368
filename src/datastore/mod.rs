mod error;
mod manager;
mod storage;

pub use error::DataStoreError;
pub use manager::open_manager;
pub use manager::DynTodoManager;
pub use manager::Filter;
pub use manager::StorageKind;
pub use manager::TodoManager;
pub use storage::JsonFileTodoStorage;
pub use storage::MemoryTodoStorage;
pub use storage::StorageError;
pub use storage::TodoStorage;
