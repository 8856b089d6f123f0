pub mod collection;
pub use collection::ManagedCollection;
pub mod local_storage;
pub use local_storage::{FileStorage, KeyValueStore, MemoryStorage};
pub mod seed;
