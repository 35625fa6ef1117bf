pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemorySnapshotStore;
pub use json_file::JsonFileStore;
pub use r#trait::SnapshotStore;
