pub mod memory;

pub use hashlink_core::repository::{ReadRepository, Repository};
pub use hashlink_core::StorageError;
pub use memory::InMemoryRepository;
