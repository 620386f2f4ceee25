//! Save slots for actor state.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileStateRepository, SaveFormat};
pub use memory::InMemoryStateRepo;
pub use traits::{StateRepository, validate_slot};
