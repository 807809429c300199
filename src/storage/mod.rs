//! Published file records
//!
//! The HTTP layer only sees the [`FileStore`] trait; the binary wires in
//! [`MemoryFileStore`].

mod memory;
mod models;
mod traits;

pub use memory::MemoryFileStore;
pub use models::{FileRecord, NewFileRecord};
pub use traits::FileStore;
