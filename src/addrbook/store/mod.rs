//! # Storage Layer
//!
//! The address book keeps every record in memory and touches storage only as a whole:
//! one read at load time, one overwrite at save time. The [`Backend`] trait captures
//! exactly that, so the store can run against a real file or against memory.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production, a single plain-text file (`addressbook.csv` by default).
//! - [`memory::MemBackend`]: in-memory buffer for tests.
//!
//! ## Storage Format
//!
//! One record per line, 13 comma-separated columns, see [`codec`]:
//!
//! ```text
//! id,type,firstName,lastName,email,phone,addressLine,city,state,postalCode,notes,groups,tags
//! 1,Person,Ann,Lee,ann@lee.test,555-0101,,Springfield,IL,,,family|friends,vip
//! ```
//!
//! Saving is a plain overwrite. A crash halfway through a save can leave a truncated file.

use crate::error::Result;

pub mod codec;
pub mod fs;
pub mod memory;

/// Whole-file access to the persisted address book.
pub trait Backend {
    /// Reads the persisted text. `Ok(None)` means nothing has been saved yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replaces the persisted text.
    fn write(&mut self, content: &str) -> Result<()>;

    /// Human-readable location for messages (a file name, or `<memory>`).
    fn location(&self) -> String;
}
