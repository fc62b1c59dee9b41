//! File-system access for the job.
//!
//! [`Storage`] is the capability the job reads and writes through.
//! [`LocalStorage`] implements it on the local disk; [`MemoryStorage`] keeps
//! files in memory.

mod local;
mod memory;

pub use local::LocalStorage;
pub use memory::MemoryStorage;

use crate::error::PrepError;
use std::path::Path;

pub trait Storage {
    /// Reads the whole file at `path`.
    fn read(&self, path: &Path) -> Result<Vec<u8>, PrepError>;

    /// Creates the parent directory of `path` and any missing ancestors.
    fn ensure_parent_dir(&self, path: &Path) -> Result<(), PrepError>;

    /// Replaces the file at `path` with `contents`. Either the whole content
    /// lands or the previous state is kept.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), PrepError>;
}

/// Parent directory of `path`, if it names one.
fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}
