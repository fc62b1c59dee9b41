use super::{Storage, parent_dir};
use crate::error::PrepError;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory [`Storage`].
///
/// Writes fail unless the parent directory was created first, like on disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `contents` at `path`, creating its directory.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        if let Some(dir) = parent_dir(&path) {
            self.dirs.borrow_mut().insert(dir.to_path_buf());
        }
        self.files.borrow_mut().insert(path, contents.into());
        self
    }

    /// Returns a copy of the file at `path`, if present.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }
}

impl Storage for MemoryStorage {
    fn read(&self, path: &Path) -> Result<Vec<u8>, PrepError> {
        self.file(path).ok_or_else(|| {
            PrepError::InputRead(path.to_path_buf(), io::Error::from(io::ErrorKind::NotFound))
        })
    }

    fn ensure_parent_dir(&self, path: &Path) -> Result<(), PrepError> {
        let mut dirs = self.dirs.borrow_mut();
        for dir in parent_dir(path).into_iter().flat_map(Path::ancestors) {
            if !dir.as_os_str().is_empty() {
                dirs.insert(dir.to_path_buf());
            }
        }
        Ok(())
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), PrepError> {
        if let Some(dir) = parent_dir(path) {
            if !self.has_dir(dir) {
                return Err(PrepError::OutputWrite(
                    path.to_path_buf(),
                    io::Error::from(io::ErrorKind::NotFound),
                ));
            }
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
