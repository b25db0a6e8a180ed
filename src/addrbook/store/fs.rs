use super::Backend;
use crate::error::{BookError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILENAME: &str = "addressbook.csv";

pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new(DEFAULT_FILENAME)
    }
}

impl Backend for FileBackend {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BookError::Io(e)),
        }
    }

    fn write(&mut self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookError::Io)?;
            }
        }
        fs::write(&self.path, content).map_err(BookError::Io)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
