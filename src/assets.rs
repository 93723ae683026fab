//! Where level descriptors come from

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::LevelError;

/// Supplies descriptor text by path
pub trait LevelSource {
    fn read(&self, path: &str) -> Result<String, LevelError>;
}

/// Reads descriptors from disk, relative to a root directory
#[derive(Debug, Clone)]
pub struct FsLevelSource {
    root: PathBuf,
}

impl FsLevelSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl LevelSource for FsLevelSource {
    fn read(&self, path: &str) -> Result<String, LevelError> {
        let full = self.root.join(path);
        fs::read_to_string(&full).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LevelError::NotFound(full.display().to_string()),
            _ => LevelError::Read {
                path: full.display().to_string(),
                details: e.to_string(),
            },
        })
    }
}

/// In-memory descriptors, keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemoryLevelSource {
    files: HashMap<String, String>,
}

impl MemoryLevelSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    pub fn with(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }
}

impl LevelSource for MemoryLevelSource {
    fn read(&self, path: &str) -> Result<String, LevelError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| LevelError::NotFound(path.to_string()))
    }
}
