use super::{index_todos, DataStore};
use crate::error::{Result, StrandError};
use crate::model::Todo;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: the whole list lives in one JSON array file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// An absent file is initialized to an empty list before first read.
    fn ensure_file(&self) -> Result<()> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(&self.path, "[]")?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Todo>> {
        self.ensure_file()?;
        let content = fs::read_to_string(&self.path)?;
        let todos: Vec<Todo> =
            serde_json::from_str(&content).map_err(|source| StrandError::StorageCorrupt {
                path: self.path.clone(),
                source,
            })?;
        Ok(index_todos(todos))
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        let content = serde_json::to_string(todos)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
