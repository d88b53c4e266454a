//! File-backed task storage
//!
//! The whole task list is kept as a pretty-printed JSON array in one file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use common::{Error, Result};
use tracing::debug;

use crate::task::Task;

/// Conventional storage file name, relative to the working directory
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Reads and writes the task list at a fixed path
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all tasks in stored order
    ///
    /// A missing or blank file is an empty list. Anything else that does not
    /// parse is a `Format` error and is left untouched on disk.
    pub fn load(&self) -> Result<Vec<Task>> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No task file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };

        if contents.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> =
            serde_json::from_slice(&contents).map_err(|e| Error::format(&self.path, e))?;

        debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    /// Replace the stored list with `tasks`
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let mut contents =
            serde_json::to_string_pretty(tasks).map_err(|e| Error::format(&self.path, e))?;
        contents.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        fs::write(&self.path, contents).map_err(|e| Error::io(&self.path, e))?;

        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}
