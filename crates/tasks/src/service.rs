//! Task operations
//!
//! Each operation is a full load, change, save cycle against the store.
//! Nothing is cached between calls.

use common::{Error, Result};
use tracing::info;

use crate::store::TaskStore;
use crate::task::{Task, TaskEntry};

pub struct TaskService {
    store: TaskStore,
}

impl TaskService {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Append a task and return its 1-based number
    pub fn add_task(&self, text: impl Into<String>) -> Result<usize> {
        let mut tasks = self.store.load()?;
        tasks.push(Task::new(text));
        self.store.save(&tasks)?;

        info!("Added task {}", tasks.len());
        Ok(tasks.len())
    }

    /// All tasks numbered from 1, in stored order
    pub fn list_tasks(&self) -> Result<Vec<TaskEntry>> {
        let tasks = self.store.load()?;

        Ok(tasks
            .into_iter()
            .enumerate()
            .map(|(i, task)| TaskEntry {
                number: i + 1,
                task,
            })
            .collect())
    }

    /// Mark task `number` (1-based) as completed
    ///
    /// Returns `true` if the task was already completed, in which case the
    /// file is not rewritten.
    pub fn complete_task(&self, number: usize) -> Result<bool> {
        let mut tasks = self.store.load()?;
        let len = tasks.len();

        let task = number
            .checked_sub(1)
            .and_then(|i| tasks.get_mut(i))
            .ok_or(Error::InvalidIndex { number, len })?;

        if task.completed {
            return Ok(true);
        }
        task.completed = true;
        self.store.save(&tasks)?;

        info!("Completed task {}", number);
        Ok(false)
    }

    /// Drop every task
    pub fn clear_tasks(&self) -> Result<()> {
        self.store.save(&[])?;
        info!("Cleared all tasks");
        Ok(())
    }
}
