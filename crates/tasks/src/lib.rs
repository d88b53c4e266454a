//! Task management for todo
//!
//! Tasks live in a single JSON file. Every operation loads the whole list,
//! applies its change and writes the whole list back.

pub mod cli;
pub mod handler;
pub mod service;
pub mod store;
pub mod task;

pub use cli::TaskCommand;
pub use handler::handle_task_command;
pub use service::TaskService;
pub use store::{TaskStore, DEFAULT_TASKS_FILE};
pub use task::{Task, TaskEntry};
