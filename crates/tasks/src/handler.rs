//! Command handlers for task management
//!
//! These handlers validate options, run the task operation and render
//! the result.

use std::io::Write;

use anyhow::{Context, Result};
use common::Error;

use crate::cli::TaskCommand;
use crate::service::TaskService;

/// Handle a task command, writing user-facing output to `out`
///
/// Option validation happens before the store is touched and fails with
/// `Error::MissingOption`.
pub fn handle_task_command<W: Write>(
    cmd: TaskCommand,
    service: &TaskService,
    out: &mut W,
) -> Result<()> {
    match cmd {
        TaskCommand::Add { text } => {
            let text = match text {
                Some(text) if !text.trim().is_empty() => text,
                _ => return Err(Error::missing_option("add", "Task text is required.").into()),
            };

            service.add_task(text.as_str()).context("Error adding task")?;
            writeln!(out, "Task added: {}", text)?;
            Ok(())
        }

        TaskCommand::List => {
            let entries = service.list_tasks().context("Error listing tasks")?;

            if entries.is_empty() {
                writeln!(out, "No tasks found.")?;
            } else {
                for entry in entries {
                    writeln!(out, "{}", entry)?;
                }
            }
            Ok(())
        }

        TaskCommand::Complete { number } => {
            let number = match number {
                Some(n) if n > 0 => n,
                _ => {
                    return Err(Error::missing_option(
                        "complete",
                        "Task number is required and must be greater than 0.",
                    )
                    .into())
                }
            };

            // Numbers beyond usize can never be in range
            let index = usize::try_from(number).unwrap_or(usize::MAX);
            service
                .complete_task(index)
                .context("Error completing task")?;
            writeln!(out, "Task {} completed.", number)?;
            Ok(())
        }

        TaskCommand::Clear => {
            service.clear_tasks().context("Error clearing tasks")?;
            writeln!(out, "All tasks cleared.")?;
            Ok(())
        }
    }
}
