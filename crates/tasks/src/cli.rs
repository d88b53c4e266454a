//! CLI command definitions for task management
//!
//! This module defines the clap subcommands that are flattened into
//! the top level of the `todo` binary.

use clap::Subcommand;

/// Task management commands
#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Add a new task
    #[command(display_order = 1)]
    Add {
        /// The text of the task
        #[arg(long, allow_hyphen_values = true)]
        text: Option<String>,
    },

    /// List all tasks
    #[command(display_order = 2)]
    List,

    /// Mark a task as complete
    #[command(display_order = 3)]
    Complete {
        /// The number of the task to complete
        #[arg(long, allow_negative_numbers = true)]
        number: Option<i64>,
    },

    /// Clear all tasks
    #[command(display_order = 4)]
    Clear,
}
