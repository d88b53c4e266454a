//! Custom help system with categorized command sections
//!
//! The command registry must be kept in sync with the actual subcommand
//! definitions.

use std::collections::BTreeMap;

/// Command categories for help grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    /// Everyday task commands
    Main,
    /// Setup and help
    Configure,
}

impl Category {
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Main => "Commands",
            Category::Configure => "Configure",
        }
    }
}

/// An option accepted by a command
#[derive(Debug, Clone)]
pub struct OptionInfo {
    pub usage: &'static str,
    pub description: &'static str,
}

/// Metadata for a single command
#[derive(Debug, Clone)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub options: &'static [OptionInfo],
}

/// Registry of all commands with their metadata
///
/// IMPORTANT: This must be kept in sync with the Commands enum.
/// The `test_command_registry_matches_enum` test verifies this.
pub fn command_registry() -> Vec<CommandInfo> {
    vec![
        CommandInfo {
            name: "add",
            description: "Add a new task",
            category: Category::Main,
            options: &[OptionInfo {
                usage: "-text <task_text>",
                description: "(required) The text of the task",
            }],
        },
        CommandInfo {
            name: "list",
            description: "List all tasks",
            category: Category::Main,
            options: &[],
        },
        CommandInfo {
            name: "complete",
            description: "Mark a task as complete",
            category: Category::Main,
            options: &[OptionInfo {
                usage: "-number <task_number>",
                description: "(required) The number of the task to complete",
            }],
        },
        CommandInfo {
            name: "clear",
            description: "Clear all tasks",
            category: Category::Main,
            options: &[],
        },
        CommandInfo {
            name: "config",
            description: "Settings (show, get, set, path)",
            category: Category::Configure,
            options: &[],
        },
        CommandInfo {
            name: "help",
            description: "Display this help message",
            category: Category::Configure,
            options: &[],
        },
    ]
}

/// Look up a command by name
pub fn find_command(name: &str) -> Option<CommandInfo> {
    command_registry().into_iter().find(|c| c.name == name)
}

fn push_options(output: &mut String, options: &[OptionInfo], indent: &str) {
    let max_usage_len = options.iter().map(|o| o.usage.len()).max().unwrap_or(0);

    for opt in options {
        output.push_str(indent);
        output.push_str(opt.usage);
        output.push_str(&" ".repeat(max_usage_len - opt.usage.len() + 2));
        output.push_str(opt.description);
        output.push('\n');
    }
}

/// Generate the complete help text with categorized sections
pub fn generate_help() -> String {
    let mut output = String::new();

    output.push_str("todo - A command-line task list manager\n");
    output.push('\n');
    output.push_str("Usage: todo <command> [options]\n");
    output.push('\n');

    let commands = command_registry();
    let mut by_category: BTreeMap<Category, Vec<&CommandInfo>> = BTreeMap::new();

    for cmd in &commands {
        by_category.entry(cmd.category).or_default().push(cmd);
    }

    for (category, cmds) in &by_category {
        output.push_str(category.heading());
        output.push_str(":\n");

        // Find max command name length for alignment
        let max_name_len = cmds.iter().map(|c| c.name.len()).max().unwrap_or(0);

        for cmd in cmds {
            output.push_str("  ");
            output.push_str(cmd.name);
            output.push_str(&" ".repeat(max_name_len - cmd.name.len() + 2));
            output.push_str(cmd.description);
            output.push('\n');
            push_options(&mut output, cmd.options, "      ");
        }

        output.push('\n');
    }

    output.push_str("Global options:\n");
    output.push_str("  -file <path>  Task file to use (default: tasks.json or storage.path from config)\n");
    output.push('\n');
    output.push_str("Run 'todo <command> --help' for more information on a command.\n");

    output
}

/// Usage block for a single command, shown after option errors
pub fn command_usage(name: &str) -> String {
    let Some(cmd) = find_command(name) else {
        return generate_help();
    };

    let mut output = format!("Usage: todo {}", cmd.name);
    if !cmd.options.is_empty() {
        output.push_str(" [options]\n");
        output.push_str("Options:\n");
        push_options(&mut output, cmd.options, "  ");
    } else {
        output.push('\n');
    }
    output
}

/// Get all registered command names (for sync testing)
#[cfg(test)]
fn registered_command_names() -> Vec<&'static str> {
    command_registry().iter().map(|c| c.name).collect()
}
