mod args;
mod config;
mod help;

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};
use tasks::{TaskCommand, TaskService, TaskStore};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "A command-line task list manager")]
#[command(version)]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Task file to use instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Tasks(TaskCommand),

    #[command(flatten)]
    System(SystemCommands),
}

#[derive(Subcommand)]
enum SystemCommands {
    /// Configuration management
    #[command(display_order = 20)]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// Show configuration file path
    Path,
}

fn main() -> ExitCode {
    // Default to WARN level for quiet CLI output
    // Use RUST_LOG=info or RUST_LOG=debug for verbose output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = args::normalize(std::env::args_os());
    let code = run(args, &mut std::io::stdout().lock(), &mut std::io::stderr().lock());
    ExitCode::from(code)
}

/// Run one invocation and return the process exit status
fn run<O: Write, E: Write>(args: Vec<OsString>, out: &mut O, err: &mut E) -> u8 {
    match dispatch(args, out, err) {
        Ok(code) => code,
        Err(e) => {
            writeln!(err, "{:#}", e).ok();
            if let Some(common::Error::MissingOption { command, .. }) =
                e.downcast_ref::<common::Error>()
            {
                write!(err, "{}", help::command_usage(command)).ok();
            }
            1
        }
    }
}

fn dispatch<O: Write, E: Write>(args: Vec<OsString>, out: &mut O, err: &mut E) -> Result<u8> {
    let Some(first) = args.get(1).map(|a| a.to_string_lossy().into_owned()) else {
        write!(out, "{}", help::generate_help())?;
        return Ok(1);
    };

    if matches!(first.as_str(), "help" | "-h" | "--help") {
        write!(out, "{}", help::generate_help())?;
        return Ok(0);
    }

    // Leading options such as --file are left for clap to judge
    if !first.starts_with('-') && help::find_command(&first).is_none() {
        return unknown_command(&first, out, err);
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write!(out, "{}", e)?;
                    Ok(0)
                }
                ErrorKind::InvalidSubcommand => match e.get(ContextKind::InvalidSubcommand) {
                    Some(ContextValue::String(name)) => unknown_command(name, out, err),
                    _ => {
                        write!(err, "{}", e)?;
                        Ok(1)
                    }
                },
                _ => {
                    write!(err, "{}", e)?;
                    if let Some(name) = command_name(&args) {
                        write!(err, "{}", help::command_usage(name))?;
                    }
                    Ok(1)
                }
            };
        }
    };

    let Some(command) = cli.command else {
        write!(out, "{}", help::generate_help())?;
        return Ok(1);
    };

    match command {
        Commands::Tasks(cmd) => {
            let tasks_file = match cli.file {
                Some(path) => path,
                None => config::get_tasks_file(&config::load_config()?, None),
            };
            debug!("Using task file {}", tasks_file.display());

            let service = TaskService::new(TaskStore::new(tasks_file));
            tasks::handle_task_command(cmd, &service, out)?;
            Ok(0)
        }

        Commands::System(SystemCommands::Config { action }) => {
            handle_config(action, out)?;
            Ok(0)
        }
    }
}

fn unknown_command<O: Write, E: Write>(name: &str, out: &mut O, err: &mut E) -> Result<u8> {
    writeln!(err, "Unknown command: {}", name)?;
    write!(out, "{}", help::generate_help())?;
    Ok(1)
}

/// First registered command named on the command line, skipping `--file` values
fn command_name(args: &[OsString]) -> Option<&'static str> {
    let mut rest = args.iter().skip(1).map(|a| a.to_string_lossy());
    while let Some(arg) = rest.next() {
        if arg == "--file" {
            rest.next();
            continue;
        }
        if let Some(cmd) = help::find_command(&arg) {
            return Some(cmd.name);
        }
    }
    None
}

fn handle_config<O: Write>(action: ConfigAction, out: &mut O) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let cfg = config::load_config()?;
            let toml_str = toml::to_string_pretty(&cfg)?;
            writeln!(out, "{}", toml_str)?;
            Ok(())
        }
        ConfigAction::Get { key } => {
            let cfg = config::load_config()?;
            match config::get_config_value(&cfg, &key) {
                Some(value) => writeln!(out, "{}", value)?,
                None => {
                    if config::CONFIG_KEYS.contains(&key.as_str()) {
                        writeln!(out, "(not set)")?;
                    } else {
                        anyhow::bail!("Unknown config key: {}", key);
                    }
                }
            }
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let mut cfg = config::load_config()?;
            config::set_config_value(&mut cfg, &key, &value)?;
            config::save_config(&cfg)?;
            writeln!(out, "Set {} = {}", key, value)?;
            Ok(())
        }
        ConfigAction::Path => {
            let path = config::get_config_file()?;
            writeln!(out, "{}", path.display())?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct Outcome {
        code: u8,
        out: String,
        err: String,
    }

    fn todo(argv: &[&str]) -> Outcome {
        let mut full = vec!["todo"];
        full.extend_from_slice(argv);

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args::normalize(full), &mut out, &mut err);
        Outcome {
            code,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    fn tasks_file(dir: &TempDir) -> String {
        dir.path().join("tasks.json").display().to_string()
    }

    #[test]
    fn test_no_arguments_prints_help_and_fails() {
        let result = todo(&[]);
        assert_eq!(result.code, 1);
        assert!(result.out.contains("Usage: todo <command> [options]"));
    }

    #[test]
    fn test_help_succeeds() {
        for flag in ["help", "-h", "--help"] {
            let result = todo(&[flag]);
            assert_eq!(result.code, 0);
            assert_eq!(result.out, help::generate_help());
        }
    }

    #[test]
    fn test_unknown_command() {
        let result = todo(&["frobnicate"]);
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "Unknown command: frobnicate\n");
        assert!(result.out.contains("Usage: todo <command> [options]"));
    }

    #[test]
    fn test_unknown_command_after_leading_option() {
        let dir = TempDir::new().unwrap();
        let file = tasks_file(&dir);

        let result = todo(&["-file", &file, "frob"]);
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "Unknown command: frob\n");
        assert_eq!(result.out, help::generate_help());
        assert!(!dir.path().join("tasks.json").exists());
    }

    #[test]
    fn test_add_list_complete_clear_flow() {
        let dir = TempDir::new().unwrap();
        let file = tasks_file(&dir);

        let result = todo(&["list", "-file", &file]);
        assert_eq!((result.code, result.out.as_str()), (0, "No tasks found.\n"));

        let result = todo(&["add", "-text", "Task 1", "-file", &file]);
        assert_eq!((result.code, result.out.as_str()), (0, "Task added: Task 1\n"));

        let result = todo(&["add", "--text=Task 2", "--file", &file]);
        assert_eq!(result.code, 0);

        let result = todo(&["complete", "-number", "2", "-file", &file]);
        assert_eq!((result.code, result.out.as_str()), (0, "Task 2 completed.\n"));

        let result = todo(&["list", "-file", &file]);
        assert_eq!(result.code, 0);
        assert_eq!(result.out, "1. [ ] Task 1\n2. [x] Task 2\n");

        let result = todo(&["-file", &file, "clear"]);
        assert_eq!((result.code, result.out.as_str()), (0, "All tasks cleared.\n"));

        let result = todo(&["list", "-file", &file]);
        assert_eq!(result.out, "No tasks found.\n");
    }

    #[test]
    fn test_add_without_text_shows_usage() {
        let dir = TempDir::new().unwrap();
        let file = tasks_file(&dir);

        let result = todo(&["add", "-file", &file]);
        assert_eq!(result.code, 1);
        assert!(result.err.starts_with("Task text is required.\n"));
        assert!(result.err.contains("Usage: todo add [options]"));
        assert!(!dir.path().join("tasks.json").exists());
    }

    #[test]
    fn test_complete_rejects_bad_numbers() {
        let dir = TempDir::new().unwrap();
        let file = tasks_file(&dir);

        for argv in [
            vec!["complete", "-file", file.as_str()],
            vec!["complete", "-number", "0", "-file", file.as_str()],
            vec!["complete", "-number", "-2", "-file", file.as_str()],
        ] {
            let result = todo(&argv);
            assert_eq!(result.code, 1);
            assert!(result
                .err
                .starts_with("Task number is required and must be greater than 0.\n"));
            assert!(result.err.contains("-number <task_number>"));
        }

        for value in ["two", "99999999999999999999"] {
            let result = todo(&["complete", "-number", value, "-file", &file]);
            assert_eq!(result.code, 1);
            assert!(result.err.contains(value));
            assert!(result.err.ends_with(&help::command_usage("complete")));
        }

        let result = todo(&["-file", &file, "complete", "-number", "two"]);
        assert_eq!(result.code, 1);
        assert!(result.err.ends_with(&help::command_usage("complete")));

        assert!(!dir.path().join("tasks.json").exists());
    }

    #[test]
    fn test_add_with_missing_value_shows_usage() {
        let dir = TempDir::new().unwrap();
        let file = tasks_file(&dir);

        let result = todo(&["add", "-file", &file, "-text"]);
        assert_eq!(result.code, 1);
        assert!(result.err.contains("--text"));
        assert!(result.err.ends_with(&help::command_usage("add")));
        assert!(result.err.contains("-text <task_text>"));
        assert!(!dir.path().join("tasks.json").exists());
    }

    #[test]
    fn test_complete_out_of_range_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let file = tasks_file(&dir);
        todo(&["add", "-text", "Task 1", "-file", &file]);
        todo(&["add", "-text", "Task 2", "-file", &file]);
        let before = fs::read(&file).unwrap();

        let result = todo(&["complete", "-number", "3", "-file", &file]);
        assert_eq!(result.code, 1);
        assert!(result.err.starts_with("Error completing task: invalid task number 3"));
        assert_eq!(fs::read(&file).unwrap(), before);
    }

    #[test]
    fn test_malformed_store_is_reported() {
        let dir = TempDir::new().unwrap();
        let file = tasks_file(&dir);
        fs::write(&file, "[{\"text\": ").unwrap();

        let result = todo(&["add", "-text", "x", "-file", &file]);
        assert_eq!(result.code, 1);
        assert!(result.err.starts_with("Error adding task: invalid task file"));
        assert_eq!(fs::read_to_string(&file).unwrap(), "[{\"text\": ");
    }

    #[test]
    fn test_config_unknown_key_fails() {
        let dir = TempDir::new().unwrap();
        std::env::set_var("TODO_CONFIG_PATH", dir.path());

        let result = todo(&["config", "get", "storage.colour"]);
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "Unknown config key: storage.colour\n");

        let result = todo(&["config", "set", "storage.colour", "blue"]);
        assert_eq!(result.code, 1);
        assert!(!dir.path().join("config.toml").exists());

        let result = todo(&["config", "get", "storage.path"]);
        assert_eq!((result.code, result.out.as_str()), (0, "(not set)\n"));
    }

    #[test]
    fn test_version_flag() {
        let result = todo(&["--version"]);
        assert_eq!(result.code, 0);
        assert!(result.out.contains(env!("CARGO_PKG_VERSION")));
    }
}
