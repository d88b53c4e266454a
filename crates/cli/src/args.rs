//! Command-line argument normalization
//!
//! Options may be written with a single dash (`-text "Buy milk"`,
//! `-number=2`). They are rewritten to clap's `--name` form before parsing.

use std::ffi::OsString;

/// Long options that take a value
const VALUE_FLAGS: &[&str] = &["text", "number", "file"];

/// Rewrite single-dash long options to their double-dash form
///
/// The value following an option is passed through untouched, as is
/// everything after a bare `--`.
pub fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut iter = args.into_iter().map(Into::into);
    let mut passthrough = false;

    while let Some(arg) = iter.next() {
        if passthrough {
            normalized.push(arg);
            continue;
        }
        let Some(s) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        if s == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        if let Some((name, value)) = single_dash_option(s) {
            match value {
                Some(value) => normalized.push(format!("--{name}={value}").into()),
                None => {
                    normalized.push(format!("--{name}").into());
                    normalized.extend(iter.next());
                }
            }
            continue;
        }

        let takes_value = s
            .strip_prefix("--")
            .is_some_and(|name| VALUE_FLAGS.contains(&name));
        normalized.push(arg);
        if takes_value {
            normalized.extend(iter.next());
        }
    }

    normalized
}

fn single_dash_option(arg: &str) -> Option<(&str, Option<&str>)> {
    let body = arg.strip_prefix('-')?;
    if body.starts_with('-') {
        return None;
    }

    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };
    VALUE_FLAGS.contains(&name).then_some((name, value))
}
