mod cli; // Declare the cli module

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::debug;

use lexicon_core::help::{paginate, HelpGroup, HelpView};
use lexicon_core::kernel::constants::HELP_PAGE_CAPACITY;
use lexicon_core::kernel::{Error, Result, Runtime};
use lexicon_core::lang::{apply_plurals, send_message, send_raw, TemplatedText};
use lexicon_core::storage::{SettingsStore, ValueStore};
use lexicon_core::value::{Kind, Value};
use lexicon_core::TypedValue;

use crate::cli::ConsoleRecipient;

/// Lexicon: inspect settings documents and render their messages
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the value at a path, optionally coerced to a kind
    Get {
        /// Settings document (.json, .yaml, .yml or .toml)
        file: PathBuf,
        /// Dotted path of the value
        path: String,
        /// Kind to coerce to: bool, int, float, text, list or map
        #[arg(long)]
        kind: Option<Kind>,
    },
    /// Render the message at a path
    Render {
        /// Settings document holding the message
        file: PathBuf,
        /// Dotted path of the message
        path: String,
        /// Amount used to rewrite pluralization clauses
        #[arg(long)]
        plural: Option<i64>,
        /// Skip the enclosing message format
        #[arg(long)]
        raw: bool,
        /// Arguments substituted into the message
        args: Vec<String>,
    },
    /// List every path in a document, a page at a time
    Keys {
        /// Settings document to list
        file: PathBuf,
        #[arg(long, default_value_t = 1)]
        page: i64,
        #[arg(long, default_value_t = HELP_PAGE_CAPACITY)]
        per_page: usize,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = CliArgs::parse();
    let runtime = Runtime::new();

    let outcome = run(&runtime, args.command);
    if let Err(e) = &outcome {
        runtime.debug.error("Command failed", e);
        eprintln!("Error: {}", e);
    }
    runtime.shutdown();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn run(runtime: &Runtime, command: Commands) -> Result<()> {
    match command {
        Commands::Get { file, path, kind } => {
            let store = load_store(runtime, &file)?;
            let value = TypedValue::new(path, Value::Null, store);
            let resolved = match kind {
                Some(kind) => value.resolve(kind)?,
                None => value.get(),
            };
            match resolved {
                Some(resolved) => println!("{}", resolved),
                None => println!("(none)"),
            }
        }
        Commands::Render {
            file,
            path,
            plural,
            raw,
            args,
        } => {
            let store = load_store(runtime, &file)?;
            if !store.contains(&path) {
                return Err(Error::Other(format!("No message at '{}' in {}", path, file.display())));
            }
            let mut message = TemplatedText::new(path, "", store);
            if let Some(amount) = plural {
                message = TemplatedText::synthetic(apply_plurals(&message.get(), amount));
            }
            let args: Vec<Value> = args.iter().map(|arg| parse_arg(arg)).collect();
            let console = ConsoleRecipient;
            if raw {
                send_raw(Some(&console), Some(&message), &args)?;
            } else {
                send_message(Some(&console), Some(&message), &args)?;
            }
        }
        Commands::Keys { file, page, per_page } => {
            let store = load_store(runtime, &file)?;
            let view = HelpView::new(None);
            let lines = store
                .leaf_paths()
                .iter()
                .map(|path| {
                    let value = store.get(path).unwrap_or_default();
                    view.item(path, &value.to_string())
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            let groups = [HelpGroup::new(store.name(), lines)];
            match paginate(&groups, page, per_page)? {
                Some(page) => println!("{}", view.render(&page)?),
                None => println!("No keys in {}", file.display()),
            }
        }
    }
    Ok(())
}

fn load_store(runtime: &Runtime, file: &Path) -> Result<Arc<SettingsStore>> {
    let store = SettingsStore::load(file)?;
    runtime
        .debug
        .print(log::Level::Debug, format_args!("{} path(s) in '{}'", store.leaf_paths().len(), store.name()));
    debug!("Using settings from {}", file.display());
    Ok(Arc::new(store))
}

/// Command-line arguments are read as an int, then a float, then a bool,
/// and are text otherwise.
fn parse_arg(raw: &str) -> Value {
    if let Ok(int) = raw.parse::<i64>() {
        Value::Int(int)
    } else if let Ok(float) = raw.parse::<f64>() {
        Value::Float(float)
    } else if let Ok(flag) = raw.parse::<bool>() {
        Value::Bool(flag)
    } else {
        Value::Text(raw.to_string())
    }
}
