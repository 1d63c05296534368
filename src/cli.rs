//! Command line front end: parses arguments, drives the manager and renders
//! its results.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info};

use crate::config::{self, AppPaths};
use crate::datastore::{
    open_manager, DataStoreError, DynTodoManager, Filter, StorageError, StorageKind,
};
use crate::model::{Priority, Status, TodoId, TodoItem, TodoPatch};
use crate::result_code::ResultCode;

/// Errors rendered to the user; the message is the whole output.
///
/// Failures writing the output itself are not `CliError`s, they carry the
/// `OUTPUT_CONTEXT` context instead.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Config file not found. Please, run \"todo init\"")]
    ConfigMissing,

    #[error("Database not found. Please, run \"todo init\"")]
    DatabaseMissing,

    #[error("{0}")]
    NotFound(String),

    #[error("{action} failed with \"{code}\"")]
    Failed {
        action: &'static str,
        code: ResultCode,
    },
}

impl CliError {
    fn failed(action: &'static str, code: ResultCode, detail: &dyn std::fmt::Display) -> Self {
        error!("{} failed: {}", action, detail);
        CliError::Failed { action, code }
    }

    fn from_datastore(action: &'static str, err: DataStoreError) -> Self {
        match err {
            DataStoreError::Storage(err @ StorageError::NotFound(_)) => {
                CliError::NotFound(err.to_string())
            }
            err => Self::failed(action, err.code(), &err),
        }
    }
}

/// Track your to-dos from the command line
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version = env!("SIMPLE_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Directory holding config.yaml (default: $TODO_CONFIG_DIR or the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the to-do database
    Init(InitArgs),

    /// Add a new to-do
    Add(AddArgs),

    /// List all to-dos
    List(ListArgs),

    /// Show a single to-do
    Show { id: TodoId },

    /// Change some fields of a to-do
    Update(UpdateArgs),

    /// Mark a to-do as completed
    Complete { id: TodoId },

    /// Remove a to-do
    Remove { id: TodoId },
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Location of the JSON database
    #[arg(short = 'd', long = "db-path")]
    pub db_path: Option<PathBuf>,

    /// Storage backend: json_file or in_memory
    #[arg(long, default_value = "json_file")]
    pub backend: StorageKind,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(required = true)]
    pub description: Vec<String>,

    #[arg(short, long, default_value = "medium")]
    pub priority: Priority,

    #[arg(short, long, default_value = "pending")]
    pub status: Status,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(short, long)]
    pub status: Option<Status>,

    #[arg(short, long)]
    pub priority: Option<Priority>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub id: TodoId,

    #[arg(short, long)]
    pub description: Option<String>,

    #[arg(short, long)]
    pub priority: Option<Priority>,

    #[arg(short, long)]
    pub status: Option<Status>,
}

pub const OUTPUT_CONTEXT: &str = "cannot write command output";

pub fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let paths = AppPaths::resolve(cli.config_dir.as_deref())
        .map_err(|err| CliError::failed("Locating config", err.code(), &err))?;
    match cli.command {
        Commands::Init(args) => init(&paths, args, out),
        Commands::Add(args) => add(&mut open(&paths)?, args, out),
        Commands::List(args) => list(&open(&paths)?, args, out),
        Commands::Show { id } => show(&open(&paths)?, id, out),
        Commands::Update(args) => {
            let patch = TodoPatch {
                description: args.description,
                priority: args.priority,
                status: args.status,
            };
            let todo = open(&paths)?
                .update(args.id, patch)
                .map_err(|err| CliError::from_datastore("Updating to-do", err))?;
            writeln!(out, "to-do # {} \"{}\" updated", todo.id, todo.description)
                .context(OUTPUT_CONTEXT)?;
            Ok(())
        }
        Commands::Complete { id } => {
            let todo = open(&paths)?
                .update(id, TodoPatch::complete())
                .map_err(|err| CliError::from_datastore("Completing to-do", err))?;
            writeln!(out, "to-do # {} \"{}\" completed!", todo.id, todo.description)
                .context(OUTPUT_CONTEXT)?;
            Ok(())
        }
        Commands::Remove { id } => remove(&mut open(&paths)?, id, out),
    }
}

fn init<W: Write>(paths: &AppPaths, args: InitArgs, out: &mut W) -> anyhow::Result<()> {
    let db_path = args.db_path.unwrap_or_else(|| paths.default_db_file());
    config::init_app(paths, &db_path, args.backend)
        .map_err(|err| CliError::failed("Creating config file", err.code(), &err))?;
    config::init_database(&db_path)
        .map_err(|err| CliError::failed("Creating database", err.code(), &err))?;
    writeln!(out, "The to-do database location is: '{}'", db_path.display())
        .context(OUTPUT_CONTEXT)?;
    Ok(())
}

fn open(paths: &AppPaths) -> Result<DynTodoManager, CliError> {
    let config = paths.load().map_err(|err| {
        if err.is_missing() {
            CliError::ConfigMissing
        } else {
            CliError::failed("Reading config", err.code(), &err)
        }
    })?;
    if config.storage.backend == StorageKind::JsonFile && !config.storage.path.exists() {
        error!("database {} does not exist", config.storage.path.display());
        return Err(CliError::DatabaseMissing);
    }
    info!(backend = ?config.storage.backend, "Using {}", config.storage.path.display());
    open_manager(&config.storage).map_err(|err| CliError::from_datastore("Opening database", err))
}

fn add<W: Write>(manager: &mut DynTodoManager, args: AddArgs, out: &mut W) -> anyhow::Result<()> {
    let description = args.description.join(" ");
    let todo = manager
        .create(description, args.priority, args.status)
        .map_err(|err| CliError::from_datastore("Adding to-do", err))?;
    writeln!(
        out,
        "to-do: \"{}\" was added with priority: {} (id {})",
        todo.description, todo.priority, todo.id
    )
    .context(OUTPUT_CONTEXT)?;
    Ok(())
}

fn list<W: Write>(manager: &DynTodoManager, args: ListArgs, out: &mut W) -> anyhow::Result<()> {
    let todos = manager.items(&Filter {
        status: args.status,
        priority: args.priority,
    });
    if todos.is_empty() {
        writeln!(out, "There are no tasks in the to-do list yet").context(OUTPUT_CONTEXT)?;
        return Ok(());
    }
    writeln!(out, "to-do list:").context(OUTPUT_CONTEXT)?;
    render_table(&todos, out).context(OUTPUT_CONTEXT)
}

fn show<W: Write>(manager: &DynTodoManager, id: TodoId, out: &mut W) -> anyhow::Result<()> {
    let todo = manager
        .get_by_id(id)
        .map_err(|err| CliError::from_datastore("Reading to-do", err))?;
    render_table(&[todo], out).context(OUTPUT_CONTEXT)
}

fn remove<W: Write>(manager: &mut DynTodoManager, id: TodoId, out: &mut W) -> anyhow::Result<()> {
    let existing = manager.get_by_id(id).ok();
    manager
        .delete(id)
        .map_err(|err| CliError::from_datastore("Removing to-do", err))?;
    // nothing to report for an id that was not stored
    if let Some(todo) = existing {
        writeln!(out, "to-do # {}: \"{}\" was removed", id, todo.description)
            .context(OUTPUT_CONTEXT)?;
    }
    Ok(())
}

fn render_table<W: Write>(todos: &[TodoItem], out: &mut W) -> std::io::Result<()> {
    let header = format!(
        "{:<6}| {:<10}| {:<11}| {}",
        "ID.", "Priority", "Status", "Description"
    );
    writeln!(out, "{}", header)?;
    writeln!(out, "{}", "-".repeat(header.len()))?;
    for todo in todos {
        writeln!(
            out,
            "{:<6}| {:<10}| {:<11}| {}",
            todo.id.to_string(),
            todo.priority.as_str(),
            todo.status.as_str(),
            todo.description
        )?;
    }
    writeln!(out, "{}", "-".repeat(header.len()))
}
