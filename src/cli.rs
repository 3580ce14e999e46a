use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::database::{Database, DatabaseError};
use crate::render::{ViewMode, render_json, render_results};

#[derive(Parser)]
#[command(name = "idealog")]
#[command(about = "Idea log - jot down ideas, search them and export them to CSV")]
#[command(version)]
pub struct Cli {
    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Use this idea store instead of the configured one
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Use development mode (uses separate dev config/database)
    #[arg(long)]
    pub dev: bool,

    /// Result layout: detailed or compact (overrides the config file)
    #[arg(long)]
    pub view: Option<ViewMode>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new idea
    Add {
        /// The idea itself
        text: String,
        /// Longer description
        #[arg(short, long)]
        description: Option<String>,
        /// Freeform tags, e.g. "writing,fiction"
        #[arg(short, long)]
        tags: Option<String>,
    },
    /// Find ideas whose text, tags or description contain a keyword (case-sensitive)
    Search {
        keyword: String,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every idea (default if no subcommand)
    List {
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete an idea by ID
    Delete {
        id: String,
    },
    /// Export all ideas to a CSV file
    Export {
        /// Target file (defaults to the configured export path)
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),
    #[error("The idea text is required")]
    EmptyText,
    #[error("Please enter a keyword to search for")]
    EmptyKeyword,
    #[error("Please enter a valid ID (whole number), got '{0}'")]
    InvalidId(String),
    #[error("Export to {0} failed")]
    ExportFailed(String),
    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to serialize results: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Parse a user-entered idea ID. Only plain digits are accepted.
pub fn parse_idea_id(input: &str) -> Result<i64, CliError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(CliError::InvalidId(input.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| CliError::InvalidId(input.to_string()))
}

fn write_ideas(
    out: &mut impl Write,
    title: &str,
    ideas: &[crate::models::Idea],
    view: ViewMode,
    json: bool,
) -> Result<(), CliError> {
    if json {
        writeln!(out, "{}", render_json(ideas)?)?;
    } else {
        write!(out, "{}", render_results(title, ideas, view))?;
    }
    Ok(())
}

/// Handle the add command, then show the refreshed list
pub fn handle_add(
    text: &str,
    description: Option<&str>,
    tags: Option<&str>,
    db: &Database,
    view: ViewMode,
    out: &mut impl Write,
) -> Result<i64, CliError> {
    if text.trim().is_empty() {
        return Err(CliError::EmptyText);
    }

    let id = db.add(text, description, tags)?;
    writeln!(out, "Idea added successfully (ID: {})", id)?;
    writeln!(out)?;
    handle_list(false, db, view, out)?;

    Ok(id)
}

/// Handle the search command
pub fn handle_search(
    keyword: &str,
    json: bool,
    db: &Database,
    view: ViewMode,
    out: &mut impl Write,
) -> Result<usize, CliError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(CliError::EmptyKeyword);
    }

    let ideas = db.search(keyword)?;
    write_ideas(out, &format!("Search: '{}'", keyword), &ideas, view, json)?;
    Ok(ideas.len())
}

/// Handle the list command
pub fn handle_list(
    json: bool,
    db: &Database,
    view: ViewMode,
    out: &mut impl Write,
) -> Result<usize, CliError> {
    let ideas = db.list_all()?;
    write_ideas(out, "All ideas", &ideas, view, json)?;
    Ok(ideas.len())
}

/// Handle the delete command. A missing ID is reported, not treated as an error.
pub fn handle_delete(id: &str, db: &Database, out: &mut impl Write) -> Result<bool, CliError> {
    let id = parse_idea_id(id)?;

    let removed = db.delete(id)?;
    if removed {
        writeln!(out, "Idea with ID {} deleted.", id)?;
    } else {
        writeln!(out, "No idea found with ID {}.", id)?;
    }

    Ok(removed)
}

/// Handle the export command
pub fn handle_export(path: &Path, db: &Database, out: &mut impl Write) -> Result<(), CliError> {
    if !db.export(path) {
        return Err(CliError::ExportFailed(path.display().to_string()));
    }
    writeln!(out, "Ideas exported to {}", path.display())?;
    Ok(())
}
