use log::{debug, error, info};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;

use crate::models::Idea;
use crate::utils::current_timestamp;

/// Header row written at the top of every export
pub const EXPORT_HEADER: [&str; 5] = ["ID", "Texte", "Description", "Tags", "Date"];

const SELECT_COLUMNS: &str = "SELECT id, texte, description, tags, date FROM idees";

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),
    #[error("Failed to create database directory: {0}")]
    DirectoryError(String),
    #[error("Idea text must not be empty")]
    EmptyText,
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the store at `path` and make sure the schema is current
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let db_path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| DatabaseError::DirectoryError(e.to_string()))?;
            }
        }

        debug!("Opening idea store at {}", db_path.display());
        let conn = Connection::open(db_path)?;

        let db = Database { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Open a throwaway store that lives only as long as the returned value
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let db = Database {
            conn: Connection::open_in_memory()?,
        };
        db.initialize()?;
        Ok(db)
    }

    /// Create the `idees` table if needed and bring legacy tables up to date.
    /// Safe to call any number of times.
    pub fn initialize(&self) -> Result<(), DatabaseError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS idees (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                texte           TEXT NOT NULL,
                description     TEXT,
                tags            TEXT,
                date            TEXT
            )",
            [],
        )?;

        // Tables created before descriptions existed only have texte/tags/date
        if !self.column_exists("idees", "description")? {
            info!("Migrating legacy idees table: adding description column");
            self.conn
                .execute("ALTER TABLE idees ADD COLUMN description TEXT", [])?;
        }

        Ok(())
    }

    fn column_exists(&self, table: &str, column: &str) -> Result<bool, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2")?;
        let count: i64 = stmt.query_row(rusqlite::params![table, column], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Get a reference to the underlying connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Insert a new idea stamped with the current time and return its ID.
    /// Blank description/tags are stored as NULL.
    pub fn add(
        &self,
        text: &str,
        description: Option<&str>,
        tags: Option<&str>,
    ) -> Result<i64, DatabaseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DatabaseError::EmptyText);
        }

        self.conn.execute(
            "INSERT INTO idees (texte, description, tags, date) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                text,
                non_blank(description),
                non_blank(tags),
                current_timestamp()
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("Added idea {}", id);
        Ok(id)
    }

    /// Helper function to map a row to an Idea
    fn row_to_idea(row: &rusqlite::Row) -> Result<Idea, rusqlite::Error> {
        Ok(Idea {
            id: row.get(0)?,
            text: row.get(1)?,
            description: row.get(2)?,
            tags: row.get(3)?,
            created_at: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        })
    }

    /// Ideas whose text, tags or description contain `keyword`, in insertion order.
    /// Matching is a literal, case-sensitive substring test.
    pub fn search(&self, keyword: &str) -> Result<Vec<Idea>, DatabaseError> {
        // instr() rather than LIKE: LIKE folds ASCII case and treats % and _ as wildcards
        let sql = format!(
            "{SELECT_COLUMNS}
             WHERE instr(texte, ?1) > 0 OR instr(tags, ?1) > 0 OR instr(description, ?1) > 0
             ORDER BY id ASC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let ideas = stmt
            .query_map(rusqlite::params![keyword], Self::row_to_idea)?
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Search for {:?} matched {} ideas", keyword, ideas.len());
        Ok(ideas)
    }

    /// All ideas in insertion order
    pub fn list_all(&self) -> Result<Vec<Idea>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))?;
        let ideas = stmt
            .query_map([], Self::row_to_idea)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ideas)
    }

    /// Get a single idea by ID
    pub fn get(&self, id: i64) -> Result<Option<Idea>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;
        let idea = stmt
            .query_row(rusqlite::params![id], Self::row_to_idea)
            .optional()?;
        Ok(idea)
    }

    /// Number of stored ideas
    pub fn count(&self) -> Result<usize, DatabaseError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM idees", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete an idea by ID. Returns false when no such idea exists.
    pub fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let removed = self
            .conn
            .execute("DELETE FROM idees WHERE id = ?1", rusqlite::params![id])?;
        debug!("Delete of idea {} removed {} rows", id, removed);
        Ok(removed > 0)
    }

    /// Write every idea to a CSV file at `path`, returning the number of data rows.
    /// Reads the current contents; nothing is locked for the duration.
    pub fn try_export(&self, path: impl AsRef<Path>) -> Result<usize, DatabaseError> {
        let ideas = self.list_all()?;

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_path(path.as_ref())?;
        writer.write_record(EXPORT_HEADER)?;
        for idea in &ideas {
            writer.write_record(idea.export_record())?;
        }
        writer.flush()?;

        info!(
            "Exported {} ideas to {}",
            ideas.len(),
            path.as_ref().display()
        );
        Ok(ideas.len())
    }

    /// Export to `path`, reporting failure as `false` instead of an error
    pub fn export(&self, path: impl AsRef<Path>) -> bool {
        match self.try_export(path.as_ref()) {
            Ok(_) => true,
            Err(e) => {
                error!("Export to {} failed: {}", path.as_ref().display(), e);
                false
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
