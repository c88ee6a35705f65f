//! Builder for opening the device-local invitation store.

use std::path::{Path, PathBuf};

use log::debug;

use super::Invitations;
use crate::{
    error::{InvitationError, Result},
    store::SqliteStore,
};

/// Builder for creating and configuring an SQLite-backed [`Invitations`].
#[derive(Debug, Clone, Default)]
pub struct InvitationsBuilder {
    database_path: Option<PathBuf>,
}

impl InvitationsBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/sakura/sakura.db` or `~/.local/share/sakura/sakura.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the store, creating the database file and its parent
    /// directories if needed.
    ///
    /// # Errors
    ///
    /// Returns `InvitationError::FileSystem` if the parent directory cannot be created
    /// Returns `InvitationError::Database` if database initialization fails
    pub fn build(self) -> Result<Invitations<SqliteStore>> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| InvitationError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening invitation store at {}", db_path.display());
        let store = SqliteStore::open(&db_path)?;
        Ok(Invitations::new(store))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("sakura")
            .place_data_file("sakura.db")
            .map_err(|e| InvitationError::XdgDirectory(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_build_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("nested").join("dir").join("sakura.db");

        let invitations = InvitationsBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .expect("Failed to build store");

        assert!(db_path.exists());
        assert!(invitations.list_known_ids().expect("list").is_empty());
    }

    #[test]
    fn test_none_path_keeps_previous_setting() {
        let builder = InvitationsBuilder::new()
            .with_database_path(Some("/tmp/a.db"))
            .with_database_path(None::<&str>);
        assert_eq!(builder.database_path, Some(PathBuf::from("/tmp/a.db")));
    }
}
