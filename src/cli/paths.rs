//! Path utilities for shelfline.
//!
//! All data lives under `~/.shelfline/`:
//! - `~/.shelfline/config.toml` - main configuration
//! - `~/.shelfline/catalog.db` - catalog database

use std::path::PathBuf;

/// Returns the shelfline home directory (`~/.shelfline/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".shelfline")
}

/// Returns the default config file path (`~/.shelfline/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default database path (`~/.shelfline/catalog.db`).
pub fn default_database() -> PathBuf {
    home_dir().join("catalog.db")
}

/// Ensures the parent directory of the given database path exists.
pub fn ensure_parent_dir(path: &std::path::Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_shelfline_home() {
        let home = home_dir();
        let config = default_config();
        let db = default_database();

        assert!(home.to_string_lossy().contains(".shelfline"));
        assert!(config.to_string_lossy().contains(".shelfline"));
        assert!(db.to_string_lossy().contains(".shelfline"));
    }

    #[test]
    fn ensure_parent_dir_creates_missing_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let db = tmp.path().join("nested/data/catalog.db");

        ensure_parent_dir(&db).unwrap();

        assert!(db.parent().unwrap().is_dir());
    }

    #[test]
    fn ensure_parent_dir_accepts_bare_file_names() {
        assert!(ensure_parent_dir(std::path::Path::new("catalog.db")).is_ok());
    }
}
