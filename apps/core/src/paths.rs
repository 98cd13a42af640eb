//! Portable data-directory resolution.
//!
//! All runtime state lives under `./data` next to the executable (or the
//! working directory in development), overridable with `CALMCIRCLE_DB_PATH`.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::AppError;

pub struct PortablePathManager;

impl PortablePathManager {
    /// The application root: the executable's directory in release builds,
    /// the current directory otherwise.
    pub fn root_dir() -> PathBuf {
        #[cfg(debug_assertions)]
        {
            env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        }

        #[cfg(not(debug_assertions))]
        match env::current_exe() {
            Ok(mut path) => {
                path.pop();
                path
            }
            Err(e) => {
                tracing::error!(
                    "Failed to get current exe path: {}. Falling back to current_dir.",
                    e
                );
                env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            }
        }
    }

    /// The main data directory (./data).
    pub fn data_dir() -> PathBuf {
        Self::root_dir().join("data")
    }

    /// The SQLite file backing the key-value store.
    /// `CALMCIRCLE_DB_PATH` overrides the default location.
    pub fn db_path() -> PathBuf {
        if let Ok(path) = env::var("CALMCIRCLE_DB_PATH") {
            return PathBuf::from(path);
        }
        Self::data_dir().join("db").join("calmcircle.sqlite")
    }

    /// Ensure the data directories exist.
    pub fn init() -> Result<(), AppError> {
        let db_dir = Self::data_dir().join("db");
        fs::create_dir_all(&db_dir)?;
        Ok(())
    }
}
