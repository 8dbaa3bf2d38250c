//! Persistence: JSON task snapshots and TOML configuration.

mod config;

pub use config::Config;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::tasklist::TaskList;

const TASK_FILE: &str = "tasks.json";

/// Returns `~/.config/taskline/`, honoring a TASKLINE_DATA_DIR override.
///
/// The override keeps tests and scripted runs away from the real data.
///
/// # Errors
/// Returns an error if the directory cannot be determined or created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("TASKLINE_DATA_DIR") {
        Some(path) => PathBuf::from(path),
        None => dirs::home_dir()
            .ok_or(StorageError::NoDataDir)?
            .join(".config")
            .join("taskline"),
    };
    fs::create_dir_all(&dir).map_err(|source| StorageError::WriteFailed {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// File-backed store for the task list.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Open the store in the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            path: data_dir()?.join(TASK_FILE),
        })
    }

    /// Open a store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the task list. A missing file is an empty list, not an error.
    pub fn load(&self) -> Result<TaskList, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(TaskList::new());
            }
            Err(source) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_slice(&bytes).map_err(|err| StorageError::Corrupt {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }

    /// Persist the task list, writing to a sibling temp file first so a
    /// failed write never clobbers the previous snapshot.
    pub fn save(&self, tasks: &TaskList) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(tasks).map_err(|err| StorageError::Corrupt {
            path: self.path.clone(),
            message: err.to_string(),
        })?;
        let tmp = self.path.with_extension("json.tmp");
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn write_all(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    fs::write(path, bytes).map_err(|source| StorageError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
