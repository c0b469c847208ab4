//! High-score persistence backed by a JSON file.
//!
//! The file holds a single object with two fields:
//!
//! ```json
//! { "score": 500, "name": "Ada" }
//! ```
//!
//! A `null` name reads as an empty one. Saves go through a sibling temporary
//! file that is renamed over the record, so a torn write never replaces it.
//!
//! A missing file means no record yet. Anything else that goes wrong is reported
//! as a [`StoreError`] so the session can fall back to an empty record on purpose.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use blockfall_core::{HighScore, HighScoreStore};

/// Default file name, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = "high_score.json";

/// Environment variable overriding the record path.
pub const PATH_ENV: &str = "BLOCKFALL_HIGH_SCORE_PATH";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corrupt high score file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk shape of the record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct Record {
    score: u32,
    #[serde(deserialize_with = "null_as_empty")]
    name: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<Record> for HighScore {
    fn from(value: Record) -> Self {
        HighScore::new(value.score, value.name)
    }
}

impl From<&HighScore> for Record {
    fn from(value: &HighScore) -> Self {
        Self {
            score: value.score,
            name: value.name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$BLOCKFALL_HIGH_SCORE_PATH`, else `high_score.json` in the working directory.
    pub fn from_env() -> Self {
        match std::env::var_os(PATH_ENV) {
            Some(explicit) if !explicit.is_empty() => Self::new(explicit),
            _ => Self::new(DEFAULT_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl HighScoreStore for JsonFileStore {
    type Error = StoreError;

    fn load(&self) -> Result<Option<HighScore>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no high score file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let record: Record =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(record.into()))
    }

    fn save(&mut self, record: &HighScore) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let text = serde_json::to_string_pretty(&Record::from(record)).map_err(|source| {
            StoreError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(text.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        debug!("wrote high score to {}", self.path.display());
        Ok(())
    }
}
