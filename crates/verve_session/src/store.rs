//! High-score persistence.
//!
//! Stored values are kept as strings and parsed on read, with a fallback
//! to 0 for anything malformed. A corrupt entry costs the player a stale
//! high score; it never takes the game down.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Score persistence failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The score file could not be read or written.
    #[error("score file i/o failed for {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The score file did not parse as TOML.
    #[error("score file {path} is not valid TOML: {source}")]
    Parse {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },
    /// The score table could not be serialized.
    #[error("failed to serialize score table: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Per-game high-score storage.
pub trait ScoreStore {
    /// Best recorded score for a game, 0 when absent or malformed.
    fn get(&self, game_id: &str) -> u32;

    /// Records a score for a game.
    fn set(&mut self, game_id: &str, score: u32) -> Result<(), StoreError>;
}

/// Parses a stored value, falling back to 0 on garbage.
fn parse_score(game_id: &str, raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(score) => score,
        Err(_) => {
            warn!(game_id, raw, "malformed stored score, treating as 0");
            0
        }
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    /// Raw stored values, keyed by game id.
    entries: HashMap<String, String>,
}

impl MemoryScoreStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a raw value, bypassing formatting. Lets tests exercise the
    /// malformed-value fallback.
    pub fn insert_raw(&mut self, game_id: &str, raw: &str) {
        self.entries.insert(game_id.to_owned(), raw.to_owned());
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self, game_id: &str) -> u32 {
        self.entries
            .get(game_id)
            .map_or(0, |raw| parse_score(game_id, raw))
    }

    fn set(&mut self, game_id: &str, score: u32) -> Result<(), StoreError> {
        self.entries.insert(game_id.to_owned(), score.to_string());
        Ok(())
    }
}

/// On-disk score file shape.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ScoreFile {
    /// Raw stored values, keyed by game id.
    #[serde(default)]
    scores: HashMap<String, String>,
}

/// File-backed store: loaded once at open, written through on set.
#[derive(Debug)]
pub struct TomlScoreStore {
    /// Score file location.
    path: PathBuf,
    /// Cached table; the lock keeps the store shareable.
    cache: Mutex<HashMap<String, String>>,
}

impl TomlScoreStore {
    /// Opens a store, loading the file if it exists.
    ///
    /// A missing file is an empty store; a file that is not valid TOML is
    /// an error, since silently discarding it would lose every score.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let scores = match fs::read_to_string(&path) {
            Ok(text) => {
                let file: ScoreFile =
                    toml::from_str(&text).map_err(|source| StoreError::Parse {
                        path: path.clone(),
                        source,
                    })?;
                file.scores
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no score file yet, starting empty");
                HashMap::new()
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path,
                    source,
                })
            }
        };
        Ok(Self {
            path,
            cache: Mutex::new(scores),
        })
    }

    /// Score file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, scores: &HashMap<String, String>) -> Result<(), StoreError> {
        let text = toml::to_string_pretty(&ScoreFile {
            scores: scores.clone(),
        })?;
        fs::write(&self.path, text).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl ScoreStore for TomlScoreStore {
    fn get(&self, game_id: &str) -> u32 {
        self.cache
            .lock()
            .get(game_id)
            .map_or(0, |raw| parse_score(game_id, raw))
    }

    fn set(&mut self, game_id: &str, score: u32) -> Result<(), StoreError> {
        let mut cache = self.cache.lock();
        cache.insert(game_id.to_owned(), score.to_string());
        self.flush(&cache)
    }
}
