use crate::error::{BookError, Result};
use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "addrbook.json";
const DEFAULT_DATA_FILE: &str = crate::store::fs::DEFAULT_FILENAME;
const DEFAULT_MAX_FIELD_LEN: usize = 50;
const DEFAULT_MAX_NOTES_LEN: usize = 100;

/// Configuration for addrbook, stored as `addrbook.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Where contacts are persisted, relative to the working directory unless absolute.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Ask `Save before exiting?` when leaving the menu.
    #[serde(default = "default_true")]
    pub confirm_save_on_exit: bool,

    /// Longest value kept for a text field entered at a prompt (characters).
    #[serde(default = "default_max_field_len")]
    pub max_field_len: usize,

    #[serde(default = "default_max_notes_len")]
    pub max_notes_len: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_true() -> bool {
    true
}

fn default_max_field_len() -> usize {
    DEFAULT_MAX_FIELD_LEN
}

fn default_max_notes_len() -> usize {
    DEFAULT_MAX_NOTES_LEN
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            confirm_save_on_exit: true,
            max_field_len: DEFAULT_MAX_FIELD_LEN,
            max_notes_len: DEFAULT_MAX_NOTES_LEN,
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        Ok(config)
    }

    /// Finds the config to use: `addrbook.json` in `work_dir` first, then the platform
    /// config directory, then defaults. A broken file is logged and skipped.
    pub fn resolve<P: AsRef<Path>>(work_dir: P) -> Self {
        let mut candidates = vec![work_dir.as_ref().to_path_buf()];
        if let Some(dirs) = ProjectDirs::from("com", "addrbook", "addrbook") {
            candidates.push(dirs.config_dir().to_path_buf());
        }

        for dir in candidates {
            if !dir.join(CONFIG_FILENAME).exists() {
                continue;
            }
            match Self::load(&dir) {
                Ok(config) => return config,
                Err(e) => warn!(
                    "ignoring {}: {}",
                    dir.join(CONFIG_FILENAME).display(),
                    e
                ),
            }
        }
        Self::default()
    }

    /// Cuts `value` to `max_field_len` characters.
    pub fn clip_field(&self, value: &str) -> String {
        clip(value, self.max_field_len)
    }

    pub fn clip_notes(&self, value: &str) -> String {
        clip(value, self.max_notes_len)
    }
}

fn clip(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
