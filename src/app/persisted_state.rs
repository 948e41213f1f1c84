// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This module handles state that should persist across sessions but is not
//! user-configurable (unlike preferences in `settings.toml`): the active view
//! mode and the visitor count. Values are opaque strings keyed by name, the
//! way a browser's local storage holds them.
//!
//! State is stored in CBOR (Concise Binary Object Representation) format for:
//! - Compact binary storage
//! - Fast serialization/deserialization
//! - Clear separation from user-editable TOML preferences
//!
//! # Path Resolution
//!
//! The state file location can be customized for testing or portable deployments:
//! 1. Use `load_from()` with an explicit directory
//! 2. Set `ICED_GALLERY_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use crate::gallery::preferences::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Persisted string preferences, written through on every change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersistedState {
    #[serde(default)]
    values: BTreeMap<String, String>,

    /// Directory override used when this state was loaded.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl PersistedState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with a warning message key explaining what went wrong.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    ///
    /// Later writes go back to the same directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let empty = Self {
            values: BTreeMap::new(),
            base_dir: base_dir.clone(),
        };

        let Some(path) = Self::state_file_path_with_override(base_dir.clone()) else {
            return (empty, None);
        };

        if !path.exists() {
            return (empty, None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader::<Self, _>(reader) {
                    Ok(mut state) => {
                        state.base_dir = base_dir;
                        (state, None)
                    }
                    Err(error) => {
                        tracing::warn!(path = %path.display(), %error, "state file is corrupt");
                        (empty, Some("notification-state-parse-error".to_string()))
                    }
                }
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "state file is unreadable");
                (empty, Some("notification-state-read-error".to_string()))
            }
        }
    }

    /// Saves application state to the directory it was loaded from.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = Self::state_file_path_with_override(self.base_dir.clone())
            .ok_or_else(|| Error::State("no data directory available".to_string()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(fs::File::create(&path)?);
        ciborium::into_writer(self, writer)?;
        Ok(())
    }

    /// Returns the full path to the state file with optional override.
    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

impl PreferenceStore for PersistedState {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}
