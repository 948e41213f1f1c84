// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The theme choice and the last opened directory are written back to
//! `settings.toml`. View mode and visitor count live in the persisted state
//! instead, which writes itself through on every change.

use crate::config::{self, Config};
use crate::ui::notifications::{self, Notification};

/// Writes `config` to disk, raising a toast when that fails.
///
/// Skipped during tests to keep isolation: unit tests exercise the logic by
/// inspecting the in-memory config instead.
pub fn save_config(config: &Config, notifications: &mut notifications::Manager) {
    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save(config) {
        tracing::warn!(%error, "failed to save config");
        notifications.push(Notification::warning("notification-config-save-error"));
    }
}
