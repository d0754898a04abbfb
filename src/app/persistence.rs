// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.

use super::Message;
use crate::config::{self, Config};
use iced::Task;

/// Persists the current preferences to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic
/// by calling the update handlers directly rather than through disk IO.
pub fn persist_preferences(config: &Config) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    if let Err(error) = config::save(config) {
        eprintln!("Failed to save config: {error}");
    }

    Task::none()
}
