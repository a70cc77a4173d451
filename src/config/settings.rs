//! Mailbox view settings.
//!
//! Settings are persisted as JSON at a path chosen by the host application
//! and loaded at startup. Every field has a default so a missing or
//! partial file degrades gracefully.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::app::Column;
use crate::services::FolderKind;

/// Top-level mailbox view settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Behavioral preferences.
    #[serde(default)]
    pub behavior: BehaviorSettings,
    /// Table column preferences.
    #[serde(default)]
    pub columns: ColumnSettings,
}

impl Settings {
    /// Loads settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing settings from {}", path.display()))
    }

    /// Saves settings to a JSON file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating settings directory {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self).context("serializing settings")?;
        fs::write(path, contents)
            .with_context(|| format!("writing settings to {}", path.display()))
    }
}

/// Behavioral preferences for the mailbox view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorSettings {
    /// Ask before deleting messages.
    pub confirm_delete: bool,
    /// Show the preview pane on startup.
    pub preview_visible: bool,
    /// Folder shown when the view opens.
    pub default_folder: FolderKind,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_delete: true,
            preview_visible: true,
            default_folder: FolderKind::Inbox,
        }
    }
}

/// Table column preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSettings {
    /// Per-folder overrides of the visible columns, in display order.
    ///
    /// Folders without an entry use the built-in layout.
    pub overrides: HashMap<FolderKind, Vec<Column>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.behavior.confirm_delete);
        assert!(settings.behavior.preview_visible);
        assert_eq!(settings.behavior.default_folder, FolderKind::Inbox);
        assert!(settings.columns.overrides.is_empty());
    }

    #[test]
    fn folder_kind_serialization() {
        let json = serde_json::to_string(&FolderKind::Drafts).unwrap();
        assert_eq!(json, "\"drafts\"");

        let folder: FolderKind = serde_json::from_str("\"sent\"").unwrap();
        assert_eq!(folder, FolderKind::Sent);
    }

    #[test]
    fn settings_round_trip() {
        let mut settings = Settings::default();
        settings.behavior.confirm_delete = false;
        settings.behavior.default_folder = FolderKind::Sent;
        settings.columns.overrides.insert(
            FolderKind::Inbox,
            vec![Column::From, Column::Subject, Column::DateReceived],
        );

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, settings);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let deserialized: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(deserialized, Settings::default());
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.behavior.preview_visible = false;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("reading settings"));
    }
}
