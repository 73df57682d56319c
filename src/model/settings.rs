//! User settings (pure Rust, no FFI).
//!
//! This module defines the settings structure that can be deserialized
//! from the JSON config file. Nothing here is ever written back: settings
//! are preferences, not augmentation state.

use std::path::Path;

use serde::Deserialize;

use super::command::Command;
use super::constants::*;

/// Modifier key that turns a left-button drag into a window move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragModifier {
    #[default]
    Alt,
    Ctrl,
    Shift,
    Win,
}

impl DragModifier {
    /// Virtual-key codes that count as "held" for this modifier.
    pub fn virtual_keys(self) -> &'static [u16] {
        match self {
            DragModifier::Alt => &[0x12],          // VK_MENU
            DragModifier::Ctrl => &[0x11],         // VK_CONTROL
            DragModifier::Shift => &[0x10],        // VK_SHIFT
            DragModifier::Win => &[0x5B, 0x5C],    // VK_LWIN, VK_RWIN
        }
    }
}

/// Captions of the three system-menu entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuLabels {
    pub always_on_top: String,
    pub hide_titlebar: String,
    pub ghost_mode: String,
}

impl Default for MenuLabels {
    fn default() -> Self {
        Self {
            always_on_top: DEFAULT_LABEL_ALWAYS_ON_TOP.to_string(),
            hide_titlebar: DEFAULT_LABEL_HIDE_TITLEBAR.to_string(),
            ghost_mode: DEFAULT_LABEL_GHOST_MODE.to_string(),
        }
    }
}

impl MenuLabels {
    /// Caption for `cmd`.
    pub fn label(&self, cmd: Command) -> &str {
        match cmd {
            Command::AlwaysOnTop => &self.always_on_top,
            Command::HideTitlebar => &self.hide_titlebar,
            Command::GhostMode => &self.ghost_mode,
        }
    }
}

/// Complete settings, deserializable from `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Alpha applied to every ghosted window.
    pub ghost_alpha: u8,
    /// Modifier that arms the drag-to-move gesture.
    pub drag_modifier: DragModifier,
    /// System-menu captions.
    pub labels: MenuLabels,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ghost_alpha: DEFAULT_GHOST_ALPHA,
            drag_modifier: DragModifier::default(),
            labels: MenuLabels::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file at `path` and validate them.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let mut settings: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        settings.validate();
        Ok(settings)
    }

    /// Validates and clamps all values to usable ranges.
    pub fn validate(&mut self) {
        self.ghost_alpha = self.ghost_alpha.max(MIN_GHOST_ALPHA);

        let defaults = MenuLabels::default();
        let fix = |label: &mut String, fallback: String| {
            if label.trim().is_empty() {
                *label = fallback;
            }
        };
        fix(&mut self.labels.always_on_top, defaults.always_on_top);
        fix(&mut self.labels.hide_titlebar, defaults.hide_titlebar);
        fix(&mut self.labels.ghost_mode, defaults.ghost_mode);
    }
}

/// Error from loading or parsing the config file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_raises_alpha_to_minimum() {
        let mut s = Settings {
            ghost_alpha: 0,
            ..Settings::default()
        };
        s.validate();
        assert_eq!(s.ghost_alpha, MIN_GHOST_ALPHA);
    }

    #[test]
    fn validate_restores_blank_labels() {
        let mut s = Settings::default();
        s.labels.ghost_mode = "   ".to_string();
        s.labels.always_on_top = "Pin".to_string();
        s.validate();
        assert_eq!(s.labels.ghost_mode, DEFAULT_LABEL_GHOST_MODE);
        assert_eq!(s.labels.always_on_top, "Pin");
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let s: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn deserialize_partial_config() {
        let s: Settings =
            serde_json::from_str(r#"{ "drag_modifier": "win", "labels": { "ghost_mode": "Ghost" } }"#)
                .unwrap();
        assert_eq!(s.drag_modifier, DragModifier::Win);
        assert_eq!(s.labels.ghost_mode, "Ghost");
        assert_eq!(s.labels.hide_titlebar, DEFAULT_LABEL_HIDE_TITLEBAR);
        assert_eq!(s.ghost_alpha, DEFAULT_GHOST_ALPHA);
    }

    #[test]
    fn win_modifier_accepts_either_key() {
        assert_eq!(DragModifier::Win.virtual_keys(), &[0x5B, 0x5C]);
        assert_eq!(DragModifier::Alt.virtual_keys(), &[0x12]);
    }
}
