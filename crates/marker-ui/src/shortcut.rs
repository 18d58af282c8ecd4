//! Keyboard shortcuts parsed from config strings such as `"Ctrl+Z"`.

use std::fmt;

use anyhow::{anyhow, bail, Result};
use eframe::egui;

/// A key plus the modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub key: egui::Key,
}

impl Shortcut {
    pub const fn ctrl(key: egui::Key) -> Self {
        Self {
            ctrl: true,
            shift: false,
            alt: false,
            key,
        }
    }

    /// Parses `"Ctrl+Shift+Z"`-style text. Modifier names are
    /// case-insensitive; `Cmd`/`Command` count as Ctrl.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown modifier, an unknown key name, or a
    /// shortcut without exactly one key.
    pub fn parse(text: &str) -> Result<Self> {
        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key = None;

        for part in text.split('+').map(str::trim) {
            match part.to_ascii_lowercase().as_str() {
                "" => bail!("empty segment in shortcut '{text}'"),
                "ctrl" | "control" | "cmd" | "command" => ctrl = true,
                "shift" => shift = true,
                "alt" | "option" => alt = true,
                _ => {
                    if key.is_some() {
                        bail!("shortcut '{text}' names more than one key");
                    }
                    let parsed = egui::Key::from_name(part)
                        .or_else(|| egui::Key::from_name(&part.to_ascii_uppercase()))
                        .ok_or_else(|| anyhow!("unknown key '{part}' in shortcut '{text}'"))?;
                    key = Some(parsed);
                }
            }
        }

        let key = key.ok_or_else(|| anyhow!("shortcut '{text}' has no key"))?;
        Ok(Self {
            ctrl,
            shift,
            alt,
            key,
        })
    }

    /// Parses `text`, logging and returning `fallback` when it is invalid.
    pub fn parse_or(text: &str, fallback: Self) -> Self {
        Self::parse(text).unwrap_or_else(|e| {
            tracing::warn!("Invalid shortcut, using {fallback}: {e}");
            fallback
        })
    }

    /// Whether a key press with the given modifiers triggers this shortcut.
    pub fn matches(&self, key: egui::Key, modifiers: egui::Modifiers) -> bool {
        self.key == key
            && self.ctrl == (modifiers.ctrl || modifiers.command)
            && self.shift == modifiers.shift
            && self.alt == modifiers.alt
    }
}

/// Formats as `CTRL + SHIFT + Z`, the style used in the on-screen hints.
impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("CTRL + ")?;
        }
        if self.shift {
            f.write_str("SHIFT + ")?;
        }
        if self.alt {
            f.write_str("ALT + ")?;
        }
        f.write_str(&self.key.name().to_uppercase())
    }
}
