//! Preference store: which status-line fields are shown.
//!
//! A flat JSON file of boolean toggles. Unknown or missing keys mean
//! "enabled", so a fresh install (or an older file) shows everything.
//!
//! Structure:
//! - Constants: the declared field order (defines on-screen layout)
//! - Types: the persisted record
//! - Effect functions: load / save

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::platform::config_path;

// ============================================================================
// FIELD DECLARATIONS
// ============================================================================

/// A toggleable status-line field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Key used in the preference file.
    pub key: &'static str,
    /// Label shown in the editor.
    pub label: &'static str,
}

const fn field(key: &'static str, label: &'static str) -> FieldDef {
    FieldDef { key, label }
}

/// Key of the master switch for the second line.
pub const LINE2_ENABLED_KEY: &str = "line2_enabled";

/// First-line fields, in render order.
pub const LINE1_FIELDS: [FieldDef; 10] = [
    field("model", "🤖 Model name"),
    field("dir", "📁 Project directory"),
    field("git", "🌿 Git branch"),
    field("context", "🌈 Context usage"),
    field("cost", "💰 Cost"),
    field("changes", "+/- Line changes"),
    field("duration", "⏱️ Session duration"),
    field("tokens", "📥📤 Tokens"),
    field("nyan", "🐱 Nyan Cat"),
    field("heartbeat", "💗 Heartbeat"),
];

/// Second-line fields, in render order.
pub const LINE2_FIELDS: [FieldDef; 9] = [
    field("codingDays", "📅 Coding days"),
    field("activeDays", "🔥 Active days"),
    field("streak", "⚡ Streak"),
    field("sessions", "💬 Sessions"),
    field("messages", "🗣️ Messages"),
    field("todayMessages", "📈 Today"),
    field("peakHour", "🕐 Peak hour"),
    field("achievement", "🏆 Achievement"),
    field("randomStatus", "🎲 Random status"),
];

// ============================================================================
// PERSISTED RECORD
// ============================================================================

/// Contents of `nyan-config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Master switch for the statistics line.
    pub line2_enabled: bool,
    pub line1: BTreeMap<String, bool>,
    pub line2: BTreeMap<String, bool>,
}

/// Everything enabled.
impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            line2_enabled: true,
            line1: all_enabled(&LINE1_FIELDS),
            line2: all_enabled(&LINE2_FIELDS),
        }
    }
}

fn all_enabled(fields: &[FieldDef]) -> BTreeMap<String, bool> {
    fields.iter().map(|f| (f.key.to_string(), true)).collect()
}

impl Preferences {
    /// Stored value of a first-line field.
    pub fn line1_field(&self, key: &str) -> bool {
        self.line1.get(key).copied().unwrap_or(true)
    }

    /// Stored value of a second-line field, ignoring the master switch.
    pub fn line2_field(&self, key: &str) -> bool {
        self.line2.get(key).copied().unwrap_or(true)
    }

    /// Whether a second-line field should be rendered.
    ///
    /// Gated by [`Preferences::line2_enabled`].
    pub fn shows_line2_field(&self, key: &str) -> bool {
        self.line2_enabled && self.line2_field(key)
    }

    /// Add declared keys the file did not mention, enabled.
    fn fill_declared(&mut self) {
        for f in &LINE1_FIELDS {
            self.line1.entry(f.key.to_string()).or_insert(true);
        }
        for f in &LINE2_FIELDS {
            self.line2.entry(f.key.to_string()).or_insert(true);
        }
    }
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Load preferences from `dir`.
///
/// A missing or malformed file yields the all-enabled default; this never
/// fails.
pub fn load(dir: &Path) -> Preferences {
    let path = config_path(dir);
    let contents = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no preference file, using defaults");
            return Preferences::default();
        }
    };

    match serde_json::from_str::<Preferences>(&contents) {
        Ok(mut prefs) => {
            prefs.fill_declared();
            prefs
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed preference file, using defaults");
            Preferences::default()
        }
    }
}

/// Write preferences to `dir` as pretty-printed JSON.
pub fn save(dir: &Path, prefs: &Preferences) -> io::Result<()> {
    let path = config_path(dir);
    let contents = serde_json::to_string_pretty(prefs).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("Failed to serialize preferences: {}", e))
    })?;
    fs::write(&path, contents)?;
    debug!(path = %path.display(), "preferences saved");
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_enables_everything() {
        let prefs = Preferences::default();
        assert!(prefs.line2_enabled);
        for f in &LINE1_FIELDS {
            assert!(prefs.line1_field(f.key), "line1.{} should be enabled", f.key);
        }
        for f in &LINE2_FIELDS {
            assert!(prefs.shows_line2_field(f.key), "line2.{} should be enabled", f.key);
        }
    }

    #[test]
    fn load_without_file_returns_default() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load(temp.path()), Preferences::default());
    }

    #[test]
    fn load_malformed_file_returns_default() {
        let temp = TempDir::new().unwrap();
        fs::write(config_path(temp.path()), "invalid").unwrap();
        assert_eq!(load(temp.path()), Preferences::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut prefs = Preferences::default();
        prefs.line2_enabled = false;
        prefs.line1.insert("model".into(), false);

        save(temp.path(), &prefs).unwrap();
        let loaded = load(temp.path());

        assert_eq!(loaded, prefs);
        assert!(!loaded.line1_field("model"));
        assert!(loaded.line1_field("git"));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let temp = TempDir::new().unwrap();
        fs::write(config_path(temp.path()), r#"{"line1": {"cost": false}}"#).unwrap();

        let loaded = load(temp.path());

        assert!(loaded.line2_enabled);
        assert!(!loaded.line1_field("cost"));
        assert_eq!(loaded.line1.len(), LINE1_FIELDS.len());
        assert_eq!(loaded.line2.len(), LINE2_FIELDS.len());
    }

    #[test]
    fn master_switch_gates_rendering_but_not_stored_values() {
        let mut prefs = Preferences::default();
        prefs.line2_enabled = false;
        for f in &LINE2_FIELDS {
            assert!(!prefs.shows_line2_field(f.key));
            assert!(prefs.line2_field(f.key));
        }
    }

    #[test]
    fn unknown_key_defaults_to_enabled() {
        let prefs = Preferences::default();
        assert!(prefs.line1_field("nonexistent"));
        assert!(prefs.line2_field("nonexistent"));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        assert!(save(&missing, &Preferences::default()).is_err());
    }

    #[test]
    fn field_keys_are_unique() {
        let mut keys: Vec<&str> = LINE1_FIELDS.iter().chain(&LINE2_FIELDS).map(|f| f.key).collect();
        keys.push(LINE2_ENABLED_KEY);
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}
