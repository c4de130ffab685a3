use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 4;
/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 32;

/// Format used for `PasswordRecord::timestamp`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Line shown in place of history when nothing could be loaded.
pub const NO_SAVED_PASSWORDS: &str = "No saved passwords.";

/// A group of characters that can be toggled on for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharacterClass {
    /// All classes, in the order their sets are concatenated into an alphabet.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// The characters belonging to this class.
    pub fn charset(&self) -> &'static str {
        match self {
            CharacterClass::Upper => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lower => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Digit => "0123456789",
            CharacterClass::Special => r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##,
        }
    }
}

/// Options for generating a random password.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub length: usize,
    pub use_upper: bool,
    pub use_lower: bool,
    pub use_digits: bool,
    pub use_special: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            use_upper: true,
            use_lower: true,
            use_digits: true,
            use_special: true,
        }
    }
}

impl GenerationOptions {
    /// Whether the given class is switched on.
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Upper => self.use_upper,
            CharacterClass::Lower => self.use_lower,
            CharacterClass::Digit => self.use_digits,
            CharacterClass::Special => self.use_special,
        }
    }

    /// Enabled classes in alphabet order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .iter()
            .copied()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }
}

/// A saved password together with the local time it was saved at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRecord {
    pub password: String,
    pub timestamp: String,
}

impl PasswordRecord {
    pub fn new(password: &str, saved_at: &NaiveDateTime) -> Self {
        Self {
            password: password.to_string(),
            timestamp: format_timestamp(saved_at),
        }
    }

    /// `"<timestamp>: <password>"`, as shown in the history list.
    pub fn display_line(&self) -> String {
        format!("{}: {}", self.timestamp, self.password)
    }
}

/// Formats a save time with second precision.
pub fn format_timestamp(saved_at: &NaiveDateTime) -> String {
    saved_at.format(TIMESTAMP_FORMAT).to_string()
}

/// How the record file looked when history was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryStatus {
    /// The file was read and parsed.
    Loaded,
    /// No record file exists yet.
    Missing,
    /// The file exists but is not a JSON array of records.
    Corrupt,
    /// The file exists but could not be read.
    Unreadable,
}

/// Saved passwords plus the state of the file they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    pub records: Vec<PasswordRecord>,
    pub status: HistoryStatus,
}

impl History {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lines for a history view. Any status other than `Loaded` yields the
    /// single "no data" line; a valid but empty file yields nothing.
    pub fn display_lines(&self) -> Vec<String> {
        match self.status {
            HistoryStatus::Loaded => self.records.iter().map(|r| r.display_line()).collect(),
            HistoryStatus::Missing | HistoryStatus::Corrupt | HistoryStatus::Unreadable => {
                vec![NO_SAVED_PASSWORDS.to_string()]
            }
        }
    }
}
