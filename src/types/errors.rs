use std::fmt;

// === GeneratorError ===

/// Errors related to password generation.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// No character class was enabled, so there is nothing to draw from.
    EmptyAlphabet,
    /// The requested length is outside the supported range.
    LengthOutOfRange(usize),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::EmptyAlphabet => {
                write!(f, "Select at least one character class")
            }
            GeneratorError::LengthOutOfRange(len) => write!(
                f,
                "Password length {} is out of range ({}-{})",
                len,
                crate::types::password::MIN_LENGTH,
                crate::types::password::MAX_LENGTH
            ),
        }
    }
}

impl std::error::Error for GeneratorError {}

// === StoreError ===

/// Errors related to saving passwords to the history file.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Tried to save an empty password.
    EmptyInput,
    /// Reading or writing the record file failed.
    Io(String),
    /// The records could not be encoded as JSON.
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::EmptyInput => write!(f, "No password to save"),
            StoreError::Io(msg) => write!(f, "Password store I/O error: {}", msg),
            StoreError::Serialization(msg) => {
                write!(f, "Password store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === SettingsError ===

/// Errors related to saving user settings.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// Writing the settings file failed.
    Io(String),
    /// The settings could not be encoded as JSON.
    Serialization(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::Serialization(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
