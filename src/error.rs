//! Configuration errors
//!
//! The simulation itself never fails; only loading settings can.

use std::fmt;

#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read or written
    Io(std::io::Error),
    /// Settings text is not valid JSON for [`Settings`](crate::Settings)
    Parse(serde_json::Error),
    /// A value parsed but is outside its usable range
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "settings file: {}", err),
            SettingsError::Parse(err) => write!(f, "settings parse error: {}", err),
            SettingsError::Invalid { field, reason } => {
                write!(f, "invalid setting '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
            SettingsError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;
