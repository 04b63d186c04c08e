//! Bulk file formats

use std::fmt;
use std::path::Path;

/// A supported import/export format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    /// Lowercases and trims a user-supplied format name
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Parses a format name after normalizing it
    pub fn parse(raw: &str) -> Option<Self> {
        match Self::normalize(raw).as_str() {
            "json" => Some(Format::Json),
            "csv" => Some(Format::Csv),
            _ => None,
        }
    }

    /// Normalized extension of `path`, or an empty string without one
    pub fn extension_of(path: &Path) -> String {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::normalize)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
