//! ANSI color codes for terminal output.
//!
//! One color per classification plus structural modifiers:
//! - Blue: bundle names
//! - Magenta / green / cyan: `TYPE`, `VALUE`, `TYPE_VALUE` tags
//! - Dim: file names, separators, counts

use crate::Classification;

/// ANSI color palette for CLI output.
///
/// Uses only standard 16-color ANSI codes so it reads in light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub bundle: &'static str,
    pub type_only: &'static str,
    pub value_only: &'static str,
    pub type_and_value: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        bundle: "\x1b[34m",
        type_only: "\x1b[35m",
        value_only: "\x1b[32m",
        type_and_value: "\x1b[36m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        bundle: "",
        type_only: "",
        value_only: "",
        type_and_value: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Color for a classification tag.
    pub fn tag(&self, classification: Classification) -> &'static str {
        match classification {
            Classification::TypeOnly => self.type_only,
            Classification::ValueOnly => self.value_only,
            Classification::TypeAndValue => self.type_and_value,
        }
    }
}
