#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for ambient declaration bundles.
//!
//! Two layers:
//! - **Catalog**: the ordered set of known bundles (`es5`, `dom`, `es2020.full`, ...)
//!   and the source file each one is read from
//! - **Classification**: which namespaces (type, value, or both) a global identifier
//!   declared by a bundle lives in

pub mod catalog;
pub mod colors;
pub mod utils;

#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod utils_tests;

pub use catalog::{BundleDescriptor, Catalog, ROOT_BUNDLE, TYPESCRIPT_LIBS};
pub use colors::Colors;

/// Namespace membership of a global identifier.
///
/// Variant order matches the alphabetical order of [`Classification::export_name`],
/// so a sorted set of classifications renders as a sorted import list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Classification {
    /// Usable only in type positions (`interface`, `type` alias).
    #[serde(rename = "TYPE")]
    TypeOnly,
    /// Usable as both type and value (`class`, `enum`, `namespace`, merged declarations).
    #[serde(rename = "TYPE_VALUE")]
    TypeAndValue,
    /// Usable only in value positions (`var`, `function`).
    #[serde(rename = "VALUE")]
    ValueOnly,
}

impl Classification {
    pub const ALL: [Classification; 3] = [
        Classification::TypeOnly,
        Classification::TypeAndValue,
        Classification::ValueOnly,
    ];

    /// Maps the two namespace facts of a variable to a classification.
    ///
    /// Returns `None` for a variable that is neither a type nor a value.
    pub fn from_flags(is_type: bool, is_value: bool) -> Option<Self> {
        match (is_type, is_value) {
            (true, false) => Some(Self::TypeOnly),
            (false, true) => Some(Self::ValueOnly),
            (true, true) => Some(Self::TypeAndValue),
            (false, false) => None,
        }
    }

    pub fn is_type(self) -> bool {
        matches!(self, Self::TypeOnly | Self::TypeAndValue)
    }

    pub fn is_value(self) -> bool {
        matches!(self, Self::ValueOnly | Self::TypeAndValue)
    }

    /// Name of the shared constant this classification is emitted as.
    pub fn export_name(self) -> &'static str {
        match self {
            Self::TypeOnly => "TYPE",
            Self::TypeAndValue => "TYPE_VALUE",
            Self::ValueOnly => "VALUE",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.export_name())
    }
}
