//! Garment size labels.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A free-form garment size label (e.g., `P`, `M`, `G`, `2 anos`).
///
/// Products without size variants use the one-size sentinel `Único`.
/// The label is part of cart line identity, so equality is exact: the same
/// product in two sizes is two distinct cart lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Size(String);

impl Size {
    /// Label used when a product has no size variants.
    pub const ONE_SIZE: &'static str = "Único";

    /// Create a size from a label. Blank input collapses to the one-size
    /// sentinel.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Self::one_size();
        }
        if trimmed.len() == label.len() {
            Self(label)
        } else {
            Self(trimmed.to_owned())
        }
    }

    /// The one-size sentinel.
    #[must_use]
    pub fn one_size() -> Self {
        Self(Self::ONE_SIZE.to_owned())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::one_size()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Size {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}
