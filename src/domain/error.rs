// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/error.rs
//
// Error taxonomy shared by the crop and label generators.

use std::path::{Path, PathBuf};

/// Result alias used throughout the domain layer.
pub type DocResult<T> = std::result::Result<T, LabelkitError>;

/// A required input was missing or out of range.
///
/// Each variant carries the user-facing message for the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter the recipient name.")]
    MissingName,
    #[error("Please enter the recipient address.")]
    MissingAddress,
    #[error("Please enter the postal code.")]
    MissingPostalCode,
    #[error("Resolution {0} DPI is outside the supported range 72..=600")]
    DpiOutOfRange(u32),
}

#[derive(Debug, thiserror::Error)]
pub enum LabelkitError {
    /// Source image unreadable or undecodable.
    #[error("Failed to load image {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Destination unwritable (permissions, disk full, invalid path).
    #[error("Failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("Failed to build PDF: {0}")]
    Document(String),
}

impl LabelkitError {
    pub fn load(path: &Path, reason: impl ToString) -> Self {
        Self::Load {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn write(path: &Path, reason: impl ToString) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

impl From<lopdf::Error> for LabelkitError {
    fn from(e: lopdf::Error) -> Self {
        Self::Document(e.to_string())
    }
}
