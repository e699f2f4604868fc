//! # Content Error Types
//!
//! All errors that can occur while validating, registering or loading content.

use thiserror::Error;

/// Errors that can occur in the content system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A definition failed validation. Every failed rule is listed.
    #[error("{kind} validation failed for {id:?}: {}", .reasons.join("; "))]
    Validation {
        /// Definition family ("item", "weapon", "armor", "explosive").
        kind: &'static str,
        /// The offending definition id (may be empty).
        id: String,
        /// One entry per violated rule.
        reasons: Vec<String>,
    },

    /// A definition with the same id is already registered.
    #[error("{kind} id {id:?} already registered")]
    DuplicateId {
        /// Definition family.
        kind: &'static str,
        /// The duplicated id.
        id: String,
    },

    /// An item references a weapon/armor/explosive that does not exist.
    #[error("item {item_id:?} references unknown {kind} {reference:?}")]
    DanglingReference {
        /// The referencing item.
        item_id: String,
        /// Kind of the missing definition.
        kind: &'static str,
        /// The missing id.
        reference: String,
    },

    /// A slot name did not match any known slot.
    #[error("unknown slot {0:?}")]
    UnknownSlot(String),

    /// A team name was neither `gun` nor `machete`.
    #[error("unknown team {0:?}")]
    UnknownTeam(String),

    /// A content file or directory could not be read.
    #[error("cannot read {path}: {message}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying error message.
        message: String,
    },

    /// A content file could not be parsed.
    #[error("cannot parse {path}: {message}")]
    Parse {
        /// Path that failed.
        path: String,
        /// Underlying parser message.
        message: String,
    },
}

impl ContentError {
    /// Builds a validation error, or `Ok(())` when no rule failed.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Validation` if `reasons` is non-empty.
    pub fn check(kind: &'static str, id: &str, reasons: Vec<String>) -> ContentResult<()> {
        if reasons.is_empty() {
            Ok(())
        } else {
            Err(Self::Validation {
                kind,
                id: id.to_string(),
                reasons,
            })
        }
    }
}

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;
