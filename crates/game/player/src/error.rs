//! Error types for the player model.
//!
//! Almost every operation on [`crate::PlayerState`] is total. The few that can
//! be asked to do something impossible (index a route or oak item slot that
//! was never allocated) report it through [`PlayerError`]; decoding raw save
//! text reports malformed JSON through [`SnapshotError`].

use crate::types::OakItem;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    Validation,

    /// Unexpected state inconsistency. Indicates a bug or a corrupted save.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-player errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised by player state operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// Route id has no kill counter.
    #[error("route {route} is out of range (max: {max})")]
    RouteOutOfRange {
        /// Requested route id.
        route: usize,
        /// Highest route id with a counter.
        max: usize,
    },

    /// Oak item index beyond the configured experience slots.
    #[error("oak item {item} has no experience slot (slots: {slots})")]
    OakItemSlotOutOfRange {
        /// Requested oak item.
        item: OakItem,
        /// Number of allocated slots.
        slots: usize,
    },
}

impl GameError for PlayerError {
    fn severity(&self) -> ErrorSeverity {
        use PlayerError::*;
        match self {
            RouteOutOfRange { .. } => ErrorSeverity::Validation,
            // Every OakItem variant should have a slot; a miss means the config is wrong.
            OakItemSlotOutOfRange { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use PlayerError::*;
        match self {
            RouteOutOfRange { .. } => "PLAYER_ROUTE_OUT_OF_RANGE",
            OakItemSlotOutOfRange { .. } => "PLAYER_OAK_ITEM_SLOT_OUT_OF_RANGE",
        }
    }
}

/// Errors raised while decoding raw save text.
///
/// Only syntactically broken input fails. Missing or wrong-typed fields fall
/// back to defaults during restoration.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("save data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl GameError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Json(_) => "SNAPSHOT_INVALID_JSON",
        }
    }
}
