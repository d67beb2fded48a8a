//! Domain validation errors.
//!
//! Returned when user-supplied values (filter options, identifiers) or
//! incoming feed contents violate domain rules.
//!
//! # Examples
//!
//! ```
//! use bookie_butcher::domain::error::DomainError;
//! use bookie_butcher::domain::ConfidenceTier;
//!
//! let result: Result<ConfidenceTier, _> = "carnage".parse();
//! assert!(matches!(result, Err(DomainError::UnknownTier { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Confidence tier label is not one of the four known tiers.
    #[error("unknown confidence tier '{value}' (expected execution, demolition, meat, or scrap)")]
    UnknownTier {
        /// The rejected label.
        value: String,
    },

    /// Recommendation is neither OVER nor UNDER.
    #[error("unknown recommendation '{value}' (expected OVER or UNDER)")]
    UnknownRecommendation {
        /// The rejected label.
        value: String,
    },

    /// Sport label was empty after trimming.
    #[error("sport cannot be empty")]
    EmptySport,

    /// Minimum edge could not be read as a number.
    #[error("invalid minimum edge '{value}'")]
    InvalidMinEdge {
        /// The rejected input.
        value: String,
    },

    /// Two records in one snapshot share an identifier.
    #[error("duplicate prediction id '{id}' in feed")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },

    /// No record with this identifier exists in the current snapshot.
    #[error("no prediction with id '{id}' in the current feed")]
    PredictionNotFound {
        /// The requested identifier.
        id: String,
    },
}
