//! Contract error types for the back office
//!
//! These errors are transport-agnostic; the REST layer maps them to
//! RFC-9457 Problem Details.

/// Back-office domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A single-field or cross-field validation failure
    Validation {
        /// Validation error message
        message: String,
    },
    /// One or more required fields were absent from the input
    MissingFields {
        /// Names of every missing field
        fields: Vec<String>,
    },
    /// Entity lookup came back empty
    NotFound {
        /// Resource type (commande, facture, stock, ...)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// A unique constraint would be violated
    Duplicate {
        /// Offending field
        field: String,
        /// Offending value
        value: String,
    },
    /// A referenced row does not exist (or is still referenced)
    ForeignKey {
        /// Constraint or relation description from the store
        constraint: String,
    },
    /// Stock level cannot cover the requested quantity
    InsufficientStock {
        /// Part whose stock was checked
        piece_id: i32,
        /// Quantity the caller asked for
        requested: i32,
        /// Quantity actually available
        available: i32,
    },
    /// Authentication failure (bad credentials, bad/expired token)
    Auth {
        /// Reason, safe to show to the caller
        reason: String,
    },
    /// Internal error; the cause is logged, never surfaced
    Internal,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::MissingFields { fields } => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            Self::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            Self::Duplicate { field, value } => {
                write!(f, "Duplicate {}: {}", field, value)
            }
            Self::ForeignKey { constraint } => {
                write!(f, "Foreign key violation: {}", constraint)
            }
            Self::InsufficientStock {
                piece_id,
                requested,
                available,
            } => {
                write!(
                    f,
                    "Insufficient stock for piece {}: requested {}, available {}",
                    piece_id, requested, available
                )
            }
            Self::Auth { reason } => {
                write!(f, "Authentication error: {}", reason)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for DomainError {}

impl DomainError {
    /// Shorthand for a not-found error on an integer key.
    pub fn not_found(resource: &str, id: i32) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    /// Shorthand for a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
