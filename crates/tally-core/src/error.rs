//! # Error Types
//!
//! The single error taxonomy for tally-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every precondition failure is an `InvalidArgument` carrying a
//!    human-readable message naming the component, property, and constraint
//! 3. Errors are raised before any state is mutated, never recovered
//!    internally, and always propagated to the caller
//!
//! The original runtime type checks ("a Basket can only include Products")
//! have no counterpart here: the type system makes those states
//! unrepresentable. What remains are the numeric, relational, and
//! referential constraints that types alone cannot express.

use thiserror::Error;

/// Pricing precondition errors.
///
/// All validation failures share one kind. The message carries the
/// specifics, e.g. "A Product's price must be a positive number."
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// A constructor or operation precondition was violated.
    #[error("{0}")]
    InvalidArgument(String),
}

impl PricingError {
    /// Builds an `InvalidArgument` from the call site's own message.
    ///
    /// Each public operation writes its message explicitly; there is no
    /// reflective message generation.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
