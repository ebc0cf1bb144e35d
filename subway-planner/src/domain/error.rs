//! Domain error types.
//!
//! These errors represent invariant violations caught while constructing
//! domain values. Routing outcomes live in `planner::RouteError`.

use super::StationId;

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Two stations share an identifier
    #[error("duplicate station id: {0}")]
    DuplicateStation(StationId),
}
