//! Error types for routing.

use thiserror::Error;

/// Dispatch-time errors.
///
/// A failed match is not an error: [`Router::match_route`](crate::Router::match_route)
/// returns `None` for the routine no-route-matched outcome. The variants
/// here all indicate a misconfiguration discovered when running a matched
/// target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// An action string is not of the form `"Controller@method"`.
    #[error("invalid target action {0:?}, expected \"Controller@method\"")]
    InvalidTarget(String),

    /// The named controller is not present in the registry.
    #[error("controller {0:?} doesn't exist")]
    UnknownController(String),

    /// The controller exists but exposes no method by that name.
    #[error("method {method:?} doesn't exist on controller {controller:?}")]
    UnknownMethod { controller: String, method: String },
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
