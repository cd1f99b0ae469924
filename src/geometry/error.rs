use std::fmt;
use thiserror::Error;

/// Which ray of an angle `a–b–c` is meant: `b→a` or `b→c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    First,
    Last,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::First => write!(f, "first"),
            Endpoint::Last => write!(f, "last"),
        }
    }
}

/// Errors raised when a geometric quantity is undefined for its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The vertex coincides with an endpoint, so one ray has zero length.
    #[error("angle is undefined: the ray from the vertex to the {endpoint} point has zero length")]
    ZeroLengthRay { endpoint: Endpoint },
}
