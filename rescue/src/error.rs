use thiserror::Error;

/// A permutation state was supplied with the wrong number of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("permutation state must have {expected} elements, got {actual}")]
pub struct WidthError {
    pub expected: usize,
    pub actual: usize,
}
