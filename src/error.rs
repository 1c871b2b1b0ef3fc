// Joust - Line Errors
//
// Everything that can go wrong while building, projecting or rescaling a
// song envelope.  Evaluation itself never fails: a degenerate line evaluates
// to zero.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The operation needs at least two control points.
    #[error("line has {0} control point(s), at least 2 are required")]
    TooFewPoints(usize),

    /// Control point `index` does not lie strictly to the right of its
    /// predecessor.
    #[error("control point {index} has x={x}, which is not greater than the previous x={prev_x}")]
    NonIncreasingX { index: usize, prev_x: i32, x: i32 },

    /// First and last control points share the same x.
    #[error("line domain has zero width")]
    ZeroWidthDomain,

    /// Every control point has the same y, so the line cannot be scaled
    /// vertically.
    #[error("line range has zero height")]
    ZeroHeightRange,

    /// The baseline skirt does not fit inside the target rectangle.
    #[error("baseline of {baseline}px does not fit in a {height}px tall area")]
    BaselineTooTall { baseline: u32, height: u32 },

    /// Unit conversion divisor must be strictly positive.
    #[error("unit divisor must be positive, got {0}")]
    InvalidDivisor(i32),

    /// The projected outline could not be allocated.
    #[error("could not allocate outline vertices: {0}")]
    Allocation(#[from] TryReserveError),
}
