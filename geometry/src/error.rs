use thiserror::Error;

use crate::euler::AxisOrder;

/// Errors raised by this crate.
///
/// Degenerate numeric input (zero-norm quaternions, parallel vectors) is never an error here;
/// it shows up as NaN or infinite components in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Euler extraction was asked for an axis order it does not implement.
    #[error("unsupported axis order {0:?}")]
    UnsupportedAxisOrder(AxisOrder),
}
