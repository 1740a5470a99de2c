use geo::Point;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Which operand of a Fréchet computation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrechetError {
    #[error("the {0} point sequence is empty")]
    EmptySequence(Side),

    #[error("the {0} point sequence holds a non-finite coordinate at {1}")]
    NonFinite(Side, usize),
}

/// Fails on the first operand that is empty or holds a NaN or infinite
/// coordinate.
pub(crate) fn ensure_valid(a: &[Point], b: &[Point]) -> Result<(), FrechetError> {
    for (side, points) in [(Side::Left, a), (Side::Right, b)] {
        if points.is_empty() {
            return Err(FrechetError::EmptySequence(side));
        }

        if let Some(index) = points
            .iter()
            .position(|point| !(point.x().is_finite() && point.y().is_finite()))
        {
            return Err(FrechetError::NonFinite(side, index));
        }
    }

    Ok(())
}
