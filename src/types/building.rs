use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildingError {
    #[error("Building height must be non-negative, got {0}")]
    NegativeHeight(i64),
    #[error("Building left edge {left} is past its right edge {right}")]
    InvertedEdges { left: i64, right: i64 },
}

/// An axis-aligned rectangle standing on the common baseline (height 0).
///
/// Serialized as the array `[left, right, height]`.
///
/// The engine expects `height >= 0` and `left <= right` but never checks it:
/// inputs that break these rules still produce a skyline, it just no longer
/// describes a real silhouette. Use [`Building::try_new`] when the caller wants
/// the preconditions enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i64; 3]", into = "[i64; 3]")]
pub struct Building {
    pub left: i64,
    pub right: i64,
    pub height: i64,
}

impl Building {
    pub const fn new(left: i64, right: i64, height: i64) -> Self {
        Self {
            left,
            right,
            height,
        }
    }

    /// Checked constructor.
    ///
    /// Zero-width buildings (`left == right`) are accepted.
    pub fn try_new(left: i64, right: i64, height: i64) -> Result<Self, BuildingError> {
        if height < 0 {
            return Err(BuildingError::NegativeHeight(height));
        }
        if left > right {
            return Err(BuildingError::InvertedEdges { left, right });
        }
        Ok(Self::new(left, right, height))
    }

    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    /// True for zero-width or zero-height buildings, which contribute nothing
    /// visible to a silhouette.
    pub fn is_degenerate(&self) -> bool {
        self.left == self.right || self.height == 0
    }

    /// Whether `x` lies inside the half-open range `[left, right)`.
    pub fn covers(&self, x: i64) -> bool {
        self.left <= x && x < self.right
    }
}

impl From<[i64; 3]> for Building {
    fn from([left, right, height]: [i64; 3]) -> Self {
        Building::new(left, right, height)
    }
}

impl From<Building> for [i64; 3] {
    fn from(b: Building) -> Self {
        [b.left, b.right, b.height]
    }
}

impl From<(i64, i64, i64)> for Building {
    fn from((left, right, height): (i64, i64, i64)) -> Self {
        Building::new(left, right, height)
    }
}
