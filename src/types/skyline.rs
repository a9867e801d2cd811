use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::key_point::KeyPoint;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkylineError {
    #[error("Key point {index} moves left of its predecessor")]
    DecreasingX { index: usize },
    #[error("Key point {index} repeats the height of its predecessor")]
    RedundantPoint { index: usize },
    #[error("Key point {index} has a negative height")]
    NegativeHeight { index: usize },
}

/// An ordered sequence of key points describing a silhouette.
///
/// Serialized transparently as `[[x, height], ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skyline {
    points: Vec<KeyPoint>,
}

impl Skyline {
    pub fn new() -> Self {
        Skyline { points: Vec::new() }
    }

    pub fn points(&self) -> &[KeyPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<KeyPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyPoint> {
        self.points.iter()
    }

    /// Height of the silhouette at `x`; 0 left of the first key point.
    ///
    /// When several key points share an x (zero-width input), the last one wins.
    pub fn height_at(&self, x: i64) -> i64 {
        let idx = self.points.partition_point(|p| p.x <= x);
        if idx == 0 {
            0
        } else {
            self.points[idx - 1].height
        }
    }

    /// First and last x of the skyline, if any.
    pub fn extent(&self) -> Option<(i64, i64)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.x, last.x)),
            _ => None,
        }
    }

    /// Checks the canonical output form.
    ///
    /// Coincident x values are accepted: zero-width buildings legitimately
    /// produce them.
    pub fn validate(&self) -> Result<(), SkylineError> {
        for (index, point) in self.points.iter().enumerate() {
            if point.height < 0 {
                return Err(SkylineError::NegativeHeight { index });
            }
            if index == 0 {
                continue;
            }
            let prev = &self.points[index - 1];
            if point.x < prev.x {
                return Err(SkylineError::DecreasingX { index });
            }
            if point.height == prev.height {
                return Err(SkylineError::RedundantPoint { index });
            }
        }
        Ok(())
    }
}

impl From<Vec<KeyPoint>> for Skyline {
    fn from(points: Vec<KeyPoint>) -> Self {
        Skyline { points }
    }
}

impl FromIterator<KeyPoint> for Skyline {
    fn from_iter<I: IntoIterator<Item = KeyPoint>>(iter: I) -> Self {
        Skyline {
            points: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Skyline {
    type Item = KeyPoint;
    type IntoIter = std::vec::IntoIter<KeyPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Skyline {
    type Item = &'a KeyPoint;
    type IntoIter = std::slice::Iter<'a, KeyPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
