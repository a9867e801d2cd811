use crate::types::{Building, KeyPoint};

/// Two-point skyline of a single building: up to `height` at `left`, back to
/// 0 at `right`.
///
/// Degenerate buildings keep this exact shape; the cleanup pass absorbs them.
pub fn leaf_skyline(building: &Building) -> Vec<KeyPoint> {
    vec![
        KeyPoint::new(building.left, building.height),
        KeyPoint::new(building.right, 0),
    ]
}
