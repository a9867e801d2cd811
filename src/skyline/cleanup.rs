use crate::types::KeyPoint;

/// Drops every key point whose height equals the last kept point's height.
///
/// Idempotent. The driver runs it exactly once, on the fully merged output.
pub fn clean(points: &[KeyPoint]) -> Vec<KeyPoint> {
    let mut kept: Vec<KeyPoint> = Vec::with_capacity(points.len());
    for point in points {
        match kept.last() {
            Some(last) if last.height == point.height => {}
            _ => kept.push(*point),
        }
    }
    kept
}
