use std::cmp::{max, Ordering};

use crate::types::KeyPoint;

/// Merges two skylines with a two-pointer sweep.
///
/// Each side keeps its own running height; every emitted point carries the
/// larger of the two. Points at the same x on both sides collapse into a
/// single emitted point. Once one side runs out, the rest of the other side
/// is copied as-is.
///
/// The output may contain adjacent points of equal height. Collapsing them is
/// left to [`clean`](super::cleanup::clean), run once after the full
/// recursion.
pub fn merge(left: &[KeyPoint], right: &[KeyPoint]) -> Vec<KeyPoint> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    let (mut h1, mut h2) = (0, 0);

    while i < left.len() && j < right.len() {
        let (l, r) = (left[i], right[j]);
        let x = match l.x.cmp(&r.x) {
            Ordering::Less => {
                h1 = l.height;
                i += 1;
                l.x
            }
            Ordering::Greater => {
                h2 = r.height;
                j += 1;
                r.x
            }
            Ordering::Equal => {
                h1 = l.height;
                h2 = r.height;
                i += 1;
                j += 1;
                l.x
            }
        };
        merged.push(KeyPoint::new(x, max(h1, h2)));
    }

    // The exhausted side has settled at its final height, so the tail is exact.
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
