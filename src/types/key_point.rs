use serde::{Deserialize, Serialize};

/// A single height transition: the silhouette is `height` from `x` until the
/// next key point. Serialized as `[x, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct KeyPoint {
    pub x: i64,
    pub height: i64,
}

impl KeyPoint {
    pub const fn new(x: i64, height: i64) -> Self {
        Self { x, height }
    }
}

impl From<[i64; 2]> for KeyPoint {
    fn from([x, height]: [i64; 2]) -> Self {
        KeyPoint::new(x, height)
    }
}

impl From<KeyPoint> for [i64; 2] {
    fn from(p: KeyPoint) -> Self {
        [p.x, p.height]
    }
}

impl From<(i64, i64)> for KeyPoint {
    fn from((x, height): (i64, i64)) -> Self {
        KeyPoint::new(x, height)
    }
}
