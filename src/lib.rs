//! Deterministic skyline engine for axis-aligned buildings.
//!
//! `skyline-core` turns a list of buildings `(left, right, height)` sharing a
//! common baseline into the minimal ordered list of `(x, height)` key points
//! tracing their combined silhouette. The computation is a pure function:
//! identical inputs always produce identical outputs, independent of input
//! order and of whether the `parallel` feature is used.
//!
//! ```
//! use skyline_core::skyline::skyline;
//! use skyline_core::types::{Building, KeyPoint};
//!
//! let buildings = [Building::new(0, 2, 3), Building::new(2, 5, 3)];
//! let result = skyline(&buildings);
//! assert_eq!(result.points(), &[KeyPoint::new(0, 3), KeyPoint::new(5, 0)]);
//! ```

pub mod skyline;
pub mod types;

pub use skyline::{skyline, EngineConfig, SkylineEngine};
pub use types::{Building, KeyPoint, Skyline};
