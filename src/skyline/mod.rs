pub mod cleanup;
pub mod config;
pub mod leaf;
pub mod merge;

use log::debug;

use crate::types::{Building, KeyPoint, Skyline};
pub use cleanup::clean;
pub use config::EngineConfig;
pub use leaf::leaf_skyline;
pub use merge::merge;

/// Computes the skyline of `buildings` with the default configuration.
///
/// Total over any finite input: empty input gives an empty skyline, and
/// degenerate buildings are tolerated.
pub fn skyline(buildings: &[Building]) -> Skyline {
	SkylineEngine::default().compute(buildings)
}

/// Divide-and-conquer skyline driver.
///
/// Input order does not matter; any permutation of the same buildings yields
/// the same skyline.
#[derive(Debug, Clone, Default)]
pub struct SkylineEngine {
	config: EngineConfig,
}

impl SkylineEngine {
	pub fn new(config: EngineConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	pub fn compute(&self, buildings: &[Building]) -> Skyline {
		// 1. Recursive split and merge
		let raw = self.compute_raw(buildings);

		// 2. Single cleanup pass over the full merge
		let cleaned = clean(&raw);

		debug!(
			"skyline: {} buildings -> {} raw points -> {} key points",
			buildings.len(),
			raw.len(),
			cleaned.len()
		);

		Skyline::from(cleaned)
	}

	/// Merged skyline before the cleanup pass. May hold adjacent points of
	/// equal height.
	pub fn compute_raw(&self, buildings: &[Building]) -> Vec<KeyPoint> {
		match buildings {
			[] => Vec::new(),
			[building] => leaf_skyline(building),
			_ => {
				// Left half takes the smaller share on odd lengths
				let mid = buildings.len() / 2;
				let (left, right) = buildings.split_at(mid);
				let (left_skyline, right_skyline) = self.compute_halves(left, right);
				merge(&left_skyline, &right_skyline)
			}
		}
	}

	fn compute_halves(
		&self,
		left: &[Building],
		right: &[Building],
	) -> (Vec<KeyPoint>, Vec<KeyPoint>) {
		#[cfg(feature = "parallel")]
		{
			let len = left.len() + right.len();
			if self.config.parallel && len >= self.config.parallel_min_buildings {
				log::trace!("skyline: forking {} buildings at {}", len, left.len());
				// join returns only after both halves are complete
				return rayon::join(|| self.compute_raw(left), || self.compute_raw(right));
			}
		}

		(self.compute_raw(left), self.compute_raw(right))
	}
}
