pub mod building;
pub mod key_point;
pub mod skyline;

pub use building::{Building, BuildingError};
pub use key_point::KeyPoint;
pub use skyline::{Skyline, SkylineError};
