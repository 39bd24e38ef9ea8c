pub mod beacons;
pub mod camera;
pub mod constants;
pub mod geo;
pub mod globe;
pub mod interaction;
pub mod orbit;
pub mod pick;
pub mod spots;
pub mod tween;

pub use beacons::*;
pub use constants::*;
pub use geo::*;
pub use globe::*;
pub use interaction::*;
pub use spots::*;

// Shaders bundled as string constants
pub static GLOBE_WGSL: &str = include_str!("../../shaders/globe.wgsl");
pub static BEACON_WGSL: &str = include_str!("../../shaders/beacon.wgsl");
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");
