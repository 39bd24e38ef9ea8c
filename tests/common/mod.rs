// The main crate is wasm-only, so host tests include the pure core modules
// directly. Module names mirror `src/core` so `super::` paths resolve.

#![allow(dead_code)]

pub mod core {
    pub mod beacons {
        include!("../../src/core/beacons.rs");
    }
    pub mod camera {
        include!("../../src/core/camera.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod geo {
        include!("../../src/core/geo.rs");
    }
    pub mod globe {
        include!("../../src/core/globe.rs");
    }
    pub mod interaction {
        include!("../../src/core/interaction.rs");
    }
    pub mod orbit {
        include!("../../src/core/orbit.rs");
    }
    pub mod pick {
        include!("../../src/core/pick.rs");
    }
    pub mod spots {
        include!("../../src/core/spots.rs");
    }
    pub mod tween {
        include!("../../src/core/tween.rs");
    }
}

pub const EPS: f32 = 1e-4;

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
}
