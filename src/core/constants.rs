use glam::Vec3;

// Scene and interaction tuning shared by the globe model and the renderer.

// Scene layout
pub const GLOBE_RADIUS: f32 = 10.0;
pub const CLOUD_RADIUS: f32 = GLOBE_RADIUS + 0.05; // cloud shell sits just above the surface
pub const STARFIELD_RADIUS: f32 = 500.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const INITIAL_CAMERA_EYE: Vec3 = Vec3::new(0.0, 5.0, 30.0);
pub const INITIAL_ORBIT_TARGET: Vec3 = Vec3::ZERO;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_MIN_DISTANCE: f32 = 12.0;
pub const ORBIT_MAX_DISTANCE: f32 = 50.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // radius factor per wheel notch
pub const ORBIT_EPS: f32 = 1e-6;

// Beacon geometry (group-local units)
pub const CORE_RADIUS: f32 = 0.1;
pub const RING_INNER_RADIUS: f32 = 0.15;
pub const RING_OUTER_RADIUS: f32 = 0.2;
pub const BEACON_COLOR: [f32; 3] = [1.0, 0.647, 0.0]; // #ffa500

// Beacon animation
pub const PULSE_RATE: f32 = 1.5; // rad/s
pub const RING_PHASE_OFFSET: f32 = std::f32::consts::PI;
pub const IDLE_SCALE: f32 = 1.0;
pub const HOVER_SCALE: f32 = 1.5;
pub const HOVER_TWEEN_SEC: f32 = 0.3;

// Camera flights
pub const FLY_TO_DISTANCE_FACTOR: f32 = 2.0;
pub const FLY_TO_SEC: f32 = 1.5;
pub const RESET_SEC: f32 = 2.0;
