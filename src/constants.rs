// Page and renderer constants for the web front-end.

// Host markup
pub const CONTAINER_ID: &str = "globe-container";
pub const INLINE_SPOTS_GLOBAL: &str = "GLOBE_SPOTS";

// Injected UI
pub const UI_CONTAINER_ID: &str = "gl-ui-container";
pub const INFO_BOX_ID: &str = "gl-infoBox";
pub const CLOSE_BUTTON_ID: &str = "gl-closeButton";
pub const INFO_NAME_ID: &str = "gl-infoName";
pub const INFO_IMAGE_ID: &str = "gl-infoImage";
pub const INFO_DESC_EN_ID: &str = "gl-infoDescEn";
pub const INFO_DESC_ZH_ID: &str = "gl-infoDescZh";
pub const RESET_BUTTON_ID: &str = "gl-resetButton";
pub const TITLE_ID: &str = "gl-title";
pub const DEVELOPER_ID: &str = "gl-developer";

// Surface textures (equirectangular)
pub const EARTH_DAY_URL: &str =
    "https://raw.githubusercontent.com/turban/webgl-earth/master/images/2_no_clouds_4k.jpg";
pub const EARTH_SPECULAR_URL: &str =
    "https://raw.githubusercontent.com/turban/webgl-earth/master/images/water_4k.png";
pub const EARTH_CLOUDS_URL: &str =
    "https://raw.githubusercontent.com/turban/webgl-earth/master/images/fair_clouds_4k.png";
pub const EARTH_BUMP_URL: &str =
    "https://raw.githubusercontent.com/turban/webgl-earth/master/images/elev_bump_4k.jpg";

// Mesh resolution
pub const SPHERE_WIDTH_SEGMENTS: u32 = 64;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 64;

// Starfield
pub const STAR_COUNT: usize = 4096;
pub const STAR_SEED: u64 = 0x5eed_57a2;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.3;
pub const SUN_INTENSITY: f32 = 1.0;
pub const SUN_POSITION: [f32; 3] = [10.0, 10.0, 5.0];
pub const SPECULAR_STRENGTH: f32 = 0.5; // grey specular colour
pub const SHININESS: f32 = 10.0;
pub const CLOUD_OPACITY: f32 = 0.8;
pub const BUMP_SCALE: f32 = 0.01; // world units of relief per unit of height map

// Fallback texel colours when a texture fails to load
pub const FALLBACK_SURFACE_RGBA: [u8; 4] = [255, 255, 255, 255];
pub const FALLBACK_SPECULAR_RGBA: [u8; 4] = [0, 0, 0, 255];
pub const FALLBACK_CLOUDS_RGBA: [u8; 4] = [255, 255, 255, 0];
pub const FALLBACK_BUMP_RGBA: [u8; 4] = [0, 0, 0, 255];
