use glam::Vec3;

// Fixed visual/audio policy shared by the core and the web frontend.

// Ridge geometry
pub const RIDGE_POINTS: usize = 200; // control points per ridge line
pub const RIDGE_SPAN: f32 = (RIDGE_POINTS - 1) as f32; // x extent, centered on 0
pub const FILL_BASE_Y: f32 = -0.5; // bottom row of the occluding fill plane
pub const HEIGHT_EXPONENT: f32 = 1.2; // power-law shaping of bin magnitudes

// Bin-to-point mapping (left half mirrors bins downward, right half upward)
pub const LEFT_HUMP_START: usize = 39;
pub const CENTER_INDEX: usize = 100;
pub const RIGHT_HUMP_END: usize = 161;
pub const LEFT_BIN_ORIGIN: usize = 102; // bin = 102 - i
pub const RIGHT_BIN_OFFSET: usize = 97; // bin = i - 97

// Audio analysis
pub const ANALYSER_FFT_SIZE: u32 = 256;
pub const SNAPSHOT_BINS: usize = (ANALYSER_FFT_SIZE / 2) as usize;

// Depth field
pub const RETIREMENT_DEPTH: f32 = -1000.0; // ridges at or beyond this depth are dropped

// Clock
pub const SAMPLE_INTERVAL_MS: f64 = 5.0; // minimum spacing between sampling cycles
pub const SPEED_PERIOD_DIVISOR_MS: f64 = 2000.0; // speed = 1 + A * sin(elapsed / divisor)
pub const SPEED_AMPLITUDE: f32 = 0.5;

// Colors
pub const LINE_BASE_COLOR: u32 = 0xe1_e1_e1;
pub const LINE_COLOR_JITTER: u32 = 0x22; // exclusive upper bound, shared by all channels
pub const LINE_OPACITY: f32 = 0.57;
pub const FILL_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// Volume
pub const VOLUME_DEFAULT: f32 = 0.3;
pub const VOLUME_STEP: f32 = 0.05; // per wheel notch
pub const VOLUME_HUD_FADE_MS: i32 = 800;

// Camera (orthographic frustum in world units, as left/right/top/bottom/near/far)
pub const CAMERA_LEFT: f32 = -550.0;
pub const CAMERA_RIGHT: f32 = -250.0;
pub const CAMERA_TOP: f32 = 1200.0;
pub const CAMERA_BOTTOM: f32 = -200.0;
pub const CAMERA_NEAR: f32 = 200.0;
pub const CAMERA_FAR: f32 = 5000.0;
pub const CAMERA_EYE: Vec3 = Vec3::new(400.0, 1000.0, 300.0);
pub const CAMERA_TARGET: Vec3 = Vec3::new(400.0, 0.0, 0.0);

// Location lookup
pub const LOCATION_KEY_CODE: &str = "Space";
pub const GEOLOCATION_TIMEOUT_MS: u32 = 5000;
pub const GEOLOCATION_MAX_AGE_MS: u32 = 60_000;
pub const REVERSE_GEOCODE_ENDPOINT: &str = "https://nominatim.openstreetmap.org/reverse";
pub const REVERSE_GEOCODE_ZOOM: u8 = 10;

// Media
pub const AUDIO_TRACK_URL: &str = "./Song 117.mp3";
pub const MAX_PIXEL_RATIO: f64 = 2.0;
