// Shared timing and interaction tuning constants for the tour engine.

// Exterior rotation
pub const PART_COUNT: u8 = 4; // cyclic exterior viewpoints
pub const PART_DURATION_SEC: f64 = 7.5; // video time covered by one part
pub const SEGMENT_ASSET_DURATION_SEC: f64 = 30.0; // both encodings are the same length
pub const REVERSE_PART_START_SEC: [f64; PART_COUNT as usize] = [0.0, 22.5, 15.0, 7.5];
pub const COMPLETION_TOLERANCE_SEC: f64 = 0.3; // frame-boundary slack when detecting segment end

// Building entry clip
pub const ENTRY_NEAR_END_SEC: f64 = 0.3; // overlay starts when this much clip remains

// Overlay choreography (milliseconds)
pub const FLOOR_CHANGE_OVERLAY_MS: u64 = 400;
pub const EXIT_OVERLAY_MS: u64 = 1400;
pub const ENTRY_TAIL_MS: u64 = 400;
pub const OVERLAY_FADE_MS: u64 = 300;
pub const MEDIA_STALL_TIMEOUT_MS: u64 = 12_000;

// Frame sequence viewer
pub const SEQUENCE_TOTAL_FRAMES: usize = 300;
pub const SEQUENCE_FRAME_STEP: usize = 3; // every 3rd rendered frame was exported
pub const SEQUENCE_PART_LOCK_MS: u64 = 500;
pub const DRAG_SENSITIVITY_PX: f32 = 5.0; // pixels of drag per discrete step

// Panorama
pub const PANORAMA_PITCH_PER_PX: f32 = 0.2;
pub const PANORAMA_YAW_PER_PX: f32 = 0.3;
pub const PANORAMA_PITCH_LIMIT_DEG: f32 = 90.0;
pub const PANORAMA_KEY_STEP_DEG: f32 = 5.0;
pub const PANORAMA_ZOOM_MIN: f32 = 1.0;
pub const PANORAMA_ZOOM_MAX: f32 = 3.0;
pub const PANORAMA_ZOOM_PER_WHEEL: f32 = 0.001;

// Interior
pub const DEFAULT_FLOOR: &str = "floor2";
