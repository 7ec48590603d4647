// DOM wiring and compositing constants for the browser host

// Tour viewer elements
pub const TOUR_ROOT_ID: &str = "tour-root";
pub const TOUR_STOP_FRAME_ID: &str = "tour-stop-frame";
pub const TOUR_VIDEO_ID: &str = "tour-video";
pub const TOUR_OVERLAY_ID: &str = "tour-overlay";
pub const TOUR_EXTERIOR_ID: &str = "tour-exterior";
pub const TOUR_INTERIOR_ID: &str = "tour-interior";
pub const TOUR_FLOOR_PLAN_ID: &str = "tour-floor-plan";
pub const TOUR_HOTSPOTS_ID: &str = "tour-hotspots";
pub const TOUR_FLOOR_SELECTOR_ID: &str = "tour-floor-selector";
pub const TOUR_FLOOR_LABEL_ID: &str = "tour-floor-label";
pub const TOUR_PART_LABEL_ID: &str = "tour-part-label";
pub const TOUR_PANORAMA_ID: &str = "tour-panorama";
pub const TOUR_PANORAMA_IMAGE_ID: &str = "tour-panorama-image";
pub const TOUR_PANORAMA_TITLE_ID: &str = "tour-panorama-title";
pub const TOUR_ZOOM_LABEL_ID: &str = "tour-zoom-label";

pub const TOUR_PREV_BUTTON_ID: &str = "tour-prev";
pub const TOUR_NEXT_BUTTON_ID: &str = "tour-next";
pub const TOUR_ENTER_BUTTON_ID: &str = "tour-enter";
pub const TOUR_EXIT_BUTTON_ID: &str = "tour-exit";
pub const TOUR_CLOSE_BUTTON_ID: &str = "tour-close";
pub const TOUR_PANORAMA_RESET_ID: &str = "tour-panorama-reset";
pub const TOUR_PANORAMA_CLOSE_ID: &str = "tour-panorama-close";
pub const TOUR_FULLSCREEN_ID: &str = "tour-fullscreen";

// Frame sequence viewer elements
pub const FRAMES_ROOT_ID: &str = "frames-root";
pub const FRAMES_IMAGE_ID: &str = "frames-image";
pub const FRAMES_PROGRESS_ID: &str = "frames-progress";
pub const FRAMES_COUNTER_ID: &str = "frames-counter";
pub const FRAMES_PREV_ID: &str = "frames-prev";
pub const FRAMES_NEXT_ID: &str = "frames-next";
pub const FRAMES_PLAY_ID: &str = "frames-play";
pub const FRAMES_CLOSE_ID: &str = "frames-close";
pub const FRAMES_FULLSCREEN_ID: &str = "frames-fullscreen";

// Image-set viewer elements
pub const IMAGESET_ROOT_ID: &str = "imageset-root";
pub const IMAGESET_IMAGE_ID: &str = "imageset-image";
pub const IMAGESET_PROGRESS_ID: &str = "imageset-progress";
pub const IMAGESET_PREV_ID: &str = "imageset-prev";
pub const IMAGESET_NEXT_ID: &str = "imageset-next";
pub const IMAGESET_RESET_ID: &str = "imageset-reset";
pub const IMAGESET_CLOSE_ID: &str = "imageset-close";
pub const IMAGESET_FULLSCREEN_ID: &str = "imageset-fullscreen";

// Data attributes
pub const DATA_FLOOR: &str = "data-floor";
pub const DATA_ROOM: &str = "data-room";
pub const DATA_PART: &str = "data-part";
pub const DATA_ACTIVE: &str = "data-active";
pub const DATA_EXIT_HREF: &str = "data-exit-href";
pub const DATA_IMAGES: &str = "data-images";
pub const IMAGE_LIST_SEPARATOR: char = '|';
pub const DEFAULT_EXIT_HREF: &str = "/";

// Two-layer compositor: the upper layer covers the lower until the swap
pub const LAYER_Z_TOP: i32 = 30;
pub const LAYER_Z_BOTTOM: i32 = 29;

// Hotspot marker size in CSS pixels (centered on its anchor)
pub const HOTSPOT_SIZE_PX: f32 = 24.0;

// Wheel deltas reported in lines/pages are scaled to pixels
pub const WHEEL_LINE_PX: f32 = 16.0;
pub const WHEEL_PAGE_PX: f32 = 800.0;

// Frame deltas are capped so a backgrounded tab does not fast-forward timers
pub const MAX_FRAME_DT_MS: u64 = 250;

// Optional override of the frame-sequence directory on #frames-root
pub const DATA_FRAMES_DIR: &str = "data-frames-dir";
