// DOM ids and classes the page is expected to provide.

// Parallax window
pub const STATUS_ID: &str = "status";
pub const DEBUG_ID: &str = "debug";
pub const START_BUTTON_ID: &str = "start-btn";
pub const FRONT_LAYER_ID: &str = "layer-front";

// Dialogue player
pub const TITLE_SCREEN_ID: &str = "titleScreen";
pub const FADE_OVERLAY_ID: &str = "fadeOverlay";
pub const FACE_ICON_ID: &str = "faceIcon";
pub const NAME_DISPLAY_ID: &str = "nameDisplay";
pub const TEXT_CONTENT_ID: &str = "textContent";
pub const CONTINUE_ICON_ID: &str = "continueIcon";

// Classes
pub const HIDDEN: &str = "hidden";
pub const SHOW: &str = "show";
pub const FADE_IN: &str = "fade-in"; // overlay turning opaque
pub const FADE_OUT: &str = "fade-out"; // overlay clearing
pub const STATUS_READY: &str = "ready";
pub const STATUS_ERROR: &str = "error";
pub const NAME_DISPLAY_CLASS: &str = "name-display";

// Click tone envelope
pub const TONE_GAIN: f32 = 0.08;
pub const TONE_ATTACK_SEC: f64 = 0.005;
