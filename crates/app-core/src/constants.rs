use std::time::Duration;

// Shared tuning constants for the parallax window and the dialogue player.

// Parallax window
pub const ROTATION_STRENGTH_DEG: f32 = 50.0; // full offset maps to this many degrees
pub const SMOOTHING: f32 = 0.12; // s += α·(sample − s)
pub const MIRROR_MODE: bool = true; // selfie cameras read naturally when mirrored
pub const SMOOTHED_ORIGIN: [f32; 2] = [0.5, 0.5]; // frame centre

// Scene transitions
pub const TITLE_HOLD: Duration = Duration::from_millis(500); // black screen before the overlay clears
pub const FADE: Duration = Duration::from_millis(2000); // overlay transition length

// Typewriter
pub const CHAR_DELAY: Duration = Duration::from_millis(50);
pub const LINE_BREAK_DELAY: Duration = Duration::from_millis(250);
pub const SPEAKER_CHANGE_PAUSE: Duration = Duration::from_millis(400);

// Gate
pub const GATE_DELAY: Duration = Duration::from_millis(300);
pub const ELLIPSIS_GATE_DELAY: Duration = Duration::from_millis(800);

// Click tones
pub const TONE_DURATION: Duration = Duration::from_millis(30);
pub const SAKANA_TONE_HZ: f32 = 880.0;
pub const DEATH_TONE_HZ: f32 = 440.0;

// Text markers
pub const LINE_BREAK: char = '\n';
pub const ELLIPSIS: &str = "…";
