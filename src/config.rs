//! Compile-time configuration. There is no runtime configuration.

// I2C bus shared by the RTC (0x68) and the panel (0x3C)
pub const I2C_FREQ_KHZ: u32 = 400;

// Main loop timing
pub const MODE_INTERVAL_MS: u32 = 10_000; // switch digital <-> analog every 10 s
pub const FRAME_INTERVAL_MS: u32 = 100;

// Animations
pub const ANIM_STEP: u32 = 4; // pixels per animation frame
pub const ANIM_FRAME_MS: u32 = 5;
pub const TITLE_HOLD_MS: u32 = 2_000;
pub const TITLE_TEXT: &str = "SMART CLOCK";

// Digital face decorations
pub const BRACKET_MARGIN: i32 = 5;
pub const BRACKET_ARM: i32 = 8;
pub const DOT_INSET: i32 = 18;
pub const DOT_Y: i32 = 53;
pub const DOT_RADIUS: u32 = 3;

// Analog face
pub const FACE_RADIUS: u32 = 30;
pub const HUB_RADIUS: u32 = 2;
