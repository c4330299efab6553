// UI loop timing
pub const TICK_RATE_MS: u64 = 100;

// Rendering
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
pub const CARD_HEIGHT: u16 = 8;
pub const MAX_LOG_LINES: usize = 50;
