use log::Level;

/// Scroll offset past which the header switches to its compact style.
pub const COMPACT_SCROLL_THRESHOLD: f64 = 50.0;

/// Space kept free above an anchor so the fixed header does not cover it.
pub const HEADER_CLEARANCE: f64 = 100.0;

/// Wait before scrolling to a deep-linked section so layout can settle.
/// Not a hard contract, tune freely.
pub const INITIAL_SCROLL_DELAY_MS: u32 = 100;

/// Per-item delay for the staggered fade-in of service cards and entries.
pub const REVEAL_STAGGER_MS: u32 = 100;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose logging while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
