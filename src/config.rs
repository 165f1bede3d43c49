//! Build-time configuration.
//!
//! These values are fixed when the firmware is built. Nothing here is
//! adjustable at runtime; [`DisplayLoop`](crate::DisplayLoop) only offers
//! overrides so tests and board variants can pick their own cadence.

use palette::Srgb;

/// Width (and height) of the square LED matrix.
pub const MATRIX_WIDTH: usize = 5;

/// Number of addressable pixels on the strip.
pub const PIXEL_COUNT: usize = MATRIX_WIDTH * MATRIX_WIDTH;

/// Highest digit the display can show.
pub const DIGIT_MAX: u8 = 9;

/// Minimum time between two accepted edges on the same button.
pub const DEBOUNCE_WINDOW_MS: u64 = 200;

/// Sleep at the end of every main-loop iteration.
///
/// The status LED toggles once per iteration, so it completes a full
/// on/off cycle every `2 * LOOP_DELAY_MS`.
pub const LOOP_DELAY_MS: u32 = 100;

/// Color used for lit digit pixels.
pub const DISPLAY_COLOR: Srgb = Srgb::new(0.0, 0.0, 1.0);
