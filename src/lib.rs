#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Digit`**: The selected value, always within 0-9
//! - **`FONT` / `pattern_for`**: Fixed 5x5 glyph per digit
//! - **`DisplayBuffer`**: What the matrix currently shows, one flag per pixel
//! - **`SharedBuffer`**: The display buffer shared between interrupt and main loop
//! - **`DigitInput`**: Interrupt-side handler turning debounced button edges into digit changes
//! - **`EdgeDebouncer`**: Per-button 200 ms accept/reject gate
//! - **`LedStrip`**: Trait to implement for your addressable-LED driver
//! - **`PackedGrb`**: 24-bit pixel word in the strip's green-red-blue order
//! - **`Blinker`**: Status LED toggled once per loop iteration
//! - **`DisplayLoop`**: The cooperative main loop tying rendering and blinking together
//! - **`TimeSource`**: Trait to implement for your monotonic clock
//!
//! Status pins and the loop sleep use the `embedded-hal` 1.0 `OutputPin` and
//! `DelayNs` traits, so any HAL that implements them can drive the loop.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod blink;
pub mod buffer;
pub mod colors;
pub mod config;
pub mod debounce;
pub mod font;
pub mod render;
pub mod scheduler;
pub mod time;
pub mod types;

pub use blink::Blinker;
pub use buffer::{DisplayBuffer, SharedBuffer};
pub use colors::{COLOR_OFF, PackedGrb};
pub use config::{DEBOUNCE_WINDOW_MS, DISPLAY_COLOR, LOOP_DELAY_MS, PIXEL_COUNT};
pub use debounce::{DigitInput, EdgeDebouncer, EdgeOutcome};
pub use font::{FONT, Glyph, pattern_for};
pub use render::{FrameRenderer, LedStrip, render};
pub use scheduler::DisplayLoop;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{Button, Digit, DigitError};
