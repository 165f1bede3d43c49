//! RP2040 glue for the digit-matrix core.

#![no_std]

pub mod buttons;
pub mod time;
pub mod ws2812;
