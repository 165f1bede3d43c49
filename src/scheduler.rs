//! Cooperative main loop: draw the frame, blink, sleep, repeat.
//!
//! Provides [`DisplayLoop`], the only scheduling point of the firmware. All
//! other work happens in the button interrupt, which only writes the
//! [`SharedBuffer`] this loop reads.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::blink::Blinker;
use crate::buffer::SharedBuffer;
use crate::colors::PackedGrb;
use crate::config::LOOP_DELAY_MS;
use crate::render::{FrameRenderer, LedStrip};

/// Owns the thread-context half of the firmware.
///
/// # Type Parameters
/// * `'b` - Lifetime of the shared buffer reference
/// * `S` - LED strip driver
/// * `P` - Status LED pin
/// * `D` - Delay provider used for the loop sleep
pub struct DisplayLoop<'b, S: LedStrip, P: OutputPin, D: DelayNs> {
    buffer: &'b SharedBuffer,
    renderer: FrameRenderer<S>,
    blinker: Blinker<P>,
    delay: D,
    loop_delay_ms: u32,
}

impl<'b, S: LedStrip, P: OutputPin, D: DelayNs> DisplayLoop<'b, S, P, D> {
    /// Creates a loop with the default color and the default 100 ms delay.
    pub fn new(buffer: &'b SharedBuffer, strip: S, status_pin: P, delay: D) -> Self {
        Self {
            buffer,
            renderer: FrameRenderer::new(strip),
            blinker: Blinker::new(status_pin),
            delay,
            loop_delay_ms: LOOP_DELAY_MS,
        }
    }

    /// Overrides the color for lit pixels.
    pub fn with_color(mut self, color: impl Into<PackedGrb>) -> Self {
        self.renderer.set_color(color);
        self
    }

    /// Overrides the per-iteration sleep. The status LED blink period is
    /// always twice this value.
    pub fn with_loop_delay_ms(mut self, millis: u32) -> Self {
        self.loop_delay_ms = millis;
        self
    }

    /// Runs one iteration: render the current frame, toggle the status LED,
    /// then sleep for the loop delay.
    pub fn step(&mut self) {
        let frame = self.buffer.snapshot();
        self.renderer.draw(&frame);
        self.blinker.tick();
        self.delay.delay_ms(self.loop_delay_ms);
    }

    /// Runs forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &FrameRenderer<S> {
        &self.renderer
    }

    /// Returns the blinker.
    pub fn blinker(&self) -> &Blinker<P> {
        &self.blinker
    }

    /// Returns the delay provider.
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Returns the per-iteration sleep in milliseconds.
    pub fn loop_delay_ms(&self) -> u32 {
        self.loop_delay_ms
    }
}
