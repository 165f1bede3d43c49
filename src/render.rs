//! Frame rendering onto an addressable LED strip.
//!
//! Defines the [`LedStrip`] trait the board implements, and the renderer that
//! walks a [`DisplayBuffer`] and sends one word per pixel.

use crate::buffer::DisplayBuffer;
use crate::colors::PackedGrb;
use crate::config::DISPLAY_COLOR;

/// Trait for abstracting the addressable-LED driver.
///
/// Pixels are addressed by transmission order only: the first word sent
/// lands on the first LED of the chain, and so on.
pub trait LedStrip {
    /// Sends one pixel downstream, blocking until the hardware takes it.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn transmit(&mut self, pixel: PackedGrb);
}

impl<S: LedStrip + ?Sized> LedStrip for &mut S {
    fn transmit(&mut self, pixel: PackedGrb) {
        (**self).transmit(pixel);
    }
}

/// Sends one full frame: `color` for lit cells, [`PackedGrb::OFF`] for the rest.
///
/// Always exactly one `transmit` per pixel, in index order.
pub fn render<S: LedStrip + ?Sized>(buffer: &DisplayBuffer, color: PackedGrb, strip: &mut S) {
    for &lit in buffer.cells() {
        strip.transmit(if lit { color } else { PackedGrb::OFF });
    }
}

/// A strip paired with the color it draws digits in.
pub struct FrameRenderer<S: LedStrip> {
    strip: S,
    color: PackedGrb,
}

impl<S: LedStrip> FrameRenderer<S> {
    /// Creates a renderer using the default display color.
    pub fn new(strip: S) -> Self {
        Self {
            strip,
            color: PackedGrb::from(DISPLAY_COLOR),
        }
    }

    /// Changes the color for lit pixels.
    pub fn set_color(&mut self, color: impl Into<PackedGrb>) {
        self.color = color.into();
    }

    /// Returns the color for lit pixels.
    pub fn color(&self) -> PackedGrb {
        self.color
    }

    /// Sends `buffer` to the strip.
    pub fn draw(&mut self, buffer: &DisplayBuffer) {
        render(buffer, self.color, &mut self.strip);
    }

    /// Returns a reference to the strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }
}
