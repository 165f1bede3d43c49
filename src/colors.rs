//! Color packing for the addressable-LED wire format.
//!
//! The strip takes one 24-bit word per pixel with the channels in
//! green-red-blue order: green in bits 16..24, red in bits 8..16, blue in
//! bits 0..8. That order belongs to the LED protocol; keep it even though
//! it looks swapped next to ordinary RGB.

use palette::Srgb;

/// Color with every channel off.
pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// A pixel color packed as a 24-bit GRB word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedGrb(u32);

impl PackedGrb {
    /// Zero intensity on every channel.
    pub const OFF: PackedGrb = PackedGrb(0);

    /// Packs 8-bit channel values.
    #[inline]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        PackedGrb(((green as u32) << 16) | ((red as u32) << 8) | blue as u32)
    }

    /// Returns the raw 24-bit word.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `(red, green, blue)`.
    #[inline]
    pub const fn channels(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 8) & 0xFF) as u8,
            ((self.0 >> 16) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }
}

/// Quantizes a `0.0..=1.0` color to 8 bits per channel and packs it.
impl From<Srgb> for PackedGrb {
    fn from(color: Srgb) -> Self {
        let rgb8: Srgb<u8> = color.into_format();
        PackedGrb::from_rgb8(rgb8.red, rgb8.green, rgb8.blue)
    }
}
