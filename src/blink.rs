//! Status LED blinker.

use embedded_hal::digital::{OutputPin, PinState};

/// Toggles a status output once per [`tick`](Blinker::tick).
///
/// The blink period follows from how often `tick` is called; the main loop
/// calls it once per iteration.
pub struct Blinker<P: OutputPin> {
    pin: P,
    lit: bool,
}

impl<P: OutputPin> Blinker<P> {
    /// Takes the pin and drives it low.
    pub fn new(mut pin: P) -> Self {
        let _ = pin.set_low();
        Self { pin, lit: false }
    }

    /// Flips the state, drives the pin to match and returns the new state.
    pub fn tick(&mut self) -> bool {
        self.lit = !self.lit;
        // A status LED has nobody to report a failed write to.
        let _ = self.pin.set_state(PinState::from(self.lit));
        self.lit
    }

    /// Returns the current state.
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Returns a reference to the pin.
    pub fn pin(&self) -> &P {
        &self.pin
    }
}
