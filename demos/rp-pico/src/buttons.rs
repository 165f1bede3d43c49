//! Button lines and the interrupt-side digit handler.

use digit_matrix::{Button, DigitInput, EdgeOutcome, SharedBuffer, TimeSource};
use rp_pico::hal::gpio::{FunctionSioInput, Interrupt, Pin, PullUp, bank0};
use rtt_target::rprintln;

use crate::time::{HardwareTimer, Instant};

/// Increment button (GPIO5, active low).
pub type IncrementPin = Pin<bank0::Gpio5, FunctionSioInput, PullUp>;

/// Decrement button (GPIO6, active low).
pub type DecrementPin = Pin<bank0::Gpio6, FunctionSioInput, PullUp>;

/// Everything the GPIO bank interrupt needs.
///
/// The buttons pull the line low while held, so the rising edge fires on
/// release.
pub struct DigitButtons {
    increment: IncrementPin,
    decrement: DecrementPin,
    input: DigitInput<'static, Instant>,
    clock: HardwareTimer,
}

impl DigitButtons {
    /// Arms rising-edge interrupts on both lines and draws digit 0.
    pub fn new(
        increment: IncrementPin,
        decrement: DecrementPin,
        buffer: &'static SharedBuffer,
        clock: HardwareTimer,
    ) -> Self {
        increment.set_interrupt_enabled(Interrupt::EdgeHigh, true);
        decrement.set_interrupt_enabled(Interrupt::EdgeHigh, true);

        Self {
            increment,
            decrement,
            input: DigitInput::new(buffer),
            clock,
        }
    }

    /// Handles whichever lines have a pending edge. Call from `IO_IRQ_BANK0`.
    pub fn service(&mut self) {
        if self.increment.interrupt_status(Interrupt::EdgeHigh) {
            self.increment.clear_interrupt(Interrupt::EdgeHigh);
            self.dispatch(Button::Increment);
        }

        if self.decrement.interrupt_status(Interrupt::EdgeHigh) {
            self.decrement.clear_interrupt(Interrupt::EdgeHigh);
            self.dispatch(Button::Decrement);
        }
    }

    fn dispatch(&mut self, button: Button) {
        let now = self.clock.now();
        if let EdgeOutcome::Accepted(digit) = self.input.handle_edge(button, now) {
            rprintln!("{:?} -> {}", button, digit);
        }
    }
}
