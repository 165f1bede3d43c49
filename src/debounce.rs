//! Edge debouncing and the digit input handler.
//!
//! Debouncing here is a time gate, not a level latch: every rising edge is
//! either accepted or dropped depending on how long ago the same button last
//! had an edge accepted. There is no "settled" state to track.

use crate::buffer::SharedBuffer;
use crate::config::DEBOUNCE_WINDOW_MS;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{Button, Digit};

/// Accept/reject gate for the edges of one button.
#[derive(Debug, Clone, Copy)]
pub struct EdgeDebouncer<I: TimeInstant> {
    last_accepted: Option<I>,
    window_ms: u64,
}

impl<I: TimeInstant> EdgeDebouncer<I> {
    /// Creates a debouncer with the default 200 ms window.
    pub fn new() -> Self {
        Self::with_window(I::Duration::from_millis(DEBOUNCE_WINDOW_MS))
    }

    /// Creates a debouncer with a custom window.
    pub fn with_window(window: I::Duration) -> Self {
        Self {
            last_accepted: None,
            window_ms: window.as_millis(),
        }
    }

    /// Decides whether an edge at `now` counts.
    ///
    /// The first edge always counts. Later edges count once at least one
    /// window has passed since the previous accepted edge. Accepting records
    /// `now`; rejecting changes nothing.
    pub fn accept(&mut self, now: I) -> bool {
        if let Some(last) = self.last_accepted {
            if now.duration_since(last).as_millis() < self.window_ms {
                return false;
            }
        }

        self.last_accepted = Some(now);
        true
    }

    /// Instant of the most recent accepted edge.
    pub fn last_accepted(&self) -> Option<I> {
        self.last_accepted
    }
}

impl<I: TimeInstant> Default for EdgeDebouncer<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of feeding one edge to [`DigitInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Edge counted; the buffer now shows this digit.
    Accepted(Digit),

    /// Edge arrived inside the debounce window and was dropped.
    Ignored,
}

impl EdgeOutcome {
    /// Returns true if the edge was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, EdgeOutcome::Accepted(_))
    }
}

/// Owns the selected digit and reacts to button edges.
///
/// This is the interrupt-side state of the firmware. `handle_edge` takes
/// `&mut self`, so a second entry while one is still running cannot happen;
/// on the board the value lives in a `critical_section::Mutex<RefCell<_>>`
/// that only the GPIO interrupt borrows.
pub struct DigitInput<'b, I: TimeInstant> {
    digit: Digit,
    increment: EdgeDebouncer<I>,
    decrement: EdgeDebouncer<I>,
    buffer: &'b SharedBuffer,
}

impl<'b, I: TimeInstant> DigitInput<'b, I> {
    /// Starts at digit 0 and draws it into `buffer`.
    pub fn new(buffer: &'b SharedBuffer) -> Self {
        Self::with_debouncers(buffer, EdgeDebouncer::new(), EdgeDebouncer::new())
    }

    /// Like [`new`](Self::new), with caller-supplied debouncers.
    pub fn with_debouncers(
        buffer: &'b SharedBuffer,
        increment: EdgeDebouncer<I>,
        decrement: EdgeDebouncer<I>,
    ) -> Self {
        buffer.update(Digit::ZERO);

        Self {
            digit: Digit::ZERO,
            increment,
            decrement,
            buffer,
        }
    }

    /// Handles one rising edge of `button` observed at `now`.
    ///
    /// An accepted edge always refreshes the buffer and restarts that
    /// button's window, even when the digit is already at its limit.
    pub fn handle_edge(&mut self, button: Button, now: I) -> EdgeOutcome {
        let debouncer = match button {
            Button::Increment => &mut self.increment,
            Button::Decrement => &mut self.decrement,
        };

        if !debouncer.accept(now) {
            return EdgeOutcome::Ignored;
        }

        self.digit = button.apply(self.digit);
        self.buffer.update(self.digit);

        #[cfg(feature = "defmt")]
        defmt::debug!("{} accepted, digit = {}", button, self.digit);

        EdgeOutcome::Accepted(self.digit)
    }

    /// Samples `clock` and handles the edge.
    pub fn handle_edge_now<T: TimeSource<I>>(
        &mut self,
        button: Button,
        clock: &T,
    ) -> EdgeOutcome {
        self.handle_edge(button, clock.now())
    }

    /// Returns the selected digit.
    pub fn digit(&self) -> Digit {
        self.digit
    }
}
