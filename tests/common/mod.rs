//! Shared test infrastructure for digit-matrix integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::convert::Infallible;

use digit_matrix::{LedStrip, PackedGrb, TimeDuration, TimeInstant, TimeSource, PIXEL_COUNT};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }

    pub fn now_millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock LED Strip
// ============================================================================

/// Mock strip that records every transmitted word
pub struct MockStrip {
    sent: heapless::Vec<PackedGrb, 256>,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            sent: heapless::Vec::new(),
        }
    }

    pub fn sent(&self) -> &[PackedGrb] {
        &self.sent
    }

    /// The `n`th full frame, if that many were sent
    pub fn frame(&self, n: usize) -> Option<&[PackedGrb]> {
        self.sent.get(n * PIXEL_COUNT..(n + 1) * PIXEL_COUNT)
    }

    pub fn clear(&mut self) {
        self.sent.clear();
    }
}

impl LedStrip for MockStrip {
    fn transmit(&mut self, pixel: PackedGrb) {
        let _ = self.sent.push(pixel);
    }
}

// ============================================================================
// Mock Status Pin
// ============================================================================

/// Mock output pin that records every level it is driven to
pub struct MockPin {
    levels: heapless::Vec<bool, 64>,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            levels: heapless::Vec::new(),
        }
    }

    pub fn levels(&self) -> &[bool] {
        &self.levels
    }

    pub fn is_high(&self) -> bool {
        self.levels.last().copied().unwrap_or(false)
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let _ = self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let _ = self.levels.push(true);
        Ok(())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay that records sleeps and moves the mock clock forward
pub struct MockDelay<'t> {
    clock: &'t MockTimeSource,
    total_ns: u64,
    calls: usize,
}

impl<'t> MockDelay<'t> {
    pub fn new(clock: &'t MockTimeSource) -> Self {
        Self {
            clock,
            total_ns: 0,
            calls: 0,
        }
    }

    pub fn total_millis(&self) -> u64 {
        self.total_ns / 1_000_000
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
        self.clock.advance(u64::from(ns) / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += u64::from(ms) * 1_000_000;
        self.calls += 1;
        self.clock.advance(u64::from(ms));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Expected frame for a glyph drawn in `color`
pub fn expected_frame(glyph: &[bool], color: PackedGrb) -> heapless::Vec<PackedGrb, PIXEL_COUNT> {
    glyph
        .iter()
        .map(|&lit| if lit { color } else { PackedGrb::OFF })
        .collect()
}
