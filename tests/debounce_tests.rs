//! Integration tests for button debouncing and digit selection

mod common;
use common::*;

use digit_matrix::{
    Button, DEBOUNCE_WINDOW_MS, Digit, DigitInput, EdgeDebouncer, EdgeOutcome, SharedBuffer,
    TimeDuration, pattern_for,
};

fn digit(value: u8) -> Digit {
    Digit::new(value).unwrap()
}

#[test]
fn edges_50ms_apart_count_once() {
    let shared = SharedBuffer::new();
    let timer = MockTimeSource::new();
    let mut input = DigitInput::<TestInstant>::new(&shared);

    assert!(input.handle_edge_now(Button::Increment, &timer).is_accepted());
    timer.advance(50);
    assert_eq!(
        input.handle_edge_now(Button::Increment, &timer),
        EdgeOutcome::Ignored
    );

    assert_eq!(input.digit(), digit(1));
}

#[test]
fn edges_250ms_apart_both_count() {
    let shared = SharedBuffer::new();
    let timer = MockTimeSource::new();
    let mut input = DigitInput::<TestInstant>::new(&shared);

    input.handle_edge_now(Button::Increment, &timer);
    timer.advance(250);
    input.handle_edge_now(Button::Increment, &timer);

    assert_eq!(input.digit(), digit(2));
    assert_eq!(shared.snapshot().cells(), pattern_for(digit(2)));
}

#[test]
fn bounce_train_counts_once_per_window() {
    let shared = SharedBuffer::new();
    let timer = MockTimeSource::new();
    let mut input = DigitInput::<TestInstant>::new(&shared);

    // 1 s of chatter every 10 ms: accepted at 0, 200, 400, 600, 800
    for _ in 0..100 {
        input.handle_edge_now(Button::Increment, &timer);
        timer.advance(10);
    }

    assert_eq!(input.digit(), digit(5));
}

#[test]
fn increment_saturates_at_nine() {
    let shared = SharedBuffer::new();
    let timer = MockTimeSource::new();
    let mut input = DigitInput::<TestInstant>::new(&shared);

    for _ in 0..15 {
        input.handle_edge_now(Button::Increment, &timer);
        timer.advance(DEBOUNCE_WINDOW_MS);
    }

    assert_eq!(input.digit(), Digit::MAX);
    assert_eq!(shared.snapshot().cells(), pattern_for(Digit::MAX));
}

#[test]
fn decrement_saturates_at_zero() {
    let shared = SharedBuffer::new();
    let timer = MockTimeSource::new();
    let mut input = DigitInput::<TestInstant>::new(&shared);

    for _ in 0..5 {
        assert_eq!(
            input.handle_edge_now(Button::Decrement, &timer),
            EdgeOutcome::Accepted(Digit::ZERO)
        );
        timer.advance(DEBOUNCE_WINDOW_MS);
    }

    assert_eq!(input.digit(), Digit::ZERO);
    assert_eq!(shared.snapshot().cells(), pattern_for(Digit::ZERO));
}

#[test]
fn buttons_have_independent_windows() {
    let shared = SharedBuffer::new();
    let timer = MockTimeSource::new();
    let mut input = DigitInput::<TestInstant>::new(&shared);

    input.handle_edge_now(Button::Increment, &timer);
    timer.advance(DEBOUNCE_WINDOW_MS);
    input.handle_edge_now(Button::Increment, &timer);
    assert_eq!(input.digit(), digit(2));

    // Decrement has never fired, so it is not held back by the increment
    timer.advance(5);
    assert_eq!(
        input.handle_edge_now(Button::Decrement, &timer),
        EdgeOutcome::Accepted(digit(1))
    );

    // Increment is still inside its own window
    assert_eq!(
        input.handle_edge_now(Button::Increment, &timer),
        EdgeOutcome::Ignored
    );
}

#[test]
fn simultaneous_edges_on_both_buttons_are_both_accepted() {
    let shared = SharedBuffer::new();
    let mut input = DigitInput::<TestInstant>::new(&shared);

    input.handle_edge(Button::Increment, TestInstant(1_000));
    input.handle_edge(Button::Increment, TestInstant(1_300));
    assert_eq!(input.digit(), digit(2));

    assert!(input.handle_edge(Button::Decrement, TestInstant(1_300)).is_accepted());
    assert!(input.handle_edge(Button::Increment, TestInstant(1_500)).is_accepted());
    assert_eq!(input.digit(), digit(2));
}

#[test]
fn clamped_accept_still_restarts_the_window() {
    let shared = SharedBuffer::new();
    let mut input = DigitInput::<TestInstant>::new(&shared);

    // At 0 already; accepted but no change
    assert!(input.handle_edge(Button::Decrement, TestInstant(0)).is_accepted());
    input.handle_edge(Button::Increment, TestInstant(0));

    // The clamped decrement still owns the window
    assert_eq!(
        input.handle_edge(Button::Decrement, TestInstant(150)),
        EdgeOutcome::Ignored
    );
    assert_eq!(input.digit(), digit(1));
}

#[test]
fn custom_debouncers_can_shorten_the_window() {
    let shared = SharedBuffer::new();
    let mut input = DigitInput::<TestInstant>::with_debouncers(
        &shared,
        EdgeDebouncer::with_window(TestDuration::from_millis(20)),
        EdgeDebouncer::new(),
    );

    input.handle_edge(Button::Increment, TestInstant(0));
    input.handle_edge(Button::Increment, TestInstant(20));
    assert_eq!(input.digit(), digit(2));

    input.handle_edge(Button::Decrement, TestInstant(40));
    input.handle_edge(Button::Decrement, TestInstant(60));
    assert_eq!(input.digit(), digit(1));
}

#[test]
fn end_to_end_increment_then_decrement() {
    let shared = SharedBuffer::new();
    let timer = MockTimeSource::new();
    let mut input = DigitInput::<TestInstant>::new(&shared);
    assert_eq!(shared.snapshot().cells(), pattern_for(digit(0)));

    input.handle_edge_now(Button::Increment, &timer);
    assert_eq!(shared.snapshot().cells(), pattern_for(digit(1)));

    timer.advance(DEBOUNCE_WINDOW_MS);
    input.handle_edge_now(Button::Decrement, &timer);
    assert_eq!(shared.snapshot().cells(), pattern_for(digit(0)));
}
