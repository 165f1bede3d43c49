#![no_std]
#![no_main]

use core::cell::RefCell;

use critical_section::Mutex;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::pac::{self, interrupt};
use rtt_target::{rprintln, rtt_init_print};

use digit_matrix::{DisplayLoop, SharedBuffer};
use rp_pico_board::buttons::DigitButtons;

mod hardware_setup;

/// Frame shown on the matrix; written by the button interrupt, read by the main loop
static DISPLAY: SharedBuffer = SharedBuffer::new();

/// Interrupt-side state, handed over once hardware is up
static BUTTONS: Mutex<RefCell<Option<DigitButtons>>> = Mutex::new(RefCell::new(None));

/// GPIO bank interrupt - fires on button release
#[interrupt]
fn IO_IRQ_BANK0() {
    critical_section::with(|cs| {
        if let Some(buttons) = BUTTONS.borrow_ref_mut(cs).as_mut() {
            buttons.service();
        }
    });
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== 5x5 Digit Matrix ===");
    rprintln!("Starting initialization...");

    let hw = hardware_setup::init_hardware();
    rprintln!("Hardware initialized successfully");

    let buttons = DigitButtons::new(hw.increment, hw.decrement, &DISPLAY, hw.clock);
    critical_section::with(|cs| BUTTONS.borrow(cs).replace(Some(buttons)));

    // SAFETY: the handler only touches state guarded by `BUTTONS`, which is initialized above
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    rprintln!("=== System Ready ===");
    rprintln!("GPIO5: digit up, GPIO6: digit down");

    // Keep PIO0 alive for the whole run
    let _pio = hw.pio;

    let mut display = DisplayLoop::new(&DISPLAY, hw.strip, hw.status_led, hw.timer);
    display.run()
}
