//! PIO-driven WS2812 output.
//!
//! One PIO state machine shifts 24-bit GRB words out MSB first at 800 kHz.
//! Each bit takes ten PIO cycles: a 3-cycle low tail, a 2-cycle high start,
//! and 5 cycles that stay high for a one and go low for a zero.

use digit_matrix::{LedStrip, PackedGrb};
use rp_pico::hal::gpio::{FunctionPio0, Pin, PinId, PullDown};
use rp_pico::hal::pac::PIO0;
use rp_pico::hal::pio::{
    Buffers, InstallError, PIO, PIOBuilder, PinDir, SM0, ShiftDirection, Tx, UninitStateMachine,
};

/// WS2812 bit rate.
pub const BIT_RATE_HZ: u32 = 800_000;

const T1: u8 = 2;
const T2: u8 = 5;
const T3: u8 = 3;
const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;

/// A WS2812 chain on PIO0, state machine 0.
pub struct Ws2812Pio {
    tx: Tx<(PIO0, SM0)>,
}

impl Ws2812Pio {
    /// Installs the bit-banging program and starts the state machine.
    ///
    /// # Errors
    /// Returns `InstallError` if PIO0 has no room left for the program.
    pub fn new<I: PinId>(
        pin: Pin<I, FunctionPio0, PullDown>,
        pio: &mut PIO<PIO0>,
        sm: UninitStateMachine<(PIO0, SM0)>,
        system_clock_hz: u32,
    ) -> Result<Self, InstallError> {
        let side_set = pio::SideSet::new(false, 1, false);
        let mut a = pio::Assembler::new_with_side_set(side_set);
        let mut wrap_target = a.label();
        let mut wrap_source = a.label();
        let mut do_zero = a.label();
        a.bind(&mut wrap_target);
        a.out_with_delay_and_side_set(pio::OutDestination::X, 1, T3 - 1, 0);
        a.jmp_with_delay_and_side_set(pio::JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
        a.jmp_with_delay_and_side_set(pio::JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
        a.bind(&mut do_zero);
        a.nop_with_delay_and_side_set(T2 - 1, 0);
        a.bind(&mut wrap_source);
        let program = a.assemble_with_wrap(wrap_source, wrap_target);

        let installed = pio.install(&program)?;

        let (int, frac) = clock_divisor(system_clock_hz);
        let pin_num = pin.id().num;
        let (mut sm, _, tx) = PIOBuilder::from_installed_program(installed)
            .buffers(Buffers::OnlyTx)
            .side_set_pin_base(pin_num)
            .out_shift_direction(ShiftDirection::Left)
            .autopull(true)
            .pull_threshold(24)
            .clock_divisor_fixed_point(int, frac)
            .build(sm);
        sm.set_pindirs([(pin_num, PinDir::Output)]);
        sm.start();

        Ok(Self { tx })
    }
}

impl LedStrip for Ws2812Pio {
    fn transmit(&mut self, pixel: PackedGrb) {
        // The state machine shifts left and pulls 24 bits, so the word goes in the top bytes
        while !self.tx.write(pixel.bits() << 8) {
            core::hint::spin_loop();
        }
    }
}

/// Splits `system_clock_hz / (BIT_RATE_HZ * CYCLES_PER_BIT)` into the
/// 16.8 fixed-point divider the PIO expects.
fn clock_divisor(system_clock_hz: u32) -> (u16, u8) {
    let cycle_hz = BIT_RATE_HZ * CYCLES_PER_BIT;
    let int = system_clock_hz / cycle_hz;
    let rem = system_clock_hz - int * cycle_hz;
    let frac = (rem * 256) / cycle_hz;
    (int as u16, frac as u8)
}
