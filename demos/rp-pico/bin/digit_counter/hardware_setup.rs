use rp_pico::hal::{
    Clock, Sio, Timer,
    clocks::init_clocks_and_plls,
    gpio::{FunctionPio0, FunctionSioOutput, Pin, PullDown, bank0},
    pac,
    pio::{PIO, PIOExt},
    watchdog::Watchdog,
};
use rtt_target::rprintln;

use rp_pico_board::buttons::{DecrementPin, IncrementPin};
use rp_pico_board::time::HardwareTimer;
use rp_pico_board::ws2812::Ws2812Pio;

/// Status LED type (red channel of the on-board RGB LED, GPIO13)
pub type StatusLed = Pin<bank0::Gpio13, FunctionSioOutput, PullDown>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub strip: Ws2812Pio,
    /// Keeps PIO0 owned for as long as the strip runs
    pub pio: PIO<pac::PIO0>,
    pub increment: IncrementPin,
    pub decrement: DecrementPin,
    pub status_led: StatusLed,
    pub timer: Timer,
    pub clock: HardwareTimer,
}

/// Initialize all hardware peripherals
///
/// - System clock configuration (125 MHz)
/// - WS2812 output on GPIO7 through PIO0
/// - Buttons on GPIO5 and GPIO6 with pull-ups
/// - Status LED on GPIO13
/// - 1 MHz hardware timer for debouncing and the loop delay
pub fn init_hardware() -> HardwareContext {
    let mut pac = pac::Peripherals::take().unwrap();

    let mut watchdog = Watchdog::new(pac.WATCHDOG);
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let system_clock_hz = clocks.system_clock.freq().to_Hz();
    rprintln!("System clock configured: {} Hz", system_clock_hz);

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let status_led: StatusLed = pins.gpio13.into_push_pull_output();
    rprintln!("Status LED configured on GPIO13");

    let increment: IncrementPin = pins.gpio5.into_pull_up_input();
    let decrement: DecrementPin = pins.gpio6.into_pull_up_input();
    rprintln!("Buttons configured on GPIO5 (+) and GPIO6 (-)");

    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let data_pin: Pin<bank0::Gpio7, FunctionPio0, PullDown> = pins.gpio7.into_function();
    let strip = Ws2812Pio::new(data_pin, &mut pio, sm0, system_clock_hz).unwrap();
    rprintln!("WS2812 matrix configured on GPIO7 (PIO0 SM0)");

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    HardwareContext {
        strip,
        pio,
        increment,
        decrement,
        status_led,
        timer,
        clock: HardwareTimer::new(timer),
    }
}
