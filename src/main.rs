#![no_std]
#![no_main]

use bme680::{Bme680, I2CAddress, IIRFilterSize, OversamplingSetting, PowerMode, SettingsBuilder};
use bsp::entry;
use defmt::*;
use defmt_rtt as _;
use i2c_pio::I2C;
use lcd1602_rs::LCD1602;
use panic_probe as _;
use rp_pico::hal::Timer;

// Provide an alias for our BSP so we can switch targets quickly.
use rp_pico as bsp;

use bsp::hal::{
    clocks::{init_clocks_and_plls, Clock},
    pac,
    watchdog::Watchdog,
};
use pico_ticker::config::SENSOR_I2C_KHZ;
use pico_ticker::random::XorShift32;
use pico_ticker::texts::TEXTS;
use pico_ticker::{Devices, Outcome, Ticker};
use rp_pico::hal;
use rp_pico::hal::fugit::RateExtU32;
use rp_pico::hal::pio::PIOExt;
use rp_pico::hal::rosc::RingOscillator;

mod board;

use board::{ClimateProbe, Screen};

#[entry]
fn main() -> ! {
    info!("pico-ticker starting");
    // Grab our singleton objects
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure the clocks
    //
    // The default is to generate a 125 MHz system clock
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

    // The single-cycle I/O block controls our GPIO pins
    let sio = hal::Sio::new(pac.SIO);

    // Set the pins up according to their function on this particular board
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let mut delay = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // Seed message selection from ring oscillator jitter
    let rosc = RingOscillator::new(pac.ROSC).initialize();
    let rng = XorShift32::from_bits(|| rosc.get_random_bit());

    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);

    let i2c_pio = I2C::new(
        &mut pio,
        pins.gpio8,
        pins.gpio9,
        sm0,
        SENSOR_I2C_KHZ.kHz(),
        clocks.system_clock.freq(),
    );

    // Set up BME680
    let mut bme = Bme680::init(i2c_pio, &mut delay, I2CAddress::Secondary).unwrap();
    let settings = SettingsBuilder::new()
        .with_humidity_oversampling(OversamplingSetting::OS2x)
        .with_temperature_oversampling(OversamplingSetting::OS8x)
        .with_temperature_filter(IIRFilterSize::Size3)
        .with_run_gas(false)
        .build();

    bme.set_sensor_settings(&mut delay, settings).unwrap();

    bme.set_sensor_mode(&mut delay, PowerMode::ForcedMode)
        .unwrap();

    // Set up LCD1602
    let lcd = LCD1602::new(
        pins.gpio1.into_function(),
        pins.gpio0.into_function(),
        pins.gpio2.into_function(),
        pins.gpio3.into_function(),
        pins.gpio4.into_function(),
        pins.gpio5.into_function(),
        delay,
    )
    .unwrap();

    // Set up trigger
    let trigger = pins.gpio11.into_pull_down_input();

    let mut devices = Devices {
        trigger,
        sensor: ClimateProbe::new(bme, delay),
        display: Screen::new(lcd),
        rng,
    };
    let mut ticker = Ticker::new();

    info!("pico-ticker ready");

    loop {
        let now = board::millis(&delay);
        match ticker.poll(now, &mut devices, TEXTS) {
            Ok(Outcome::Idle) => {}
            Ok(outcome) => debug!("{}: {}", now, outcome),
            Err(error) => warn!("{}: iteration failed: {}", now, error),
        }
    }
}
