//! rp-pico bindings for the collaborator traits of the library.

use bme680::{Bme680, PowerMode};
use i2c_pio::I2C;
use lcd1602_rs::LCD1602;
use pico_ticker::rendering::RowDisplay;
use pico_ticker::sensors::{Climate, ClimateSensor};
use rp_pico::hal::gpio::bank0::{Gpio0, Gpio1, Gpio11, Gpio2, Gpio3, Gpio4, Gpio5, Gpio8, Gpio9};
use rp_pico::hal::gpio::{FunctionNull, FunctionSio, Pin, PullDown, SioInput, SioOutput};
use rp_pico::hal::pio::SM0;
use rp_pico::hal::Timer;
use rp_pico::pac::PIO0;

type OutPin<G> = Pin<G, FunctionSio<SioOutput>, PullDown>;

pub type Lcd = LCD1602<
    OutPin<Gpio1>,
    OutPin<Gpio0>,
    OutPin<Gpio2>,
    OutPin<Gpio3>,
    OutPin<Gpio4>,
    OutPin<Gpio5>,
    Timer,
>;

pub type Bme<'a> = Bme680<
    I2C<'a, PIO0, SM0, Pin<Gpio8, FunctionNull, PullDown>, Pin<Gpio9, FunctionNull, PullDown>>,
    Timer,
>;

pub type Trigger = Pin<Gpio11, FunctionSio<SioInput>, PullDown>;

/// Milliseconds since boot, wrapping like Arduino's `millis()`
pub fn millis(timer: &Timer) -> u32 {
    (timer.get_counter().ticks() / 1000) as u32
}

/// BME680 in forced mode: every read triggers one measurement
pub struct ClimateProbe<'a> {
    bme: Bme<'a>,
    delay: Timer,
}

impl<'a> ClimateProbe<'a> {
    pub fn new(bme: Bme<'a>, delay: Timer) -> Self {
        Self { bme, delay }
    }
}

impl ClimateSensor for ClimateProbe<'_> {
    type Error = ();

    fn read(&mut self) -> Result<Climate, ()> {
        self.bme
            .set_sensor_mode(&mut self.delay, PowerMode::ForcedMode)
            .map_err(|_| ())?;
        let (data, _condition) = self.bme.get_sensor_data(&mut self.delay).map_err(|_| ())?;
        Ok(Climate {
            temperature_c: data.temperature_celsius(),
            humidity_pct: data.humidity_percent(),
        })
    }
}

/// LCD1602 driven byte by byte so ROM glyphs such as the degree sign pass through
pub struct Screen {
    lcd: Lcd,
}

impl Screen {
    pub fn new(lcd: Lcd) -> Self {
        Self { lcd }
    }
}

impl RowDisplay for Screen {
    type Error = ();

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), ()> {
        self.lcd.set_position(col, row).map_err(|_| ())
    }

    fn print(&mut self, text: &[u8]) -> Result<(), ()> {
        let mut glyph = [0u8; 4];
        for &byte in text {
            // the driver sends each char as `c as u8`, so Latin-1 maps 1:1 onto the ROM
            let ch = char::from(byte).encode_utf8(&mut glyph);
            self.lcd.print(ch).map_err(|_| ())?;
        }
        Ok(())
    }
}
