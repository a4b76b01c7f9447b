//! Loop state and the per-iteration step.
//!
//! The firmware polls [`Ticker::poll`] from a busy loop. All state that
//! survives between iterations (mode, refresh timers, last message shown)
//! lives in [`Ticker`]; the hardware is borrowed per call through [`Devices`].

use embedded_hal::digital::InputPin;

use crate::config::{SENSOR_DISPLAY_INTERVAL_MS, TEXT_DISPLAY_INTERVAL_MS};
use crate::error::{Error, Result};
use crate::logging::{debug, trace, warn};
use crate::random::IndexSource;
use crate::rendering::{print_rows, sensor_rows, text_rows, RowDisplay};
use crate::sensors::{Climate, ClimateSensor};
use crate::texts::stage_message;
use crate::timer::IntervalTimer;

/// What the LCD is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Temperature, heat index and humidity.
    Sensor,
    /// A randomly chosen stored message.
    Text,
}

/// Result of one iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Nothing was due.
    Idle,
    /// The trigger flipped the mode; nothing was drawn.
    ModeChanged(Mode),
    /// A fresh reading was drawn.
    SensorShown(Climate),
    /// The message at this index was drawn.
    TextShown(usize),
}

/// Peripherals the loop talks to.
pub struct Devices<P, S, D, R> {
    /// High selects text mode, low selects sensor mode.
    pub trigger: P,
    pub sensor: S,
    pub display: D,
    pub rng: R,
}

/// Mode, refresh timers and the previously shown message.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ticker {
    mode: Mode,
    sensor_timer: IntervalTimer,
    text_timer: IntervalTimer,
    previous_text: Option<usize>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker {
    /// Starts in sensor mode with both timers marked at t = 0.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Sensor,
            sensor_timer: IntervalTimer::new(SENSOR_DISPLAY_INTERVAL_MS),
            text_timer: IntervalTimer::new(TEXT_DISPLAY_INTERVAL_MS),
            previous_text: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn previous_text(&self) -> Option<usize> {
        self.previous_text
    }

    /// Runs one loop iteration at `now_ms`.
    ///
    /// The trigger is checked before any timer, so a mode change is never
    /// delayed by a pending refresh. Timers are only restarted after a
    /// refresh made it to the display; on error the refresh is retried on
    /// the next call.
    pub fn poll<P, S, D, R>(
        &mut self,
        now_ms: u32,
        devices: &mut Devices<P, S, D, R>,
        messages: &[&str],
    ) -> Result<Outcome>
    where
        P: InputPin,
        S: ClimateSensor,
        D: RowDisplay,
        R: IndexSource,
    {
        match self.mode {
            Mode::Sensor => self.poll_sensor(now_ms, devices),
            Mode::Text => self.poll_text(now_ms, devices, messages),
        }
    }

    fn switch_to(&mut self, mode: Mode) -> Outcome {
        debug!("mode -> {}", mode);
        self.mode = mode;
        Outcome::ModeChanged(mode)
    }

    fn poll_sensor<P, S, D, R>(
        &mut self,
        now_ms: u32,
        devices: &mut Devices<P, S, D, R>,
    ) -> Result<Outcome>
    where
        P: InputPin,
        S: ClimateSensor,
        D: RowDisplay,
    {
        if devices.trigger.is_high().map_err(|_| Error::Trigger)? {
            return Ok(self.switch_to(Mode::Text));
        }
        if !self.sensor_timer.is_due(now_ms) {
            return Ok(Outcome::Idle);
        }

        let climate = devices.sensor.read().map_err(|_| {
            warn!("climate sensor read failed");
            Error::Sensor
        })?;
        let (row1, row2) = sensor_rows(&climate);
        print_rows(&mut devices.display, &row1, &row2)?;

        self.sensor_timer.mark(now_ms);
        Ok(Outcome::SensorShown(climate))
    }

    fn poll_text<P, S, D, R>(
        &mut self,
        now_ms: u32,
        devices: &mut Devices<P, S, D, R>,
        messages: &[&str],
    ) -> Result<Outcome>
    where
        P: InputPin,
        D: RowDisplay,
        R: IndexSource,
    {
        if devices.trigger.is_low().map_err(|_| Error::Trigger)? {
            return Ok(self.switch_to(Mode::Sensor));
        }
        if !self.text_timer.is_due(now_ms) {
            return Ok(Outcome::Idle);
        }

        let Some(index) = self.pick_message(&mut devices.rng, messages.len()) else {
            return Ok(Outcome::Idle);
        };
        // an index source outside [0, len) draws nothing rather than panicking
        let Some(text) = messages.get(index) else {
            warn!("message index {} out of range", index);
            return Ok(Outcome::Idle);
        };
        self.previous_text = Some(index);

        let staged = stage_message(text);
        let (row1, row2) = text_rows(&staged);
        print_rows(&mut devices.display, &row1, &row2)?;

        self.text_timer.mark(now_ms);
        Ok(Outcome::TextShown(index))
    }

    /// Draws indices until one differs from the last message shown.
    /// With a single message the repeat is accepted.
    fn pick_message<R: IndexSource>(&self, rng: &mut R, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        loop {
            let index = rng.next_index(count);
            if count == 1 || Some(index) != self.previous_text {
                trace!("picked message {}", index);
                return Some(index);
            }
        }
    }
}
