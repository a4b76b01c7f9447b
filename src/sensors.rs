/// One climate sample.
/// temperature_c: Air temperature in Celsius
/// humidity_pct: Relative humidity in percent
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Climate {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

impl Climate {
    /// Apparent temperature in Celsius for this sample
    pub fn heat_index_c(&self) -> f32 {
        heat_index_c(self.temperature_c, self.humidity_pct)
    }
}

/// Anything that can produce a Climate sample on demand
pub trait ClimateSensor {
    type Error;

    /// Takes a fresh reading
    fn read(&mut self) -> Result<Climate, Self::Error>;
}

/// Converts Celsius to Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * (9. / 5.) + 32.
}

/// Converts Fahrenheit to Celsius
pub fn fahrenheit_to_celsius(fahrenheit: f32) -> f32 {
    (fahrenheit - 32.) * (5. / 9.)
}

/// Computes the heat index (apparent temperature)
/// Uses Steadman's simple estimate, switching to the Rothfusz regression
/// with the NWS humidity adjustments once the estimate exceeds 79F
/// param temperature_c: Air temperature in Celsius
/// param humidity_pct: Relative humidity percentage
/// returns the heat index in Celsius
pub fn heat_index_c(temperature_c: f32, humidity_pct: f32) -> f32 {
    let t = celsius_to_fahrenheit(temperature_c);
    let rh = humidity_pct;

    let mut hi = 0.5 * (t + 61.0 + ((t - 68.0) * 1.2) + (rh * 0.094));

    if hi > 79.0 {
        hi = -42.379 + 2.049_015_2 * t + 10.143_331 * rh
            - 0.224_755_41 * t * rh
            - 0.006_837_83 * t * t
            - 0.054_817_17 * rh * rh
            + 0.001_228_74 * t * t * rh
            + 0.000_852_82 * t * rh * rh
            - 0.000_001_99 * t * t * rh * rh;

        if rh < 13.0 && (80.0..=112.0).contains(&t) {
            hi -= ((13.0 - rh) * 0.25) * sqrt((17.0 - abs(t - 95.0)) * 0.058_82);
        } else if rh > 85.0 && (80.0..=87.0).contains(&t) {
            hi += ((rh - 85.0) * 0.1) * ((87.0 - t) * 0.2);
        }
    }

    fahrenheit_to_celsius(hi)
}

fn abs(value: f32) -> f32 {
    if value < 0.0 {
        -value
    } else {
        value
    }
}

// core has no float sqrt; a few Newton steps are plenty for one decimal of output
fn sqrt(value: f32) -> f32 {
    if value <= 0.0 {
        return 0.0;
    }
    let mut guess = if value > 1.0 { value / 2.0 } else { 1.0 };
    for _ in 0..8 {
        guess = 0.5 * (guess + value / guess);
    }
    guess
}
