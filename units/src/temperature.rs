use core::cmp::Ordering;

/// Offset between the Celsius and the Kelvin scale.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Lower physical bound for a temperature, in Celsius. The bound is strict:
/// absolute zero itself is not a valid value.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureError {
    BelowAbsoluteZero,
}

#[derive(Clone, Copy, Debug)]
pub struct Temperature {
    // unit: C (celsius)
    value: f64,
}

impl Temperature {
    pub fn from_unit(value: f64, unit: TemperatureUnit) -> Result<Self, TemperatureError> {
        match unit {
            TemperatureUnit::Celsius => Self::from_celsius(value),
            TemperatureUnit::Kelvin => Self::from_kelvin(value),
            TemperatureUnit::Fahrenheit => Self::from_fahrenheit(value),
        }
    }

    pub fn from_celsius(value: f64) -> Result<Self, TemperatureError> {
        // NaN fails the comparison and is rejected together with out of range values,
        // so a constructed temperature is never NaN
        if value > ABSOLUTE_ZERO_CELSIUS {
            Ok(Self { value })
        } else {
            Err(TemperatureError::BelowAbsoluteZero)
        }
    }

    pub fn from_kelvin(value: f64) -> Result<Self, TemperatureError> {
        Self::from_celsius(kelvin_to_celsius(value))
    }

    pub fn from_fahrenheit(value: f64) -> Result<Self, TemperatureError> {
        Self::from_celsius(fahrenheit_to_celsius(value))
    }

    pub fn to_celsius(&self) -> f64 {
        self.value
    }

    pub fn to_kelvin(&self) -> f64 {
        celsius_to_kelvin(self.value)
    }

    pub fn to_fahrenheit(&self) -> f64 {
        celsius_to_fahrenheit(self.value)
    }
}

// comparisons go through total_cmp so that equality and ordering agree
// on every representable value, -0.0 included
impl PartialEq for Temperature {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Temperature {}

impl PartialOrd for Temperature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Temperature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl core::fmt::Display for Temperature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} °C", self.value)
    }
}

#[cfg(feature = "defmt-log")]
impl defmt::Format for Temperature {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} °C", self.to_celsius())
    }
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) / 1.8
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}
