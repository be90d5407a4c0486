#![cfg_attr(not(test), no_std)]

pub mod history;
pub mod temperature;

pub use history::TemperatureHistory;
pub use temperature::{Temperature, TemperatureError, TemperatureUnit};
