//! Defines the forecast model every driver produces: a [`Forecast`] owns its
//! [`ForecastDay`]s, each of which owns its [`ForecastHour`]s.
//!
//! Numeric fields are never left unset. When the provider omits a value, or
//! sends one that cannot be converted, the field holds [`MISSING_INT`] or
//! [`MISSING_FLOAT`]; use [`Sentinel::is_missing`] to tell them apart from
//! real readings.

use crate::types::weather_condition::{describe_weather, WeatherCondition};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Value of an integer field whose reading is absent or unparsable.
pub const MISSING_INT: i32 = i32::MIN;

/// Value of a floating point field whose reading is absent or unparsable.
pub const MISSING_FLOAT: f64 = f64::MIN;

/// Distinguishes the missing-value sentinels from real readings.
pub trait Sentinel: Copy {
    fn is_missing(self) -> bool;

    /// `None` for the sentinel, `Some(value)` otherwise.
    fn reading(self) -> Option<Self> {
        (!self.is_missing()).then_some(self)
    }
}

impl Sentinel for i32 {
    fn is_missing(self) -> bool {
        self == MISSING_INT
    }
}

impl Sentinel for f64 {
    fn is_missing(self) -> bool {
        self == MISSING_FLOAT
    }
}

/// Forecast for a single time slot of a day.
///
/// For the first two days the slots are one hour apart; further out the
/// provider samples every three hours, so a slot may span more than an hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastHour {
    /// Start of the slot, local wall-clock time.
    pub timestamp: NaiveDateTime,
    /// Weather condition code, see [`WeatherCondition`]. `MISSING_INT` if absent.
    pub weather: i32,
    /// Temperature in °C. `MISSING_INT` if absent.
    pub temp: i32,
    /// Wind speed in km/h. `MISSING_INT` if absent.
    pub wind_speed: i32,
    /// Wind direction: a cardinal point or a combination of two (`"N"`, `"SO"`).
    pub wind_dir: Option<String>,
    /// Rain in mm. `MISSING_FLOAT` if absent.
    pub rain: f64,
    /// Relative humidity in percent. `MISSING_INT` if absent.
    pub humidity: i32,
    /// Pressure in mb. `MISSING_INT` if absent.
    pub pressure: i32,
}

impl ForecastHour {
    /// Creates a slot at `timestamp` with every reading missing.
    pub fn new(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            weather: MISSING_INT,
            temp: MISSING_INT,
            wind_speed: MISSING_INT,
            wind_dir: None,
            rain: MISSING_FLOAT,
            humidity: MISSING_INT,
            pressure: MISSING_INT,
        }
    }

    pub fn condition(&self) -> Option<WeatherCondition> {
        WeatherCondition::from_code(self.weather)
    }

    pub fn weather_description(&self) -> &'static str {
        describe_weather(self.weather)
    }
}

/// Daily summary plus the time slots that make up the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    /// Local calendar date of the forecast.
    pub date: NaiveDate,
    /// Weather condition code, see [`WeatherCondition`]. `MISSING_INT` if absent.
    pub weather: i32,
    /// Minimum temperature in °C. `MISSING_INT` if absent.
    pub temp_min: i32,
    /// Maximum temperature in °C. `MISSING_INT` if absent.
    pub temp_max: i32,
    /// Wind speed in km/h. `MISSING_INT` if absent.
    pub wind_speed: i32,
    /// Rain in mm. `MISSING_FLOAT` if absent.
    pub rain: f64,
    /// Relative humidity in percent. `MISSING_INT` if absent.
    pub humidity: i32,
    /// Pressure in mb. `MISSING_INT` if absent.
    pub pressure: i32,
    /// Time slots in chronological order. Empty when only the summary is known.
    pub hours: Vec<ForecastHour>,
}

impl ForecastDay {
    /// Creates a day with every reading missing and no time slots.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weather: MISSING_INT,
            temp_min: MISSING_INT,
            temp_max: MISSING_INT,
            wind_speed: MISSING_INT,
            rain: MISSING_FLOAT,
            humidity: MISSING_INT,
            pressure: MISSING_INT,
            hours: Vec::new(),
        }
    }

    pub fn condition(&self) -> Option<WeatherCondition> {
        WeatherCondition::from_code(self.weather)
    }

    pub fn weather_description(&self) -> &'static str {
        describe_weather(self.weather)
    }
}

/// Forecast for one location: days in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Forecast {
    pub days: Vec<ForecastDay>,
}

impl Forecast {
    pub fn new() -> Self {
        Self::default()
    }

    /// The forecast for `date`, if it is covered.
    pub fn day(&self, date: NaiveDate) -> Option<&ForecastDay> {
        self.days.iter().find(|day| day.date == date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
