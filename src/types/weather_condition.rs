//! Defines the `WeatherCondition` enum, mapping Tiempo's numeric `symbol` codes
//! to descriptive variants.

use serde::Serialize;
use std::fmt;

/// Represents the weather condition code reported by Tiempo in the `symbol`
/// element of every day and hour.
///
/// Codes combine a sky state (clear, scattered clouds, cloudy, overcast) with an
/// optional precipitation type. Code `0` and anything above `22` are undefined;
/// [`WeatherCondition::from_code`] returns `None` for them and
/// [`describe_weather`] falls back to `"Unknown"`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum WeatherCondition {
    /// Code 1: Clear skies.
    Clear = 1,
    /// Code 2: Scattered clouds.
    ScatteredClouds = 2,
    /// Code 3: At least half of the sky covered, more clouds than sunshine.
    Cloudy = 3,
    /// Code 4: Dull, grey sky with clouds covering the whole area.
    Overcast = 4,
    /// Code 5: Scattered clouds and light rain.
    ScatteredCloudsLightRain = 5,
    /// Code 6: Cloudy sky and light rain.
    CloudyLightRain = 6,
    /// Code 7: Overcast sky and light rain.
    OvercastLightRain = 7,
    /// Code 8: Scattered clouds and moderate rain.
    ScatteredCloudsModerateRain = 8,
    /// Code 9: Cloudy sky and moderate rain.
    CloudyModerateRain = 9,
    /// Code 10: Overcast sky and moderate rain.
    OvercastModerateRain = 10,
    /// Code 11: Scattered clouds and thunderstorm.
    ScatteredCloudsThunderstorm = 11,
    /// Code 12: Cloudy sky and thunderstorm.
    CloudyThunderstorm = 12,
    /// Code 13: Overcast sky and thunderstorm.
    OvercastThunderstorm = 13,
    /// Code 14: Scattered clouds with thunderstorms and hail.
    ScatteredCloudsThunderstormHail = 14,
    /// Code 15: Cloudy sky with thunderstorms and hail.
    CloudyThunderstormHail = 15,
    /// Code 16: Overcast sky with thunderstorms and hail.
    OvercastThunderstormHail = 16,
    /// Code 17: Scattered clouds with snow.
    ScatteredCloudsSnow = 17,
    /// Code 18: Cloudy sky with snow.
    CloudySnow = 18,
    /// Code 19: Overcast sky with snow.
    OvercastSnow = 19,
    /// Code 20: Scattered clouds with sleet.
    ScatteredCloudsSleet = 20,
    /// Code 21: Cloudy sky with sleet.
    CloudySleet = 21,
    /// Code 22: Overcast sky with sleet.
    OvercastSleet = 22,
}

impl WeatherCondition {
    /// Attempts to convert a Tiempo `symbol` code into a `WeatherCondition` variant.
    ///
    /// # Returns
    ///
    /// * `Some(WeatherCondition)` if `code` is a known condition (1-22).
    /// * `None` for undefined codes, including `0` and the missing-value sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libweather::WeatherCondition;
    ///
    /// assert_eq!(WeatherCondition::from_code(6), Some(WeatherCondition::CloudyLightRain));
    /// assert_eq!(WeatherCondition::from_code(0), None);
    /// assert_eq!(WeatherCondition::from_code(99), None);
    /// ```
    pub fn from_code(code: i32) -> Option<Self> {
        use WeatherCondition::*;
        let condition = match code {
            1 => Clear,
            2 => ScatteredClouds,
            3 => Cloudy,
            4 => Overcast,
            5 => ScatteredCloudsLightRain,
            6 => CloudyLightRain,
            7 => OvercastLightRain,
            8 => ScatteredCloudsModerateRain,
            9 => CloudyModerateRain,
            10 => OvercastModerateRain,
            11 => ScatteredCloudsThunderstorm,
            12 => CloudyThunderstorm,
            13 => OvercastThunderstorm,
            14 => ScatteredCloudsThunderstormHail,
            15 => CloudyThunderstormHail,
            16 => OvercastThunderstormHail,
            17 => ScatteredCloudsSnow,
            18 => CloudySnow,
            19 => OvercastSnow,
            20 => ScatteredCloudsSleet,
            21 => CloudySleet,
            22 => OvercastSleet,
            _ => return None,
        };
        Some(condition)
    }

    /// The numeric code of this condition.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// A human-readable description, e.g. `"Cloudy with light rain"`.
    pub fn description(self) -> &'static str {
        use WeatherCondition::*;
        match self {
            Clear => "Clear",
            ScatteredClouds => "Scattered clouds",
            Cloudy => "Cloudy",
            Overcast => "Overcast",
            ScatteredCloudsLightRain => "Scattered clouds with light rain",
            CloudyLightRain => "Cloudy with light rain",
            OvercastLightRain => "Overcast with light rain",
            ScatteredCloudsModerateRain => "Scattered clouds with moderate rain",
            CloudyModerateRain => "Cloudy with moderate rain",
            OvercastModerateRain => "Overcast with moderate rain",
            ScatteredCloudsThunderstorm => "Scattered clouds with thunderstorms",
            CloudyThunderstorm => "Cloudy with thunderstorms",
            OvercastThunderstorm => "Overcast with thunderstorms",
            ScatteredCloudsThunderstormHail => "Scattered clouds with thunderstorms and hailstorms",
            CloudyThunderstormHail => "Cloudy with thunderstorms and hailstorms",
            OvercastThunderstormHail => "Overcast with thunderstorms and hailstorms",
            ScatteredCloudsSnow => "Scattered clouds with snow",
            CloudySnow => "Cloudy with snow",
            OvercastSnow => "Overcast with snow",
            ScatteredCloudsSleet => "Scattered clouds with sleet",
            CloudySleet => "Cloudy with sleet",
            OvercastSleet => "Overcast with sleet",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Describes any raw `symbol` code, returning `"Unknown"` for undefined ones.
///
/// ```rust
/// use libweather::describe_weather;
///
/// assert_eq!(describe_weather(1), "Clear");
/// assert_eq!(describe_weather(23), "Unknown");
/// ```
pub fn describe_weather(code: i32) -> &'static str {
    WeatherCondition::from_code(code).map_or("Unknown", WeatherCondition::description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::forecast::MISSING_INT;

    #[test]
    fn test_every_defined_code_round_trips() {
        for code in 1..=22 {
            let condition = WeatherCondition::from_code(code);
            assert_eq!(condition.map(WeatherCondition::code), Some(code));
        }
    }

    #[test]
    fn test_undefined_codes_describe_as_unknown() {
        assert_eq!(describe_weather(0), "Unknown");
        assert_eq!(describe_weather(-3), "Unknown");
        assert_eq!(describe_weather(MISSING_INT), "Unknown");
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(describe_weather(4), "Overcast");
        assert_eq!(
            describe_weather(14),
            "Scattered clouds with thunderstorms and hailstorms"
        );
        assert_eq!(WeatherCondition::OvercastSleet.to_string(), "Overcast with sleet");
    }
}
