//! Turns a Tiempo XML report into a [`Forecast`].
//!
//! The document must look like
//!
//! ```xml
//! <report>
//!   <location city="Terni [Umbria;Italia]">
//!     <day value="20180312">
//!       <symbol value="6"/> <tempmin value="7"/> <tempmax value="14"/>
//!       <wind value="19" dir="N"/> <rain value="2.1"/>
//!       <humidity value="80"/> <pressure value="1012"/>
//!       <hour value="06:00">
//!         <temp value="9"/> <symbol value="6"/> <wind value="8" dir="SE"/> ...
//!       </hour>
//!     </day>
//!   </location>
//! </report>
//! ```
//!
//! Unknown elements are skipped at every level. Readings that are absent or
//! not numbers become the missing-value sentinels.

use crate::tiempo::error::ParseError;
use crate::types::forecast::{Forecast, ForecastDay, ForecastHour, MISSING_FLOAT, MISSING_INT};
use crate::utils::{parse_double, parse_int};
use chrono::{NaiveDate, NaiveTime};
use xmltree::Element;

/// Parses a raw Tiempo response.
///
/// The input is only borrowed; everything in the returned forecast is a fresh
/// allocation. Either the whole document is accepted or an error is returned,
/// never a partial forecast.
pub fn parse_forecast(raw: &[u8]) -> Result<Forecast, ParseError> {
    let report = Element::parse(raw)?;
    if report.name != "report" {
        return Err(ParseError::MissingReport(report.name));
    }
    let location = report
        .children
        .iter()
        .find_map(|node| node.as_element())
        .filter(|element| element.name == "location")
        .ok_or(ParseError::MissingLocation)?;

    let days = child_elements(location, "day")
        .map(parse_day)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Forecast { days })
}

fn parse_day(element: &Element) -> Result<ForecastDay, ParseError> {
    let value = element.attributes.get("value");
    let date = value
        .and_then(|v| NaiveDate::parse_from_str(v, "%Y%m%d").ok())
        .ok_or_else(|| ParseError::InvalidDate(value.cloned()))?;

    let mut day = ForecastDay::new(date);
    for child in element.children.iter().filter_map(|node| node.as_element()) {
        match child.name.as_str() {
            "symbol" => day.weather = int_value(child),
            "tempmin" => day.temp_min = int_value(child),
            "tempmax" => day.temp_max = int_value(child),
            "wind" => day.wind_speed = int_value(child),
            "rain" => day.rain = double_value(child),
            "humidity" => day.humidity = int_value(child),
            "pressure" => day.pressure = int_value(child),
            "hour" => {
                let hour = parse_hour(child, date)?;
                if let Some(previous) = day.hours.last() {
                    if hour.timestamp <= previous.timestamp {
                        return Err(ParseError::HourOutOfOrder {
                            previous: previous.timestamp,
                            found: hour.timestamp,
                        });
                    }
                }
                day.hours.push(hour);
            }
            _ => {}
        }
    }
    Ok(day)
}

fn parse_hour(element: &Element, date: NaiveDate) -> Result<ForecastHour, ParseError> {
    let value = element.attributes.get("value");
    let time = value
        .and_then(|v| NaiveTime::parse_from_str(v, "%H:%M").ok())
        .ok_or_else(|| ParseError::InvalidTime {
            day: date,
            value: value.cloned(),
        })?;

    let mut hour = ForecastHour::new(date.and_time(time));
    for child in element.children.iter().filter_map(|node| node.as_element()) {
        match child.name.as_str() {
            "symbol" => hour.weather = int_value(child),
            "temp" => hour.temp = int_value(child),
            "wind" => {
                hour.wind_speed = int_value(child);
                hour.wind_dir = child.attributes.get("dir").cloned();
            }
            "rain" => hour.rain = double_value(child),
            "humidity" => hour.humidity = int_value(child),
            "pressure" => hour.pressure = int_value(child),
            _ => {}
        }
    }
    Ok(hour)
}

fn child_elements<'a>(parent: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> {
    parent
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(move |element| element.name == name)
}

fn int_value(element: &Element) -> i32 {
    element
        .attributes
        .get("value")
        .and_then(|v| parse_int(v).ok())
        .unwrap_or(MISSING_INT)
}

fn double_value(element: &Element) -> f64 {
    element
        .attributes
        .get("value")
        .and_then(|v| parse_double(v).ok())
        .unwrap_or(MISSING_FLOAT)
}
