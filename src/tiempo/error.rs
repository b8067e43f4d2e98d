use chrono::NaiveDateTime;
use thiserror::Error;

/// Why a Tiempo document could not be turned into a forecast.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse document")]
    MalformedXml(#[from] xmltree::ParseError),

    #[error("Tiempo XML parsing error: root element report not found (found '{0}')")]
    MissingReport(String),

    #[error("Tiempo XML parsing error: location element inside report not found")]
    MissingLocation,

    #[error("Tiempo XML parsing error: day date {0:?} is not in YYYYMMDD format")]
    InvalidDate(Option<String>),

    #[error("Tiempo XML parsing error: hour {value:?} of day {day} is not in HH:MM format")]
    InvalidTime {
        day: chrono::NaiveDate,
        value: Option<String>,
    },

    #[error("Tiempo XML parsing error: hour {found} does not follow {previous}")]
    HourOutOfOrder {
        previous: NaiveDateTime,
        found: NaiveDateTime,
    },
}
