use crate::tiempo::error::ParseError;
use crate::transport::error::TransportError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Cached forecast for '{location_code}' at '{path}' is corrupt")]
    CorruptCache {
        location_code: String,
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Location with {attribute} '{query}' not found.")]
    LocationNotFound {
        attribute: &'static str,
        query: String,
    },
}
