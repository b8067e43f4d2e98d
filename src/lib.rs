//! Daily and hourly weather forecasts for Italian locations from the Tiempo
//! (ilmeteo.net) API.
//!
//! Raw responses are cached on disk per location and calendar day, so asking
//! for the same forecast again on the same day does not touch the network.

mod cache;
pub mod cli;
mod error;
mod tiempo;
mod transport;
mod types;
mod utils;

pub use error::WeatherError;

pub use cache::error::CacheError;
pub use cache::store::{CacheKey, ForecastCache};

pub use transport::buffer::ResponseBuffer;
pub use transport::error::TransportError;
pub use transport::http_client::HttpTransport;
pub use transport::{HttpResponse, Transport};

pub use tiempo::driver::{TiempoDriver, DEFAULT_AFFILIATE_ID, DEFAULT_API_HOST, DRIVER_NAME};
pub use tiempo::error::ParseError;
pub use tiempo::parser::parse_forecast;

pub use types::forecast::{
    Forecast, ForecastDay, ForecastHour, Sentinel, MISSING_FLOAT, MISSING_INT,
};
pub use types::location::{find_location, search_locations, Location, LocationSearch, LOCATIONS};
pub use types::weather_condition::{describe_weather, WeatherCondition};

pub use utils::{get_cache_dir, is_number, parse_double, parse_int, ConversionError};
