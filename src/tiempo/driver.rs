use crate::cache::store::{CacheKey, ForecastCache};
use crate::error::WeatherError;
use crate::tiempo::parser::parse_forecast;
use crate::transport::http_client::HttpTransport;
use crate::transport::Transport;
use crate::types::forecast::Forecast;
use bon::bon;
use log::{debug, info, warn};

/// Name the driver's entries are stored under in the cache.
pub const DRIVER_NAME: &str = "tiempo";

pub const DEFAULT_API_HOST: &str = "api.ilmeteo.net";

/// Affiliate id sent when none is configured.
pub const DEFAULT_AFFILIATE_ID: &str = "0123456789abcd";

/// Fetches Tiempo forecasts, going to the network at most once per day and
/// location.
///
/// # Examples
///
/// ```rust,no_run
/// use libweather::{find_location, TiempoDriver, WeatherError};
///
/// # fn run() -> Result<(), WeatherError> {
/// let driver = TiempoDriver::with_defaults()?;
/// let terni = find_location("TERNI").ok_or_else(|| WeatherError::LocationNotFound {
///     attribute: "name",
///     query: "TERNI".into(),
/// })?;
/// let forecast = driver.forecast(terni.code)?;
/// for day in &forecast.days {
///     println!("{}: {}", day.date, day.weather_description());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TiempoDriver<T: Transport> {
    transport: T,
    cache: ForecastCache,
    api_host: String,
    affiliate_id: String,
}

#[bon]
impl<T: Transport> TiempoDriver<T> {
    /// Builds a driver around `transport`.
    ///
    /// Without `cache` the default cache root is used; `api_host` and
    /// `affiliate_id` fall back to [`DEFAULT_API_HOST`] and
    /// [`DEFAULT_AFFILIATE_ID`].
    #[builder]
    pub fn new(
        transport: T,
        cache: Option<ForecastCache>,
        #[builder(into)] api_host: Option<String>,
        #[builder(into)] affiliate_id: Option<String>,
    ) -> Self {
        Self {
            transport,
            cache: cache.unwrap_or_default(),
            api_host: api_host.unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            affiliate_id: affiliate_id.unwrap_or_else(|| DEFAULT_AFFILIATE_ID.to_string()),
        }
    }

    pub fn cache(&self) -> &ForecastCache {
        &self.cache
    }

    /// URL of the forecast document for `location_code`.
    pub fn forecast_url(&self, location_code: &str) -> String {
        format!(
            "http://{}/index.php?api_lang=it&localidad={}&affiliate_id={}&v=2&h=1",
            self.api_host, location_code, self.affiliate_id
        )
    }

    /// Forecast for `location_code`.
    ///
    /// Today's cached document is used when there is one. Otherwise the
    /// document is downloaded, parsed and, only if it parsed, cached. A
    /// failure to write the cache is logged and does not fail the call.
    ///
    /// # Errors
    ///
    /// * [`WeatherError::CorruptCache`] if the cached document does not parse.
    ///   The network is not tried in that case.
    /// * [`WeatherError::Transport`] if the server could not be reached.
    /// * [`WeatherError::HttpStatus`] if it answered with anything but 200.
    /// * [`WeatherError::Parse`] if the downloaded document is malformed.
    pub fn forecast(&self, location_code: &str) -> Result<Forecast, WeatherError> {
        let key = CacheKey::today(DRIVER_NAME, location_code);
        if let Some(cached) = self.cache.get_on(&key) {
            info!("Cache hit for {} forecast of {}", DRIVER_NAME, location_code);
            return parse_forecast(&cached).map_err(|source| WeatherError::CorruptCache {
                location_code: location_code.to_string(),
                path: self.cache.path_for(&key),
                source,
            });
        }

        info!(
            "Cache miss for {} forecast of {}, downloading",
            DRIVER_NAME, location_code
        );
        let url = self.forecast_url(location_code);
        let response = self.transport.get(&url)?;
        if !response.is_ok() {
            warn!("HTTP status {} for {}", response.status, url);
            return Err(WeatherError::HttpStatus {
                url,
                status: response.status,
            });
        }

        let forecast = parse_forecast(response.body.as_bytes())?;
        match self.cache.set_on(&key, response.body.as_bytes()) {
            Ok(path) => debug!("Cached {} forecast at {:?}", DRIVER_NAME, path),
            Err(e) => warn!("Could not cache {} forecast: {}", DRIVER_NAME, e),
        }
        Ok(forecast)
    }
}

impl TiempoDriver<HttpTransport> {
    /// Driver over HTTP with the default cache, host and affiliate id.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Ok(Self::builder().transport(HttpTransport::new()?).build())
    }
}
