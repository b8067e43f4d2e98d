//! The `wtrc` command line front end: argument parsing, location search and
//! forecast tables.

use crate::cache::store::ForecastCache;
use crate::error::WeatherError;
use crate::tiempo::driver::TiempoDriver;
use crate::transport::http_client::HttpTransport;
use crate::types::forecast::{Forecast, ForecastDay, ForecastHour, Sentinel};
use crate::types::location::{find_location, search_locations, Location, LocationSearch, LOCATIONS};
use crate::utils::is_number;
use clap::{ArgGroup, Parser};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Weather(#[from] WeatherError),

    #[error("Failed to write output")]
    Output(#[from] io::Error),

    #[error("Failed to encode forecast as JSON")]
    Json(#[from] serde_json::Error),
}

/// Get weather forecasts for Italian locations
#[derive(Parser, Debug)]
#[command(name = "wtrc")]
#[command(about = "Get weather forecasts")]
#[command(version)]
#[command(group(ArgGroup::new("mode").required(true).args(["search", "location"])))]
pub struct Cli {
    /// Search a location whose name contains L
    #[arg(short, long, value_name = "L")]
    pub search: Option<String>,

    /// Get weather forecasts for the location L (location code or name)
    #[arg(short, long, value_name = "L")]
    pub location: Option<String>,

    /// Show hourly forecast
    #[arg(short = 'H', long)]
    pub hour: bool,

    /// Print the forecast as JSON
    #[arg(long)]
    pub json: bool,

    /// Tiempo affiliate id used for API accounting
    #[arg(long, env = "WTR_AFFILIATE_ID", value_name = "ID")]
    pub affiliate_id: Option<String>,

    /// Tiempo API host
    #[arg(long, env = "WTR_API_HOST", value_name = "HOST")]
    pub api_host: Option<String>,

    /// Directory forecasts are cached in
    #[arg(long, env = "WTR_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default `warn`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Executes the command described by `cli`, printing to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    if let Some(query) = &cli.search {
        let results = search_locations(query, LocationSearch::PartialName);
        write_search_results(out, &results)?;
    } else if let Some(query) = &cli.location {
        let location = lookup(query)?;
        let driver = driver_for(cli)?;
        let forecast = driver.forecast(location.code)?;
        if cli.json {
            write_json(out, location, &forecast)?;
        } else {
            writeln!(out, "Weather forecasts for {}\n", location)?;
            write_forecast(out, &forecast, cli.hour)?;
        }
    }
    Ok(())
}

fn lookup(query: &str) -> Result<&'static Location, WeatherError> {
    find_location(query).ok_or_else(|| WeatherError::LocationNotFound {
        attribute: if is_number(query) { "code" } else { "name" },
        query: query.to_string(),
    })
}

fn driver_for(cli: &Cli) -> Result<TiempoDriver<HttpTransport>, WeatherError> {
    let cache = cli
        .cache_dir
        .clone()
        .map_or_else(ForecastCache::new, ForecastCache::with_root);
    Ok(TiempoDriver::builder()
        .transport(HttpTransport::new()?)
        .cache(cache)
        .maybe_api_host(cli.api_host.clone())
        .maybe_affiliate_id(cli.affiliate_id.clone())
        .build())
}

pub fn write_location(out: &mut impl Write, location: &Location) -> io::Result<()> {
    writeln!(out, "Location   : {}", location)?;
    writeln!(
        out,
        "Coordinates: {:.6}, {:.6}",
        location.latitude, location.longitude
    )?;
    writeln!(out, "Code       : {}", location.code)
}

pub fn write_search_results(out: &mut impl Write, results: &[&Location]) -> io::Result<()> {
    for location in results {
        write_location(out, location)?;
        writeln!(out)?;
    }
    let count = results.len();
    writeln!(
        out,
        "{} location{} found ({} locations available).\n",
        count,
        if count != 1 { "s" } else { "" },
        LOCATIONS.len()
    )
}

/// Writes the daily table and, if `hourly`, one table per day.
pub fn write_forecast(out: &mut impl Write, forecast: &Forecast, hourly: bool) -> io::Result<()> {
    writeln!(out, "Date   Min (°) Max (°) Humidity (%) Wind(km/h) Weather")?;
    writeln!(out, "----   ------- ------- ------------ ---------- -------")?;
    for day in &forecast.days {
        write_day_row(out, day)?;
    }
    if hourly {
        for day in &forecast.days {
            writeln!(out, "\n\n{}\n", day.date.format("%A, %e %B"))?;
            writeln!(out, "Time  Temp (°) Weather")?;
            writeln!(out, "----  -------- -------")?;
            for hour in &day.hours {
                write_hour_row(out, hour)?;
            }
        }
    }
    Ok(())
}

fn write_day_row(out: &mut impl Write, day: &ForecastDay) -> io::Result<()> {
    writeln!(
        out,
        "{} {:>7} {:>7} {:>12} {:>10} {}",
        day.date.format("%a %e"),
        reading(day.temp_min),
        reading(day.temp_max),
        reading(day.humidity),
        reading(day.wind_speed),
        day.weather_description()
    )
}

fn write_hour_row(out: &mut impl Write, hour: &ForecastHour) -> io::Result<()> {
    writeln!(
        out,
        "{} {:>8} {}",
        hour.timestamp.format("%H:%M"),
        reading(hour.temp),
        hour.weather_description()
    )
}

/// Formats a reading, showing `-` for the missing-value sentinel.
fn reading<T: Sentinel + Display>(value: T) -> String {
    value
        .reading()
        .map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[derive(Serialize)]
struct ForecastReport<'a> {
    location: &'a Location,
    forecast: &'a Forecast,
}

pub fn write_json(
    out: &mut impl Write,
    location: &Location,
    forecast: &Forecast,
) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, &ForecastReport { location, forecast })?;
    writeln!(out)?;
    Ok(())
}
