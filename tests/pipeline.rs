//! End-to-end tests of the forecast pipeline: cache lookup, download, parse
//! and cache population, with an in-memory transport.

use chrono::{Local, NaiveDate};
use libweather::{
    CacheKey, ForecastCache, HttpResponse, ParseError, ResponseBuffer, TiempoDriver, Transport,
    TransportError, WeatherError, DRIVER_NAME, MISSING_INT,
};
use std::cell::{Cell, RefCell};
use std::io;
use tempfile::TempDir;

const REPORT: &str = include_str!("fixtures/report.xml");
const TERNI: &str = "31553";

enum Reply {
    Status(u16, &'static [u8]),
    Unreachable,
}

/// Answers every request with the same reply and records what was asked.
struct FakeTransport {
    reply: Reply,
    calls: Cell<usize>,
    urls: RefCell<Vec<String>>,
}

impl FakeTransport {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
            urls: RefCell::new(Vec::new()),
        }
    }

    fn ok(body: &'static [u8]) -> Self {
        Self::new(Reply::Status(200, body))
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.calls.set(self.calls.get() + 1);
        self.urls.borrow_mut().push(url.to_string());
        match self.reply {
            Reply::Status(status, body) => {
                let mut buffer = ResponseBuffer::new();
                // Deliver the body in small pieces, the way a socket would.
                for chunk in body.chunks(64) {
                    buffer.append(chunk);
                }
                Ok(HttpResponse {
                    status,
                    body: buffer,
                })
            }
            Reply::Unreachable => Err(TransportError::BodyRead(
                url.to_string(),
                io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"),
            )),
        }
    }
}

fn setup(transport: &FakeTransport) -> (TempDir, TiempoDriver<&FakeTransport>) {
    let temp = TempDir::new().unwrap();
    let driver = TiempoDriver::builder()
        .transport(transport)
        .cache(ForecastCache::with_root(temp.path().to_path_buf()))
        .affiliate_id("test-affiliate")
        .build();
    (temp, driver)
}

fn cached(driver: &TiempoDriver<&FakeTransport>) -> Option<Vec<u8>> {
    driver.cache().get(DRIVER_NAME, TERNI)
}

#[test]
fn test_miss_downloads_parses_and_caches() -> Result<(), Box<dyn std::error::Error>> {
    let transport = FakeTransport::ok(REPORT.as_bytes());
    let (_temp, driver) = setup(&transport);

    let forecast = driver.forecast(TERNI)?;

    assert_eq!(transport.calls(), 1);
    assert_eq!(
        transport.urls.borrow()[0],
        "http://api.ilmeteo.net/index.php?api_lang=it&localidad=31553&affiliate_id=test-affiliate&v=2&h=1"
    );
    assert_eq!(forecast.days.len(), 3);
    let hour_counts: Vec<usize> = forecast.days.iter().map(|d| d.hours.len()).collect();
    assert_eq!(hour_counts, vec![3, 1, 0]);

    // The cached payload is exactly what came over the wire.
    assert_eq!(cached(&driver).as_deref(), Some(REPORT.as_bytes()));
    Ok(())
}

#[test]
fn test_hit_issues_no_network_call() -> Result<(), Box<dyn std::error::Error>> {
    let transport = FakeTransport::new(Reply::Unreachable);
    let (_temp, driver) = setup(&transport);
    driver
        .cache()
        .set(DRIVER_NAME, TERNI, REPORT.as_bytes())?;

    let forecast = driver.forecast(TERNI)?;

    assert_eq!(transport.calls(), 0);
    assert_eq!(forecast.days.len(), 3);
    Ok(())
}

#[test]
fn test_second_call_same_day_is_served_from_cache() -> Result<(), Box<dyn std::error::Error>> {
    let transport = FakeTransport::ok(REPORT.as_bytes());
    let (_temp, driver) = setup(&transport);

    let first = driver.forecast(TERNI)?;
    let second = driver.forecast(TERNI)?;

    assert_eq!(transport.calls(), 1);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_entry_from_another_day_is_not_used() -> Result<(), Box<dyn std::error::Error>> {
    let transport = FakeTransport::ok(REPORT.as_bytes());
    let (_temp, driver) = setup(&transport);
    let yesterday = Local::now()
        .date_naive()
        .pred_opt()
        .ok_or("no previous day")?;
    driver
        .cache()
        .set_on(&CacheKey::new(DRIVER_NAME, TERNI, yesterday), b"stale")?;

    driver.forecast(TERNI)?;

    assert_eq!(transport.calls(), 1);
    Ok(())
}

#[test]
fn test_non_200_status_fails_without_caching() {
    let transport = FakeTransport::new(Reply::Status(404, b"<html>Not Found</html>"));
    let (_temp, driver) = setup(&transport);

    let result = driver.forecast(TERNI);

    assert!(matches!(
        result,
        Err(WeatherError::HttpStatus { status: 404, .. })
    ));
    assert_eq!(cached(&driver), None);
}

#[test]
fn test_error_status_with_valid_body_is_not_cached() {
    let transport = FakeTransport::new(Reply::Status(500, REPORT.as_bytes()));
    let (_temp, driver) = setup(&transport);

    assert!(driver.forecast(TERNI).is_err());
    assert_eq!(cached(&driver), None);
}

#[test]
fn test_transport_error_fails_without_caching() {
    let transport = FakeTransport::new(Reply::Unreachable);
    let (_temp, driver) = setup(&transport);

    let result = driver.forecast(TERNI);

    assert!(matches!(result, Err(WeatherError::Transport(_))));
    assert_eq!(transport.calls(), 1);
    assert_eq!(cached(&driver), None);
}

#[test]
fn test_malformed_download_is_not_cached() {
    let transport = FakeTransport::ok(b"<forecast><location/></forecast>");
    let (_temp, driver) = setup(&transport);

    let result = driver.forecast(TERNI);

    assert!(matches!(
        result,
        Err(WeatherError::Parse(ParseError::MissingReport(_)))
    ));
    assert_eq!(cached(&driver), None);
}

#[test]
fn test_cache_write_failure_does_not_fail_fetch() -> Result<(), Box<dyn std::error::Error>> {
    let transport = FakeTransport::ok(REPORT.as_bytes());
    let temp = TempDir::new()?;
    let root = temp.path().join("not-a-dir");
    std::fs::write(&root, b"x")?;
    let driver = TiempoDriver::builder()
        .transport(&transport)
        .cache(ForecastCache::with_root(root.clone()))
        .build();

    let forecast = driver.forecast(TERNI)?;

    assert_eq!(transport.calls(), 1);
    assert_eq!(forecast.days.len(), 3);
    assert_eq!(std::fs::read(&root)?, b"x");
    Ok(())
}

#[test]
fn test_corrupt_cache_is_reported_and_not_refetched() -> Result<(), Box<dyn std::error::Error>> {
    let transport = FakeTransport::ok(REPORT.as_bytes());
    let (_temp, driver) = setup(&transport);
    let path = driver
        .cache()
        .set(DRIVER_NAME, TERNI, b"<report><location>")?;

    match driver.forecast(TERNI) {
        Err(WeatherError::CorruptCache {
            location_code,
            path: reported,
            ..
        }) => {
            assert_eq!(location_code, TERNI);
            assert_eq!(reported, path);
        }
        other => panic!("expected a corrupt cache error, got {:?}", other),
    }
    assert_eq!(transport.calls(), 0);
    Ok(())
}

#[test]
fn test_forecast_content() -> Result<(), Box<dyn std::error::Error>> {
    let transport = FakeTransport::ok(REPORT.as_bytes());
    let (_temp, driver) = setup(&transport);

    let forecast = driver.forecast(TERNI)?;

    let monday = &forecast.days[0];
    assert_eq!(monday.date, NaiveDate::from_ymd_opt(2018, 3, 12).unwrap());
    assert_eq!(monday.wind_speed, 19);
    assert_eq!(monday.weather_description(), "Cloudy with light rain");

    let six = &monday.hours[0];
    assert_eq!(
        six.timestamp,
        NaiveDate::from_ymd_opt(2018, 3, 12)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap()
    );
    let nine = &monday.hours[1];
    assert_eq!(nine.wind_speed, 19);
    assert_eq!(nine.wind_dir.as_deref(), Some("N"));

    // Tuesday has no minimum temperature.
    assert_eq!(forecast.days[1].temp_min, MISSING_INT);
    assert_eq!(forecast.days[2].temp_min, -2);
    Ok(())
}
