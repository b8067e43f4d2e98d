//! Raw response cache, one file per driver, location and calendar day.
//!
//! Entries live at `<root>/<YYYYMMDD>/<driver>-<location code>`. Nothing is
//! ever evicted: an entry simply stops being looked up once the day is over.

use crate::cache::error::CacheError;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use chrono::{Local, NaiveDate};
use log::debug;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Identifies one cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey<'a> {
    pub driver: &'a str,
    pub location_code: &'a str,
    pub day: NaiveDate,
}

impl<'a> CacheKey<'a> {
    pub fn new(driver: &'a str, location_code: &'a str, day: NaiveDate) -> Self {
        Self {
            driver,
            location_code,
            day,
        }
    }

    /// Key for the current local calendar day.
    pub fn today(driver: &'a str, location_code: &'a str) -> Self {
        Self::new(driver, location_code, Local::now().date_naive())
    }

    fn dir_name(&self) -> String {
        self.day.format("%Y%m%d").to_string()
    }

    fn file_name(&self) -> String {
        format!("{}-{}", self.driver, self.location_code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastCache {
    root: PathBuf,
}

impl Default for ForecastCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastCache {
    /// Cache rooted at `<tempdir>/libweather`.
    pub fn new() -> Self {
        Self::with_root(get_cache_dir())
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// Full path of the file backing `key`.
    pub fn path_for(&self, key: &CacheKey<'_>) -> PathBuf {
        self.root.join(key.dir_name()).join(key.file_name())
    }

    /// Today's payload for `driver` and `location_code`, if one was stored.
    pub fn get(&self, driver: &str, location_code: &str) -> Option<Vec<u8>> {
        self.get_on(&CacheKey::today(driver, location_code))
    }

    /// Stored payload for `key`.
    ///
    /// Never fails: a missing or unreadable entry is a miss. The day directory
    /// is created on the way so a later [`ForecastCache::set_on`] finds it.
    pub fn get_on(&self, key: &CacheKey<'_>) -> Option<Vec<u8>> {
        let path = self.path_for(key);
        if let Some(dir) = path.parent() {
            if let Err(e) = ensure_cache_dir_exists(dir) {
                debug!("Could not create cache directory {:?}: {}", dir, e);
            }
        }
        match std::fs::read(&path) {
            Ok(payload) => {
                debug!("Read {} cached bytes from {:?}", payload.len(), path);
                Some(payload)
            }
            Err(e) => {
                debug!("No usable cache entry at {:?}: {}", path, e);
                None
            }
        }
    }

    /// Stores `payload` as today's entry for `driver` and `location_code`.
    pub fn set(
        &self,
        driver: &str,
        location_code: &str,
        payload: &[u8],
    ) -> Result<PathBuf, CacheError> {
        self.set_on(&CacheKey::today(driver, location_code), payload)
    }

    /// Stores `payload` under `key`, replacing any previous entry.
    ///
    /// The bytes are written to a temporary file next to the destination and
    /// renamed over it, so readers see either the old or the new payload.
    /// Returns the path of the entry.
    pub fn set_on(&self, key: &CacheKey<'_>, payload: &[u8]) -> Result<PathBuf, CacheError> {
        let path = self.path_for(key);
        let dir = path.parent().unwrap_or(&self.root).to_path_buf();
        ensure_cache_dir_exists(&dir).map_err(|e| CacheError::DirCreation(dir.clone(), e))?;

        let mut temp_file =
            NamedTempFile::new_in(&dir).map_err(|e| CacheError::Write(path.clone(), e))?;
        temp_file
            .write_all(payload)
            .map_err(|e| CacheError::Write(path.clone(), e))?;
        temp_file
            .flush()
            .map_err(|e| CacheError::Write(path.clone(), e))?;
        temp_file
            .persist(&path)
            .map_err(|e| CacheError::Persist(path.clone(), e))?;

        debug!("Cached {} bytes to {:?}", payload.len(), path);
        Ok(path)
    }
}
