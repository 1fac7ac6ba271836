// crates/thai-address-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file lookup, decompression) and turns three
//! JSON arrays into an [`AddressDb`]. Loading is all-or-nothing: the first
//! source that cannot be opened, read or parsed aborts the whole load.

use crate::common::Level;
use crate::error::{LoadError, Result};
use crate::model::AddressDb;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};

mod common_io;

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "THAI_ADDRESS_DATA_DIR";

pub const PROVINCE_FILE: &str = "province.json";
pub const DISTRICT_FILE: &str = "district.json";
pub const SUB_DISTRICT_FILE: &str = "sub_district.json";

/// Where the three collections are read from.
///
/// Serializable so it can sit inside a host application's config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSources {
    pub provinces: PathBuf,
    pub districts: PathBuf,
    pub sub_districts: PathBuf,
}

impl DataSources {
    /// The standard file names inside `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        DataSources {
            provinces: dir.join(PROVINCE_FILE),
            districts: dir.join(DISTRICT_FILE),
            sub_districts: dir.join(SUB_DISTRICT_FILE),
        }
    }

    /// Uses `$THAI_ADDRESS_DATA_DIR` when set and non-empty, otherwise the
    /// bundled data directory.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(DATA_DIR_ENV))
    }

    fn from_env_value(value: Option<OsString>) -> Self {
        match value {
            Some(dir) if !dir.is_empty() => Self::from_dir(dir),
            _ => Self::default(),
        }
    }
}

impl Default for DataSources {
    fn default() -> Self {
        Self::from_dir(AddressDb::default_data_dir())
    }
}

impl AddressDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Loads from the directory configured by [`DataSources::from_env`].
    ///
    /// Every call reads the files again; keep the returned value around
    /// instead of calling this repeatedly.
    pub fn load() -> Result<Self> {
        Self::load_from_sources(&DataSources::from_env())
    }

    /// Loads `province.json`, `district.json` and `sub_district.json`
    /// from `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_from_sources(&DataSources::from_dir(dir))
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn load_from_sources(sources: &DataSources) -> Result<Self> {
        log_outcome(read_sources(sources))
    }

    /// Loads from three arbitrary readers, e.g. embedded bytes or network
    /// bodies. Readers are consumed in province, district, sub-district
    /// order.
    pub fn from_readers<P, D, S>(provinces: P, districts: D, sub_districts: S) -> Result<Self>
    where
        P: Read,
        D: Read,
        S: Read,
    {
        log_outcome(read_readers(provinces, districts, sub_districts))
    }

    /// Loads from three in-memory JSON documents.
    pub fn from_slices(provinces: &[u8], districts: &[u8], sub_districts: &[u8]) -> Result<Self> {
        Self::from_readers(provinces, districts, sub_districts)
    }
}

fn read_sources(sources: &DataSources) -> Result<AddressDb> {
    let provinces = read_path(Level::Province, &sources.provinces)?;
    let districts = read_path(Level::District, &sources.districts)?;
    let sub_districts = read_path(Level::SubDistrict, &sources.sub_districts)?;
    Ok(AddressDb::from_parts(provinces, districts, sub_districts))
}

fn read_readers(provinces: impl Read, districts: impl Read, sub_districts: impl Read) -> Result<AddressDb> {
    let provinces = read_json(Level::Province, provinces)?;
    let districts = read_json(Level::District, districts)?;
    let sub_districts = read_json(Level::SubDistrict, sub_districts)?;
    Ok(AddressDb::from_parts(provinces, districts, sub_districts))
}

fn read_path<T: DeserializeOwned>(level: Level, path: &Path) -> Result<Vec<T>> {
    tracing::debug!(%level, path = %path.display(), "opening data source");
    let reader = common_io::open_stream(level, path)?;
    read_json(level, reader)
}

fn read_json<T: DeserializeOwned, R: Read>(level: Level, reader: R) -> Result<Vec<T>> {
    serde_json::from_reader(reader).map_err(|e| LoadError::from_json(level, e))
}

fn log_outcome(result: Result<AddressDb>) -> Result<AddressDb> {
    match &result {
        Ok(db) => {
            let stats = db.stats();
            tracing::info!(
                provinces = stats.provinces,
                districts = stats.districts,
                sub_districts = stats.sub_districts,
                "address database loaded"
            );
        }
        Err(e) => tracing::warn!(error = %e, "address database load failed"),
    }
    result
}
