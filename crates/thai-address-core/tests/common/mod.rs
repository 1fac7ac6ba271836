#![allow(dead_code)]

use std::path::PathBuf;
use thai_address_core::AddressDb;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture_db() -> AddressDb {
    AddressDb::load_from_dir(fixtures_dir()).expect("fixture dataset should load")
}
