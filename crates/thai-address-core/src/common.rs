// crates/thai-address-core/src/common.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three administrative levels held by the database.
///
/// A sub-district belongs to a district, which belongs to a province.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Province,
    District,
    SubDistrict,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Province => "Province",
            Level::District => "District",
            Level::SubDistrict => "SubDistrict",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Simple aggregate statistics for the database.
///
/// Returned by [`AddressDb::stats`](crate::AddressDb::stats), these counts
/// reflect the collections exactly as they were loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub provinces: usize,
    pub districts: usize,
    pub sub_districts: usize,
}
