// crates/thai-address-core/src/model/records.rs
use crate::traits::Named;
use serde::{Deserialize, Serialize};

/// Display language for name lookups.
///
/// Only the exact code `"th"` selects Thai. Any other code, including
/// `"TH"` or the empty string, falls back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lang {
    Th,
    #[default]
    En,
}

impl Lang {
    pub fn from_code(code: &str) -> Self {
        if code == "th" {
            Lang::Th
        } else {
            Lang::En
        }
    }
}

impl From<&str> for Lang {
    fn from(code: &str) -> Self {
        Lang::from_code(code)
    }
}

/// A province (changwat), the top administrative level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub id: u32,
    pub code: u32,
    pub name_in_thai: String,
    pub name_in_english: String,
}

/// A district (amphoe / khet) inside a province.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub id: u32,
    pub code: u32,
    pub name_in_thai: String,
    pub name_in_english: String,
    /// Owning province. Not checked at load time.
    pub province_id: u32,
}

/// A sub-district (tambon / khwaeng), the leaf level carrying
/// coordinates and the postal code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubDistrict {
    pub id: u32,
    pub code: u32,
    pub name_in_thai: String,
    pub name_in_english: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Owning district. Not checked at load time.
    pub district_id: u32,
    pub zip_code: u32,
}

impl Named for Province {
    fn name_th(&self) -> &str {
        &self.name_in_thai
    }
    fn name_en(&self) -> &str {
        &self.name_in_english
    }
}

impl Named for District {
    fn name_th(&self) -> &str {
        &self.name_in_thai
    }
    fn name_en(&self) -> &str {
        &self.name_in_english
    }
}

impl Named for SubDistrict {
    fn name_th(&self) -> &str {
        &self.name_in_thai
    }
    fn name_en(&self) -> &str {
        &self.name_in_english
    }
}

impl SubDistrict {
    /// Exact coordinate match; no tolerance is applied.
    #[inline]
    pub fn is_at(&self, latitude: f64, longitude: f64) -> bool {
        self.latitude == latitude && self.longitude == longitude
    }
}
