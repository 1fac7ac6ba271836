// crates/thai-address-core/src/model/db.rs
use super::records::{District, Province, SubDistrict};
use crate::common::DbStats;

/// The master database struct.
///
/// Three flat collections kept in the order they were loaded. Parents are
/// referenced by id only; nothing checks that a referenced id exists, and
/// a dangling reference simply makes the dependent lookups come back empty.
///
/// The database is never mutated after construction. Share it across
/// threads with `&AddressDb` or `Arc<AddressDb>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressDb {
    pub(crate) provinces: Vec<Province>,
    pub(crate) districts: Vec<District>,
    pub(crate) sub_districts: Vec<SubDistrict>,
}

/// A province / district / sub-district triple of display names.
///
/// Fields are empty when the lookup producing the address found nothing,
/// or when a parent could not be resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Address<'a> {
    pub province: &'a str,
    pub district: &'a str,
    pub sub_district: &'a str,
}

impl Address<'_> {
    /// True when all three names are empty.
    pub fn is_empty(&self) -> bool {
        self.province.is_empty() && self.district.is_empty() && self.sub_district.is_empty()
    }
}

impl<'a> From<Address<'a>> for (&'a str, &'a str, &'a str) {
    fn from(a: Address<'a>) -> Self {
        (a.province, a.district, a.sub_district)
    }
}

impl AddressDb {
    /// Builds a database from already-parsed collections.
    pub fn from_parts(
        provinces: Vec<Province>,
        districts: Vec<District>,
        sub_districts: Vec<SubDistrict>,
    ) -> Self {
        AddressDb {
            provinces,
            districts,
            sub_districts,
        }
    }

    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn sub_districts(&self) -> &[SubDistrict] {
        &self.sub_districts
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            provinces: self.provinces.len(),
            districts: self.districts.len(),
            sub_districts: self.sub_districts.len(),
        }
    }

    // -----------------------------------------------------------------------
    // Typed finders. Every one is a front-to-back scan; first match wins.
    // -----------------------------------------------------------------------

    pub fn find_province(&self, id: u32) -> Option<&Province> {
        self.provinces.iter().find(|p| p.id == id)
    }

    pub fn find_district(&self, id: u32) -> Option<&District> {
        self.districts.iter().find(|d| d.id == id)
    }

    pub fn find_sub_district(&self, id: u32) -> Option<&SubDistrict> {
        self.sub_districts.iter().find(|s| s.id == id)
    }

    /// First sub-district carrying `zip_code`. Zip codes are shared by
    /// several sub-districts, so later matches are never reported.
    pub fn find_sub_district_by_zip_code(&self, zip_code: u32) -> Option<&SubDistrict> {
        self.sub_districts.iter().find(|s| s.zip_code == zip_code)
    }

    /// Exact match on the Thai name.
    pub fn find_district_by_thai_name(&self, name: &str) -> Option<&District> {
        self.districts.iter().find(|d| d.name_in_thai == name)
    }

    /// Exact match on the Thai name.
    pub fn find_sub_district_by_thai_name(&self, name: &str) -> Option<&SubDistrict> {
        self.sub_districts.iter().find(|s| s.name_in_thai == name)
    }

    pub fn find_sub_district_by_lat_long(&self, latitude: f64, longitude: f64) -> Option<&SubDistrict> {
        self.sub_districts.iter().find(|s| s.is_at(latitude, longitude))
    }

    pub fn districts_of_province(&self, province_id: u32) -> impl Iterator<Item = &District> + '_ {
        self.districts.iter().filter(move |d| d.province_id == province_id)
    }

    pub fn sub_districts_of_district(
        &self,
        district_id: u32,
    ) -> impl Iterator<Item = &SubDistrict> + '_ {
        self.sub_districts.iter().filter(move |s| s.district_id == district_id)
    }
}
