// crates/thai-address-core/src/lookup.rs
use crate::model::{Address, AddressDb, District, Lang, SubDistrict};
use crate::text::{parse_coordinate, parse_key};
use crate::traits::{AddressLookup, Named};

// Typed building blocks behind the string surface. Each returns "" when the
// record is missing.
impl AddressDb {
    fn province_name(&self, id: u32, lang: Lang) -> &str {
        self.find_province(id).map_or("", |p| p.name(lang))
    }

    fn district_name(&self, id: u32, lang: Lang) -> &str {
        self.find_district(id).map_or("", |d| d.name(lang))
    }

    fn sub_district_name(&self, id: u32, lang: Lang) -> &str {
        self.find_sub_district(id).map_or("", |s| s.name(lang))
    }

    fn province_by_district_name(&self, district_name: &str, lang: Lang) -> &str {
        self.find_district_by_thai_name(district_name)
            .map_or("", |d| self.province_name(d.province_id, lang))
    }

    /// Province of a sub-district, pivoting through its district's
    /// localized name. Only resolves for `Lang::Th`.
    fn province_via_district_name(&self, sub_district: &SubDistrict, lang: Lang) -> &str {
        let district_name = self.district_name(sub_district.district_id, lang);
        self.province_by_district_name(district_name, lang)
    }

    fn address_of(&self, sub_district: &SubDistrict, lang: Lang) -> Address<'_> {
        Address {
            province: self.province_via_district_name(sub_district, lang),
            district: self.district_name(sub_district.district_id, lang),
            sub_district: self.sub_district_name(sub_district.id, lang),
        }
    }

    fn sub_district_by_zip_text(&self, zip_code: &str) -> Option<&SubDistrict> {
        parse_key(zip_code).and_then(|zip| self.find_sub_district_by_zip_code(zip))
    }
}

impl AddressLookup for AddressDb {
    fn get_province(&self, id: &str, lang: &str) -> &str {
        parse_key(id).map_or("", |id| self.province_name(id, Lang::from_code(lang)))
    }

    fn get_district(&self, id: &str, lang: &str) -> &str {
        parse_key(id).map_or("", |id| self.district_name(id, Lang::from_code(lang)))
    }

    fn get_sub_district(&self, id: &str, lang: &str) -> &str {
        parse_key(id).map_or("", |id| self.sub_district_name(id, Lang::from_code(lang)))
    }

    fn get_sub_district_by_zip_code(&self, zip_code: &str, lang: &str) -> &str {
        self.sub_district_by_zip_text(zip_code)
            .map_or("", |s| s.name(Lang::from_code(lang)))
    }

    fn get_sub_district_by_district_id(&self, district_id: &str) -> Vec<&SubDistrict> {
        match parse_key(district_id) {
            Some(id) => self.sub_districts_of_district(id).collect(),
            None => Vec::new(),
        }
    }

    fn get_district_by_province_id(&self, province_id: &str) -> Vec<&District> {
        match parse_key(province_id) {
            Some(id) => self.districts_of_province(id).collect(),
            None => Vec::new(),
        }
    }

    fn get_province_by_district_name(&self, district_name: &str, lang: &str) -> &str {
        self.province_by_district_name(district_name, Lang::from_code(lang))
    }

    fn get_province_by_sub_district_name(&self, sub_district_name: &str, lang: &str) -> &str {
        self.find_sub_district_by_thai_name(sub_district_name)
            .map_or("", |s| self.province_via_district_name(s, Lang::from_code(lang)))
    }

    fn get_district_by_sub_district_name(&self, sub_district_name: &str, lang: &str) -> &str {
        self.find_sub_district_by_thai_name(sub_district_name)
            .map_or("", |s| self.district_name(s.district_id, Lang::from_code(lang)))
    }

    fn get_province_by_zip_code(&self, zip_code: &str, lang: &str) -> &str {
        self.sub_district_by_zip_text(zip_code)
            .map_or("", |s| self.province_via_district_name(s, Lang::from_code(lang)))
    }

    fn get_district_by_zip_code(&self, zip_code: &str, lang: &str) -> &str {
        self.sub_district_by_zip_text(zip_code)
            .map_or("", |s| self.district_name(s.district_id, Lang::from_code(lang)))
    }

    fn get_address_by_lat_long(&self, latitude: &str, longitude: &str, lang: &str) -> Address<'_> {
        let (Some(lat), Some(lng)) = (parse_coordinate(latitude), parse_coordinate(longitude)) else {
            return Address::default();
        };
        self.find_sub_district_by_lat_long(lat, lng)
            .map_or_else(Address::default, |s| self.address_of(s, Lang::from_code(lang)))
    }

    fn get_address_by_zip_code(&self, zip_code: &str, lang: &str) -> Address<'_> {
        self.sub_district_by_zip_text(zip_code)
            .map_or_else(Address::default, |s| self.address_of(s, Lang::from_code(lang)))
    }
}
