// crates/thai-address-core/src/traits.rs
use crate::model::{Address, District, Lang, SubDistrict};
use crate::text::fold_case;

/// Bilingual naming shared by every record type.
///
/// Implementors expose their Thai and English names; the provided methods
/// pick one by [`Lang`] and do case-insensitive substring matching.
///
/// # Examples
/// ```rust
/// use thai_address_core::traits::Named;
/// use thai_address_core::Lang;
///
/// struct Place(&'static str, &'static str);
/// impl Named for Place {
///     fn name_th(&self) -> &str { self.0 }
///     fn name_en(&self) -> &str { self.1 }
/// }
///
/// let p = Place("เชียงใหม่", "Chiang Mai");
/// assert_eq!(p.name(Lang::Th), "เชียงใหม่");
/// assert!(p.name_contains("chiang"));
/// assert!(p.name_contains("เชียง"));
/// ```
pub trait Named {
    /// Canonical Thai name. Name-keyed lookups compare against this.
    fn name_th(&self) -> &str;

    fn name_en(&self) -> &str;

    /// Name in the requested display language.
    #[inline]
    fn name(&self, lang: Lang) -> &str {
        match lang {
            Lang::Th => self.name_th(),
            Lang::En => self.name_en(),
        }
    }

    /// Case-insensitive substring match against either name.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_contains_folded(&fold_case(q))
    }

    /// Like [`Named::name_contains`], for a query already passed through
    /// [`fold_case`].
    #[inline]
    fn name_contains_folded(&self, folded_q: &str) -> bool {
        fold_case(self.name_th()).contains(folded_q) || fold_case(self.name_en()).contains(folded_q)
    }
}

/// The string-level query surface of the address database.
///
/// Ids and zip codes are passed as text and languages as codes; see
/// [`Lang::from_code`]. No operation fails: a lookup that finds nothing
/// returns `""`, an empty `Vec` or an empty [`Address`].
///
/// Province lookups keyed by district name always compare against the
/// district's **Thai** name. Operations that resolve a province through a
/// district they found first (`get_province_by_sub_district_name`,
/// `get_province_by_zip_code`, and the province part of the `get_address_*`
/// results) feed the district name in the requested language into that
/// Thai comparison, so they only find a province when `lang` is `"th"`.
pub trait AddressLookup {
    fn get_province(&self, id: &str, lang: &str) -> &str;
    fn get_district(&self, id: &str, lang: &str) -> &str;
    fn get_sub_district(&self, id: &str, lang: &str) -> &str;

    /// Name of the first sub-district, in storage order, with this zip code.
    fn get_sub_district_by_zip_code(&self, zip_code: &str, lang: &str) -> &str;

    /// All sub-districts of a district, in storage order.
    fn get_sub_district_by_district_id(&self, district_id: &str) -> Vec<&SubDistrict>;

    /// All districts of a province, in storage order.
    fn get_district_by_province_id(&self, province_id: &str) -> Vec<&District>;

    /// Province of the first district whose Thai name is exactly `district_name`.
    fn get_province_by_district_name(&self, district_name: &str, lang: &str) -> &str;

    fn get_province_by_sub_district_name(&self, sub_district_name: &str, lang: &str) -> &str;
    fn get_district_by_sub_district_name(&self, sub_district_name: &str, lang: &str) -> &str;
    fn get_province_by_zip_code(&self, zip_code: &str, lang: &str) -> &str;
    fn get_district_by_zip_code(&self, zip_code: &str, lang: &str) -> &str;

    /// Full address of the sub-district at exactly these coordinates.
    ///
    /// Both texts are parsed to `f64` before comparing, so `"13.7760"` finds
    /// a record stored as `13.776`; unparsable text finds nothing.
    fn get_address_by_lat_long(&self, latitude: &str, longitude: &str, lang: &str) -> Address<'_>;

    /// Full address of the first sub-district with this zip code.
    fn get_address_by_zip_code(&self, zip_code: &str, lang: &str) -> Address<'_>;
}
