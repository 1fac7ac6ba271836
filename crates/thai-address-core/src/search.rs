// crates/thai-address-core/src/search.rs
use crate::common::Level;
use crate::model::{AddressDb, District, Province, SubDistrict};
use crate::text::fold_case;
use crate::traits::Named;
use std::fmt;

/// One record matched by [`AddressDb::search_hits`].
///
/// Formats as `"<Kind>: <thai> / <english>"`, e.g.
/// `"Province: กรุงเทพมหานคร / Bangkok"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchHit<'a> {
    Province(&'a Province),
    District(&'a District),
    SubDistrict(&'a SubDistrict),
}

impl SearchHit<'_> {
    pub fn level(&self) -> Level {
        match self {
            SearchHit::Province(_) => Level::Province,
            SearchHit::District(_) => Level::District,
            SearchHit::SubDistrict(_) => Level::SubDistrict,
        }
    }

    fn named(&self) -> &dyn Named {
        match *self {
            SearchHit::Province(p) => p,
            SearchHit::District(d) => d,
            SearchHit::SubDistrict(s) => s,
        }
    }

    pub fn name_th(&self) -> &str {
        self.named().name_th()
    }

    pub fn name_en(&self) -> &str {
        self.named().name_en()
    }
}

impl fmt::Display for SearchHit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} / {}", self.level(), self.name_th(), self.name_en())
    }
}

impl AddressDb {
    /// Case-insensitive substring search over Thai and English names.
    ///
    /// Scans provinces, then districts, then sub-districts, keeping storage
    /// order inside each group. There is no ranking and no deduplication.
    /// An empty query matches every record.
    pub fn search_hits(&self, query: &str) -> Vec<SearchHit<'_>> {
        let q = fold_case(query);
        let mut out = Vec::new();

        for p in &self.provinces {
            if p.name_contains_folded(&q) {
                out.push(SearchHit::Province(p));
            }
        }

        for d in &self.districts {
            if d.name_contains_folded(&q) {
                out.push(SearchHit::District(d));
            }
        }

        for s in &self.sub_districts {
            if s.name_contains_folded(&q) {
                out.push(SearchHit::SubDistrict(s));
            }
        }

        out
    }

    /// [`AddressDb::search_hits`] rendered as display strings.
    pub fn search(&self, query: &str) -> Vec<String> {
        self.search_hits(query)
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}
