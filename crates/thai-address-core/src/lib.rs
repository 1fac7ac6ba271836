// crates/thai-address-core/src/lib.rs

//! Read-only lookup of the Thai administrative hierarchy: provinces,
//! districts and sub-districts, by id, Thai name, zip code and coordinates,
//! with Thai / English display names.
//!
//! ```no_run
//! use thai_address_core::prelude::*;
//!
//! let db = AddressDb::load_from_dir("data")?;
//! assert_eq!(db.get_province("1", "en"), "Bangkok");
//! let address = db.get_address_by_zip_code("10200", "th");
//! println!("{} / {} / {}", address.sub_district, address.district, address.province);
//! # Ok::<(), thai_address_core::LoadError>(())
//! ```

pub mod common;
pub mod error;
pub mod loader;
mod lookup;
pub mod model;
pub mod prelude;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{DbStats, Level};
pub use crate::error::{LoadError, Result};
pub use crate::loader::DataSources;
pub use crate::model::{Address, AddressDb, District, Lang, Province, SubDistrict};
pub use crate::search::SearchHit;
pub use crate::traits::{AddressLookup, Named};
