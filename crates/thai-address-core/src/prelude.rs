//! thai-address prelude: bring common types and traits into scope.

pub use crate::common::{DbStats, Level};
pub use crate::error::{LoadError, Result};
pub use crate::loader::DataSources;
pub use crate::model::{Address, AddressDb, District, Lang, Province, SubDistrict};
pub use crate::search::SearchHit;
pub use crate::traits::{AddressLookup, Named};
