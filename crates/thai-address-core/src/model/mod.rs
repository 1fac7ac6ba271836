// crates/thai-address-core/src/model/mod.rs
pub mod db;
pub mod records;

pub use db::{Address, AddressDb};
pub use records::{District, Lang, Province, SubDistrict};
