//! thai-address-rs
//!
//! Workspace umbrella crate. Re-exports [`thai_address_core`] so the demos
//! under `demos/` and downstream users can depend on a single crate.

pub use thai_address_core::*;
