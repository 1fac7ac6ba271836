//! Basic usage example for thai-address-rs
//!
//! Loads the bundled sample dataset (or `$THAI_ADDRESS_DATA_DIR`) and runs
//! a few lookups. Set `RUST_LOG=debug` to see the loader's log output.

use thai_address_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== thai-address-rs Basic Usage ===\n");

    let db = match AddressDb::load() {
        Ok(db) => db,
        Err(e) => {
            eprintln!("✗ Failed to load address database: {e}");
            return Err(e);
        }
    };
    let stats = db.stats();
    println!(
        "Loaded {} provinces, {} districts, {} sub-districts\n",
        stats.provinces, stats.districts, stats.sub_districts
    );

    println!("--- Identity lookups ---");
    println!("  Province 1 (th): {}", db.get_province("1", "th"));
    println!("  Province 1 (en): {}", db.get_province("1", "en"));
    println!("  Unknown id 999:  {:?}", db.get_province("999", "en"));
    println!();

    println!("--- Zip code 10200 ---");
    for lang in ["th", "en"] {
        let a = db.get_address_by_zip_code("10200", lang);
        println!(
            "  [{lang}] {} / {} / {}",
            a.sub_district, a.district, a.province
        );
    }
    println!();

    println!("--- Districts of Bangkok ---");
    for d in db.get_district_by_province_id("1") {
        println!("  - {} ({})", d.name_in_english, d.name_in_thai);
        for s in db.get_sub_district_by_district_id(&d.id.to_string()) {
            println!("      · {} {}", s.name(Lang::En), s.zip_code);
        }
    }
    println!();

    println!("--- Search \"chiang\" ---");
    for line in db.search("chiang") {
        println!("  {line}");
    }

    Ok(())
}
