mod common;

use common::fixture_db;
use thai_address_core::prelude::*;

#[test]
fn identity_lookups_pick_language() {
    let db = fixture_db();

    assert_eq!(db.get_province("1", "th"), "กรุงเทพมหานคร");
    assert_eq!(db.get_province("1", "en"), "Bangkok");
    assert_eq!(db.get_district("1002", "th"), "เขตดุสิต");
    assert_eq!(db.get_district("1002", "en"), "Khet Dusit");
    assert_eq!(db.get_sub_district("500102", "th"), "พระสิงห์");
    assert_eq!(db.get_sub_district("500102", "en"), "Phra Sing");
}

#[test]
fn any_language_other_than_th_means_english() {
    let db = fixture_db();

    for lang in ["en", "TH", "Th", "", "jp", "thai"] {
        assert_eq!(db.get_province("38", lang), "Chiang Mai", "lang {lang:?}");
    }
}

#[test]
fn every_loaded_id_resolves_in_both_languages() {
    let db = fixture_db();

    for p in db.provinces() {
        assert_eq!(db.get_province(&p.id.to_string(), "th"), p.name_in_thai);
        assert_eq!(db.get_province(&p.id.to_string(), "en"), p.name_in_english);
    }
    for d in db.districts() {
        assert_eq!(db.get_district(&d.id.to_string(), "th"), d.name_in_thai);
        assert_eq!(db.get_district(&d.id.to_string(), "en"), d.name_in_english);
    }
    for s in db.sub_districts() {
        assert_eq!(db.get_sub_district(&s.id.to_string(), "th"), s.name_in_thai);
        assert_eq!(db.get_sub_district(&s.id.to_string(), "en"), s.name_in_english);
    }
}

#[test]
fn unknown_ids_return_empty_strings() {
    let db = fixture_db();

    for id in ["42", "0", "", "abc", "01", " 1", "-1", "99999999999"] {
        assert_eq!(db.get_province(id, "th"), "", "id {id:?}");
        assert_eq!(db.get_district(id, "en"), "", "id {id:?}");
        assert_eq!(db.get_sub_district(id, "th"), "", "id {id:?}");
    }
}

#[test]
fn shared_zip_code_resolves_to_first_sub_district() {
    let db = fixture_db();

    assert_eq!(
        db.get_sub_district_by_zip_code("10200", "en"),
        "Phra Borom Maha Ratchawang"
    );
    assert_eq!(db.get_sub_district_by_zip_code("50200", "th"), "ศรีภูมิ");
    assert_eq!(db.get_sub_district_by_zip_code("10400", "th"), "");
    assert_eq!(db.get_sub_district_by_zip_code("010200", "th"), "");
}

#[test]
fn children_are_returned_in_storage_order() {
    let db = fixture_db();

    let ids: Vec<u32> = db
        .get_sub_district_by_district_id("1001")
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![100101, 100102, 100103]);

    let ids: Vec<u32> = db
        .get_district_by_province_id("1")
        .iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, vec![1001, 1002]);

    assert!(db.get_sub_district_by_district_id("7").is_empty());
    assert!(db.get_district_by_province_id("3").is_empty());
    assert!(db.get_district_by_province_id("one").is_empty());
}

#[test]
fn child_counts_match_foreign_keys() {
    let db = fixture_db();

    for p in db.provinces() {
        let expected = db.districts().iter().filter(|d| d.province_id == p.id).count();
        assert_eq!(db.get_district_by_province_id(&p.id.to_string()).len(), expected);
    }
    for d in db.districts() {
        let expected = db
            .sub_districts()
            .iter()
            .filter(|s| s.district_id == d.id)
            .count();
        assert_eq!(db.get_sub_district_by_district_id(&d.id.to_string()).len(), expected);
    }
}

#[test]
fn dangling_parents_still_list_their_children() {
    let db = fixture_db();

    // Province 77 and district 8888 do not exist.
    let districts = db.get_district_by_province_id("77");
    assert_eq!(districts.len(), 1);
    assert_eq!(districts[0].name_in_english, "Ghost District");

    let subs = db.get_sub_district_by_district_id("8888");
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].id, 990101);
}

#[test]
fn province_by_district_name_matches_thai_names_only() {
    let db = fixture_db();

    assert_eq!(db.get_province_by_district_name("เขตดุสิต", "th"), "กรุงเทพมหานคร");
    assert_eq!(db.get_province_by_district_name("เขตดุสิต", "en"), "Bangkok");
    assert_eq!(db.get_province_by_district_name("Khet Dusit", "en"), "");
    assert_eq!(db.get_province_by_district_name("เขตดุสิ", "th"), "");
}

#[test]
fn province_by_district_name_round_trips_for_every_district() {
    let db = fixture_db();

    for d in db.districts() {
        assert_eq!(
            db.get_province_by_district_name(&d.name_in_thai, "en"),
            db.get_province(&d.province_id.to_string(), "en"),
            "district {}",
            d.id
        );
    }
}

#[test]
fn province_by_sub_district_name_only_resolves_in_thai() {
    let db = fixture_db();

    assert_eq!(db.get_province_by_sub_district_name("ดุสิต", "th"), "กรุงเทพมหานคร");
    // The district name is localized before the Thai-name province lookup.
    assert_eq!(db.get_province_by_sub_district_name("ดุสิต", "en"), "");
    assert_eq!(db.get_province_by_sub_district_name("Dusit", "th"), "");
}

#[test]
fn district_by_sub_district_name_uses_requested_language() {
    let db = fixture_db();

    assert_eq!(db.get_district_by_sub_district_name("ดุสิต", "th"), "เขตดุสิต");
    assert_eq!(db.get_district_by_sub_district_name("ดุสิต", "en"), "Khet Dusit");
    assert_eq!(db.get_district_by_sub_district_name("Dusit", "en"), "");
    assert_eq!(db.get_district_by_sub_district_name("ตำบลกำพร้า", "th"), "");
}

#[test]
fn zip_code_chains() {
    let db = fixture_db();

    assert_eq!(db.get_province_by_zip_code("50200", "th"), "เชียงใหม่");
    assert_eq!(db.get_province_by_zip_code("50200", "en"), "");
    assert_eq!(db.get_district_by_zip_code("10270", "en"), "Mueang Samut Prakan");
    assert_eq!(db.get_district_by_zip_code("10270", "th"), "เมืองสมุทรปราการ");

    // District 8888 is missing.
    assert_eq!(db.get_district_by_zip_code("99999", "en"), "");
    assert_eq!(db.get_province_by_zip_code("99999", "th"), "");
    assert_eq!(db.get_province_by_zip_code("12345", "th"), "");
}

#[test]
fn address_by_lat_long_matches_exact_coordinates() {
    let db = fixture_db();

    let th = db.get_address_by_lat_long("13.776", "100.52", "th");
    assert_eq!(
        th,
        Address {
            province: "กรุงเทพมหานคร",
            district: "เขตดุสิต",
            sub_district: "ดุสิต",
        }
    );

    let en = db.get_address_by_lat_long("13.776", "100.52", "en");
    assert_eq!(<(&str, &str, &str)>::from(en), ("", "Khet Dusit", "Dusit"));

    // Same f64 value, different spelling.
    assert_eq!(db.get_address_by_lat_long("13.7760", "100.520", "th"), th);

    assert!(db.get_address_by_lat_long("13.7761", "100.52", "th").is_empty());
    assert!(db.get_address_by_lat_long("13.776", "north", "th").is_empty());
    assert!(db.get_address_by_lat_long("100.52", "13.776", "th").is_empty());
}

#[test]
fn address_with_dangling_province_has_empty_province() {
    let db = fixture_db();

    let a = db.get_address_by_lat_long("15", "101", "th");
    assert_eq!(a.province, "");
    assert_eq!(a.district, "อำเภอร้าง");
    assert_eq!(a.sub_district, "บ้านร้าง");
    assert!(!a.is_empty());
}

#[test]
fn address_by_zip_code_uses_first_match() {
    let db = fixture_db();

    let a = db.get_address_by_zip_code("10200", "th");
    assert_eq!(a.province, "กรุงเทพมหานคร");
    assert_eq!(a.district, "เขตพระนคร");
    assert_eq!(a.sub_district, "พระบรมมหาราชวัง");

    let a = db.get_address_by_zip_code("10200", "en");
    assert_eq!(a.province, "");
    assert_eq!(a.district, "Khet Phra Nakhon");
    assert_eq!(a.sub_district, "Phra Borom Maha Ratchawang");

    let orphan = db.get_address_by_zip_code("99999", "th");
    assert_eq!(<(&str, &str, &str)>::from(orphan), ("", "", "ตำบลกำพร้า"));

    assert_eq!(db.get_address_by_zip_code("00000", "th"), Address::default());
}

#[test]
fn typed_finders_return_options() {
    let db = fixture_db();

    assert_eq!(db.find_province(2).map(|p| p.code), Some(11));
    assert!(db.find_province(3).is_none());
    assert_eq!(
        db.find_district_by_thai_name("เมืองเชียงใหม่").map(|d| d.province_id),
        Some(38)
    );
    assert_eq!(db.find_sub_district_by_zip_code(10300).map(|s| s.id), Some(100201));
    assert_eq!(
        db.find_sub_district_by_lat_long(18.788, 98.982)
            .map(|s| s.name(Lang::En)),
        Some("Phra Sing")
    );
    assert!(db.find_sub_district_by_thai_name("Phra Sing").is_none());
}

#[test]
fn stats_count_every_collection() {
    let db = fixture_db();

    assert_eq!(
        db.stats(),
        DbStats {
            provinces: 3,
            districts: 5,
            sub_districts: 9,
        }
    );
}

#[test]
fn database_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AddressDb>();

    let db = std::sync::Arc::new(fixture_db());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let db = std::sync::Arc::clone(&db);
            std::thread::spawn(move || db.get_province("38", "en").to_string())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "Chiang Mai");
    }
}
