use super::*;

fn store(bu_code: &str, country_code: &str, name: &str) -> StoreRecord {
    StoreRecord {
        bu_code: bu_code.to_string(),
        country_code: country_code.to_string(),
        name: name.to_string(),
        country: None,
        coordinates: None,
    }
}

fn sample_directory() -> StoreDirectory {
    StoreDirectory::new(vec![
        store("421", "de", "Berlin-Spandau"),
        store("394", "de", "Berlin-Lichtenberg"),
        store("148", "de", "Hamburg-Altona"),
        store("186", "at", "Wien-Nord"),
        store("026", "us", "Berlin Heights"),
    ])
}

fn codes(stores: &[StoreRecord]) -> Vec<&str> {
    stores.iter().map(|s| s.bu_code.as_str()).collect()
}

#[test]
fn find_by_country_code_returns_only_matching_country() {
    let dir = sample_directory();
    let stores = dir.find_by_country_code("de");
    assert_eq!(codes(&stores), vec!["421", "394", "148"]);
    assert!(stores.iter().all(|s| s.country_code == "de"));
}

#[test]
fn find_by_country_code_is_case_insensitive() {
    let dir = sample_directory();
    assert_eq!(codes(&dir.find_by_country_code("AT")), vec!["186"]);
}

#[test]
fn find_by_country_code_unknown_is_empty() {
    let dir = sample_directory();
    assert!(dir.find_by_country_code("zz").is_empty());
}

#[test]
fn stores_matching_query_matches_name_substring() {
    let dir = sample_directory();
    let stores = dir.stores_matching_query(&["berlin"], Some("de"));
    assert_eq!(codes(&stores), vec!["421", "394"]);
}

#[test]
fn stores_matching_query_without_country_searches_everything() {
    let dir = sample_directory();
    let stores = dir.stores_matching_query(&["Berlin"], None);
    assert_eq!(codes(&stores), vec!["421", "394", "026"]);
}

#[test]
fn stores_matching_query_matches_bu_code() {
    let dir = sample_directory();
    let stores = dir.stores_matching_query(&["14"], None);
    assert_eq!(codes(&stores), vec!["148"]);
}

#[test]
fn stores_matching_query_unions_terms_in_discovery_order() {
    let dir = sample_directory();
    let stores = dir.stores_matching_query(&["hamburg", "spandau", "berlin"], Some("de"));
    assert_eq!(codes(&stores), vec!["148", "421", "394"]);
}

#[test]
fn stores_matching_query_treats_pattern_characters_literally() {
    let dir = sample_directory();
    assert!(dir.stores_matching_query(&["Berl.n"], None).is_empty());
}

#[test]
fn stores_matching_query_ignores_blank_terms() {
    let dir = sample_directory();
    assert!(dir.stores_matching_query(&["", "   "], None).is_empty());
}

#[test]
fn stores_by_id_removes_duplicates() {
    let dir = sample_directory();
    let stores = dir.stores_by_id(&["421", "421", "148"]);
    assert_eq!(codes(&stores), vec!["421", "148"]);
}

#[test]
fn stores_by_id_omits_unknown_codes() {
    let dir = sample_directory();
    let stores = dir.stores_by_id(&["999", "186", "000"]);
    assert_eq!(codes(&stores), vec!["186"]);
}

#[test]
fn stores_by_id_keeps_requested_order() {
    let dir = sample_directory();
    let stores = dir.stores_by_id(&["148", "421"]);
    assert_eq!(codes(&stores), vec!["148", "421"]);
}

#[test]
fn parse_store_directory_normalises_country_codes() {
    let yaml = r#"
stores:
  - bu_code: " 421 "
    country_code: DE
    name: Berlin-Spandau
    country: Germany
    coordinates:
      latitude: 52.53
      longitude: 13.2
"#;
    let dir = parse_store_directory(yaml).unwrap();
    assert_eq!(dir.len(), 1);
    let s = &dir.stores()[0];
    assert_eq!(s.bu_code, "421");
    assert_eq!(s.country_code, "de");
    assert_eq!(s.country.as_deref(), Some("Germany"));
    assert!(s.coordinates.is_some());
}

#[test]
fn parse_store_directory_rejects_duplicate_codes() {
    let yaml = r"
stores:
  - { bu_code: '421', country_code: de, name: A }
  - { bu_code: '421', country_code: de, name: B }
";
    let err = parse_store_directory(yaml).unwrap_err();
    assert!(err.to_string().contains("duplicate bu_code"), "got: {err}");
}

#[test]
fn parse_store_directory_rejects_empty_name() {
    let yaml = r"
stores:
  - { bu_code: '421', country_code: de, name: '  ' }
";
    let err = parse_store_directory(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)), "got: {err:?}");
}

#[test]
fn parse_store_directory_rejects_malformed_yaml() {
    let err = parse_store_directory("stores: [ {").unwrap_err();
    assert!(matches!(err, ConfigError::StoresFileParse(_)), "got: {err:?}");
}

#[test]
fn load_store_directory_reports_missing_file() {
    let err = load_store_directory(Path::new("./does/not/exist.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::StoresFileIo { .. }), "got: {err:?}");
}

#[test]
fn bundled_store_directory_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/stores.yaml");
    let dir = load_store_directory(&path).unwrap();
    assert!(!dir.is_empty());
    assert!(!dir.find_by_country_code("de").is_empty());
}
