use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert!(!cfg.clear_session_on_forbidden);
}

#[test]
fn parses_overrides() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        (API_URL_VAR, "https://api.example.test/v1/"),
        (REQUEST_TIMEOUT_VAR, "42"),
        (CONNECT_TIMEOUT_VAR, " 7 "),
        (CLEAR_ON_FORBIDDEN_VAR, "Yes"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base_url, "https://api.example.test/v1");
    assert_eq!(cfg.request_timeout_secs, 42);
    assert_eq!(cfg.connect_timeout_secs, 7);
    assert!(cfg.clear_session_on_forbidden);
}

#[test]
fn unparseable_numbers_fall_back_to_defaults() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[(REQUEST_TIMEOUT_VAR, "soon")])).unwrap();
    assert_eq!(cfg.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn rejects_non_http_base_url() {
    let err = ClientConfig::from_lookup(lookup_from(&[(API_URL_VAR, "ftp://files.test")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("ftp://files.test".to_owned()));
}

#[test]
fn rejects_scheme_without_host() {
    assert!(ClientConfig::from_lookup(lookup_from(&[(API_URL_VAR, "https://")])).is_err());
}

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "False", "no", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}
