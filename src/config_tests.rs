//! Tests for config loading

use super::*;
use proptest::prelude::*;

#[test]
fn test_config_path_is_under_home() {
    let path = get_config_path();
    assert!(path.ends_with(".config/therafind/config.toml"));
}

// For any malformed TOML syntax, parsing fails and load_config would fall
// back to Config::default() with a warning rather than aborting startup.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_malformed_toml_fails_parse(garbage in "[=\\[\\]{}a-z]{1,20}") {
        let parsed: Result<Config, _> = toml::from_str(&format!("[api\n{}", garbage));
        prop_assert!(parsed.is_err(), "Malformed TOML should fail to parse");

        let fallback = Config::default();
        prop_assert_eq!(fallback.api.base_url, "http://127.0.0.1:8000");
    }
}
