//! Tests for config types

use super::*;

#[test]
fn test_default_api_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.api.timeout_secs, 30);
}

#[test]
fn test_default_form_fields() {
    let config = Config::default();
    let names: Vec<&str> = config.form.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["tumor_type", "test", "gene_mutations", "therapy"]);
    assert_eq!(config.form.fields[0].label, "Tumor Type");
}

#[test]
fn test_parse_api_section() {
    let toml = r#"
[api]
base_url = "https://cdx-backend.onrender.com"
timeout_secs = 10
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.api.base_url, "https://cdx-backend.onrender.com");
    assert_eq!(config.api.timeout_secs, 10);
    // Unspecified sections keep their defaults
    assert_eq!(config.form.fields.len(), 4);
}

#[test]
fn test_parse_custom_field_set() {
    let toml = r#"
[[form.fields]]
name = "diagnostic_name"
label = "Diagnostic Name (Manufacturer)"

[[form.fields]]
name = "biomarker"
label = "Biomarker(s)"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.form.fields.len(), 2);
    assert_eq!(
        config.form.fields[0],
        FieldSpec::new("diagnostic_name", "Diagnostic Name (Manufacturer)")
    );
    assert_eq!(config.form.fields[1].name, "biomarker");
}

#[test]
fn test_field_missing_label_fails_parse() {
    let toml = r#"
[[form.fields]]
name = "biomarker"
"#;
    let config: Result<Config, _> = toml::from_str(toml);
    assert!(config.is_err());
}

#[test]
fn test_empty_toml_is_all_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}
