// Configuration type definitions

use serde::Deserialize;

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Search service connection section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// One form field: the query parameter name sent on the wire and the
/// label shown next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str) -> Self {
        FieldSpec {
            name: name.to_string(),
            label: label.to_string(),
        }
    }
}

/// The default deployment searches the companion-diagnostics table by
/// these four columns. Order here is the form's field order.
fn default_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("tumor_type", "Tumor Type"),
        FieldSpec::new("test", "Test"),
        FieldSpec::new("gene_mutations", "Gene Mutations"),
        FieldSpec::new("therapy", "Therapy"),
    ]
}

/// Form configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_fields")]
    pub fields: Vec<FieldSpec>,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            fields: default_fields(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub form: FormConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
