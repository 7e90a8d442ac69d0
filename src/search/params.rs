//! Query parameter construction
//!
//! The service accepts any subset of the deployment's field names as GET
//! query parameters. Empty fields are never sent; key and value are
//! URL-encoded independently.

use crate::form::FormState;

/// Collect the non-empty `(name, value)` pairs in declared field order
pub fn build_pairs(form: &FormState) -> Vec<(String, String)> {
    form.entries()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Serialize pairs as `key=value` joined by `&`, both sides URL-encoded.
/// An empty pair list serializes to the empty string.
pub fn serialize_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod params_tests;
