//! Form parameter decoding.
//!
//! # Responsibilities
//! - Decode `application/x-www-form-urlencoded` input (query string or POST body)
//! - Expose decoded fields as a simple name → value lookup
//!
//! # Design Decisions
//! - Percent-decoding and `+` → space are delegated to `url::form_urlencoded`
//! - Duplicate keys resolve to the first occurrence
//! - A key without `=` decodes to an empty value

use std::collections::HashMap;

use url::form_urlencoded;

/// Decoded form parameters from a CGI request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    fields: HashMap<String, String>,
}

impl FormParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an urlencoded byte string (e.g. `num1=2&num2=3`).
    ///
    /// Duplicate keys keep their first value.
    pub fn parse_urlencoded(input: &str) -> Self {
        let mut fields = HashMap::new();
        for (key, value) in form_urlencoded::parse(input.as_bytes()) {
            fields
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self { fields }
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Number of distinct fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if no fields were submitted.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = HashMap::new();
        for (key, value) in iter {
            fields.entry(key.into()).or_insert_with(|| value.into());
        }
        Self { fields }
    }
}
