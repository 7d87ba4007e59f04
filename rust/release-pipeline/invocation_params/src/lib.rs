//! Key/value parameters assembled from several sources, where a later source
//! overrides an earlier one key by key.
//!
//! Both lambdas resolve their settings this way: built-in defaults first, then
//! whatever the deployment provides (environment, stage variables), then the
//! per-invocation values.

use std::collections::BTreeMap;


/// The merged parameter set of a single invocation.
///
/// A key can be present but unset, which serializes as `null`. This is how a
/// default without a value is declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct InvocationParams(BTreeMap<String, Option<String>>);

impl InvocationParams {
    /// Creates the base layer from a list of default values
    pub fn from_defaults<I, K, V>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::default().layer(defaults)
    }

    /// Declares a key without a value. Does nothing if the key already exists.
    pub fn with_unset(mut self, key: impl Into<String>) -> Self {
        self.0.entry(key.into()).or_insert(None);
        self
    }

    /// Applies a layer on top of the current values. Every key in the layer
    /// replaces the current value for that key.
    pub fn layer<I, K, V>(mut self, layer: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in layer {
            self.0.insert(key.into(), Some(value.into()));
        }
        self
    }

    /// Returns the value for a key. Absent and unset keys both return [None].
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_deref())
    }

    /// Like [Self::get] but treats an empty value as missing
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

/// Parses a `application/x-www-form-urlencoded` string into an ordered list of
/// pairs. `+` decodes to a space and duplicate keys are kept in order, so
/// layering the result makes the last occurrence win.
///
/// Decoding into string pairs does not reject any input. Invalid percent
/// escapes are kept as written.
pub fn parse_query_string(input: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str::<Vec<(String, String)>>(input).unwrap_or_default()
}
