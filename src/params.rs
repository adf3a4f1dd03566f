use crate::QueryValue;

/// Ordered query/form parameters for an API call.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryParams {
    /// Ready-made string pairs, sent exactly as given.
    Strings(Vec<(String, String)>),
    /// Typed values coerced with [`QueryValue::to_query_value`].
    Values(Vec<(String, QueryValue)>),
}

impl QueryParams {
    /// Builds parameters from typed values.
    pub fn values<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<QueryValue>,
    {
        Self::Values(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds parameters from plain strings.
    pub fn strings<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Strings(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Materializes the key/value pairs sent on the wire.
    ///
    /// Pairs whose value coerces to nothing (null, `false`) are dropped.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        match self {
            Self::Strings(pairs) => pairs,
            Self::Values(pairs) => pairs
                .into_iter()
                .filter_map(|(key, value)| value.to_query_value().map(|value| (key, value)))
                .collect(),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        match self {
            Self::Strings(pairs) => pairs.iter().any(|(name, _)| name == key),
            Self::Values(pairs) => pairs.iter().any(|(name, _)| name == key),
        }
    }
}

impl Default for QueryParams {
    fn default() -> Self {
        Self::Values(Vec::new())
    }
}

impl From<()> for QueryParams {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<Vec<(String, QueryValue)>> for QueryParams {
    fn from(pairs: Vec<(String, QueryValue)>) -> Self {
        Self::Values(pairs)
    }
}

impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::Strings(pairs)
    }
}

impl<const N: usize> From<[(&str, QueryValue); N]> for QueryParams {
    fn from(pairs: [(&str, QueryValue); N]) -> Self {
        Self::values(pairs)
    }
}
