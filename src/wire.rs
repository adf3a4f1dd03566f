use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Contents of the `error` object in an API response.
///
/// Wikis are not strict about field types here, so every field accepts any
/// JSON value and falls back to its textual form.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub info: String,
    /// Free-text detail, sent as `*` by the legacy JSON format.
    #[serde(default, rename = "*", deserialize_with = "lenient_string")]
    pub extra: String,
}

impl ErrorRecord {
    /// Builds a record from the `error` value, tolerating non-object shapes.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::deserialize(value).unwrap_or_default(),
            other => Self {
                info: text_of(other),
                ..Self::default()
            },
        }
    }

    /// Combines `info` and the free-text detail into one message.
    pub fn message(&self) -> String {
        let info = self.info.trim();
        let extra = self.extra.trim();
        match (info.is_empty(), extra.is_empty()) {
            (false, false) => format!("{info}. {extra}"),
            (false, true) => info.to_owned(),
            (true, _) => extra.to_owned(),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_of(&value))
}

/// Reads a legacy-format boolean, where `true` is sent as the presence of
/// the key (usually with an empty string) and `false` as its absence.
///
/// Pair with `#[serde(default)]` so a missing key reads as `false`. JSON
/// booleans from the newer format are taken at face value, `null` is `false`.
///
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// #[serde(rename_all = "lowercase")]
/// struct Page {
///     #[serde(default, deserialize_with = "mediawiki_http::wiki_bool")]
///     redirect: bool,
/// }
///
/// let page: Page = serde_json::from_str(r#"{"redirect": ""}"#).unwrap();
/// assert!(page.redirect);
/// ```
pub fn wiki_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::Null => false,
        _ => true,
    })
}

fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
