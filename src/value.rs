use chrono::{DateTime, TimeZone, Utc};

/// How an edit affects the user's watchlist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutoWatchBehavior {
    /// Follow the user's preferences.
    #[default]
    Default,
    /// Leave the watchlist untouched.
    None,
    Watch,
    Unwatch,
}

impl AutoWatchBehavior {
    /// Wire token for the `watchlist` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "preferences",
            Self::None => "nochange",
            Self::Watch => "watch",
            Self::Unwatch => "unwatch",
        }
    }
}

/// Three-way filter on whether a page has some property, e.g. `filterredir`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropertyFilter {
    /// No filtering.
    #[default]
    Disable,
    WithProperty,
    WithoutProperty,
}

impl PropertyFilter {
    /// Picks the module-specific token, using `all` for [`PropertyFilter::Disable`].
    pub fn to_query_value(self, with_value: &str, without_value: &str) -> String {
        self.to_query_value_or(with_value, without_value, "all")
    }

    /// Like [`PropertyFilter::to_query_value`] for modules whose
    /// unfiltered token is not `all`.
    pub fn to_query_value_or(self, with_value: &str, without_value: &str, all_value: &str) -> String {
        match self {
            Self::Disable => all_value,
            Self::WithProperty => with_value,
            Self::WithoutProperty => without_value,
        }
        .to_owned()
    }
}

impl From<PropertyFilter> for QueryValue {
    /// Uses the `filterredir` tokens.
    fn from(value: PropertyFilter) -> Self {
        Self::Text(value.to_query_value("redirects", "nonredirects"))
    }
}

/// Loosely typed value of a query parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    Null,
    Text(String),
    /// `true` is sent as a presence flag, `false` drops the parameter.
    Bool(bool),
    Integer(i64),
    Float(f64),
    AutoWatch(AutoWatchBehavior),
    DateTime(DateTime<Utc>),
}

impl QueryValue {
    pub fn null() -> Self {
        Self::Null
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn flag(value: bool) -> Self {
        Self::Bool(value)
    }

    /// Wire form of the value, or `None` when the parameter must be omitted.
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            Self::Null | Self::Bool(false) => None,
            Self::Bool(true) => Some(String::new()),
            Self::Text(value) => Some(value.clone()),
            Self::Integer(value) => Some(value.to_string()),
            Self::Float(value) => Some(value.to_string()),
            Self::AutoWatch(value) => Some(value.as_str().to_owned()),
            // ISO 8601, second precision.
            Self::DateTime(value) => Some(value.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<AutoWatchBehavior> for QueryValue {
    fn from(value: AutoWatchBehavior) -> Self {
        Self::AutoWatch(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for QueryValue {
    fn from(value: DateTime<Tz>) -> Self {
        Self::DateTime(value.with_timezone(&Utc))
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
