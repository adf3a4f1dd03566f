use std::time::Duration;

/// Configures per-attempt timeout and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Timeout for a single attempt (send and body read), in milliseconds.
    pub timeout_ms: u64,
    /// Maximum number of retries after the initial attempt.
    pub max_retries: usize,
    /// Base delay between retries in milliseconds. Also caps `Retry-After` hints.
    pub retry_delay_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            max_retries: 3,
            retry_delay_ms: 10_000,
        }
    }
}

impl ClientOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Reads options from the environment, falling back to defaults.
    ///
    /// Reads:
    /// - `WIKI_TIMEOUT_MS`
    /// - `WIKI_RETRY_DELAY_MS`
    /// - `WIKI_MAX_RETRIES`
    ///
    /// Unset or empty variables keep their default. A value that does not
    /// parse as an unsigned integer is an error.
    pub fn from_env() -> std::result::Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> std::result::Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();
        if let Some(value) = read_number(&lookup, "WIKI_TIMEOUT_MS")? {
            opts.timeout_ms = value;
        }
        if let Some(value) = read_number(&lookup, "WIKI_RETRY_DELAY_MS")? {
            opts.retry_delay_ms = value;
        }
        if let Some(value) = read_number(&lookup, "WIKI_MAX_RETRIES")? {
            opts.max_retries = usize::try_from(value)
                .map_err(|err| format!("invalid WIKI_MAX_RETRIES value '{value}': {err}"))?;
        }
        Ok(opts)
    }
}

fn read_number<F>(lookup: &F, name: &str) -> std::result::Result<Option<u64>, String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|err| format!("invalid {name} value '{raw}': {err}")),
        _ => Ok(None),
    }
}
