use std::fmt;
use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use reqwest::{
    header::{self, HeaderMap},
    Method,
};
use tokio::time::{sleep, timeout};
use tracing::{instrument::WithSubscriber, Dispatch};

use crate::{
    classify, decode::decode_document, ClientOptions, Document, QueryParams, Result, WikiError,
};

const USER_AGENT: &str = concat!("mediawiki-http/", env!("CARGO_PKG_VERSION"));

// Obsolete HTTP-date forms recipients must still accept: RFC 850 and asctime.
const RFC850_DATE: &str = "%A, %d-%b-%y %H:%M:%S GMT";
const ASCTIME_DATE: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Clone)]
/// Resilient JSON client for a wiki's `api.php` endpoint.
pub struct WikiClient {
    http: reqwest::Client,
    endpoint: String,
    options: ClientOptions,
    logger: Option<Dispatch>,
    // Only set for clients built by `new`; a supplied client keeps its own.
    user_agent: Option<&'static str>,
}

impl fmt::Debug for WikiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WikiClient")
            .field("endpoint", &self.endpoint)
            .field("options", &self.options)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

impl WikiClient {
    /// Creates a client for the given `api.php` URL.
    ///
    /// Convenience calls identify themselves as `mediawiki-http/<version>`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            user_agent: Some(USER_AGENT),
            ..Self::with_http_client(endpoint, reqwest::Client::new())
        }
    }

    /// Creates a client on top of an existing `reqwest` client.
    ///
    /// Use this to set a custom user agent, cookie store or proxy.
    pub fn with_http_client(endpoint: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            options: ClientOptions::default(),
            logger: None,
            user_agent: None,
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `WIKI_API_ENDPOINT` — full `api.php` URL
    ///   (e.g. `https://en.wikipedia.org/w/api.php`)
    /// - everything [`ClientOptions::from_env`] reads
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mediawiki_http::WikiClient;
    ///
    /// let wiki = WikiClient::from_env().expect("missing WIKI_API_ENDPOINT");
    /// ```
    pub fn from_env() -> std::result::Result<Self, String> {
        let endpoint = std::env::var("WIKI_API_ENDPOINT")
            .map_err(|_| "missing WIKI_API_ENDPOINT environment variable".to_owned())?;
        if endpoint.trim().is_empty() {
            return Err("WIKI_API_ENDPOINT is set but empty".to_owned());
        }
        let options = ClientOptions::from_env()?;
        Ok(Self::new(endpoint.trim()).with_options(options))
    }

    /// Applies timeout and retry options.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    /// Routes this client's trace and warning events to `logger`.
    ///
    /// Without a logger the client emits nothing, whatever global
    /// subscriber is installed.
    pub fn with_logger(mut self, logger: impl Into<Dispatch>) -> Self {
        self.logger = Some(logger.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Underlying HTTP client, for building requests passed to [`WikiClient::send`].
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Sends `format=json` plus `params` as a GET query.
    pub async fn get_json<P: Into<QueryParams>>(&self, params: P) -> Result<Document> {
        let pairs = with_json_format(params.into());
        self.send(|| self.request(Method::GET).query(&pairs), true)
            .await
    }

    /// Sends `format=json` plus `params` as a url-encoded POST form.
    pub async fn post_values<P: Into<QueryParams>>(&self, params: P) -> Result<Document> {
        let pairs = with_json_format(params.into());
        self.send(|| self.request(Method::POST).form(&pairs), true)
            .await
    }

    fn request(&self, method: Method) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, &self.endpoint);
        match self.user_agent {
            Some(agent) => builder.header(header::USER_AGENT, agent),
            None => builder,
        }
    }

    /// Runs one API call through the retry loop.
    ///
    /// `factory` is invoked once per attempt and must build a fresh request
    /// every time. Timeouts, `5xx` answers carrying a `Retry-After` hint and
    /// non-JSON bodies are retried while `allow_retry` is set and attempts
    /// remain. API errors are never retried.
    pub async fn send<F>(&self, factory: F, allow_retry: bool) -> Result<Document>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let logger = self.logger.clone().unwrap_or_else(Dispatch::none);
        self.send_with_retry(factory, allow_retry)
            .with_subscriber(logger)
            .await
    }

    async fn send_with_retry<F>(&self, factory: F, allow_retry: bool) -> Result<Document>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let max_retries = self.options.max_retries;
        let mut attempt = 0usize;
        loop {
            let (http, request) = factory().build_split();
            let request = request.map_err(WikiError::Transport)?;
            let url = request.url().clone();
            if attempt > 0 {
                tracing::trace!(attempt, %url, "retrying request");
            }
            let can_retry = allow_retry && attempt < max_retries;

            // Fresh deadline per attempt, covering send and body read.
            let exchange = timeout(self.options.timeout(), async move {
                let response = http.execute(request).await?;
                let status = response.status();
                let headers = response.headers().clone();
                let body = response.bytes().await?;
                Ok::<_, reqwest::Error>((status, headers, body))
            })
            .await;

            // Timeouts set on the reqwest client or request count as ours.
            let (status, headers, body) = match exchange {
                Ok(Ok(parts)) => parts,
                Ok(Err(err)) if !err.is_timeout() => return Err(WikiError::Transport(err)),
                Ok(Err(_)) | Err(_) => {
                    tracing::warn!(attempt, %url, "request timed out");
                    if !can_retry {
                        return Err(WikiError::Timeout);
                    }
                    sleep(self.options.retry_delay()).await;
                    attempt += 1;
                    continue;
                }
            };
            tracing::trace!(status = status.as_u16(), %url, "received response");

            // 5xx is only retried when the server says when to come back.
            if status.is_server_error() && can_retry {
                if let Some(hint) = retry_after(&headers, Utc::now()) {
                    let delay = hint.min(self.options.retry_delay());
                    tracing::debug!("server busy, retrying after {} ms", delay.as_millis());
                    sleep(delay).await;
                    attempt += 1;
                    continue;
                }
            }

            if !status.is_success() {
                return Err(WikiError::Http {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&body).into_owned(),
                });
            }

            let document = match decode_document(&body[..]) {
                Ok(document) => document,
                Err(err) => {
                    tracing::warn!(attempt, %url, "received non-json content");
                    if !can_retry {
                        return Err(err);
                    }
                    attempt += 1;
                    continue;
                }
            };

            return match classify(&document) {
                Some(err) => Err(err),
                None => Ok(document),
            };
        }
    }
}

/// Reads a `Retry-After` header in either delta-seconds or HTTP-date form.
///
/// A date already in the past yields a zero wait.
fn retry_after(headers: &HeaderMap, now: DateTime<Utc>) -> Option<Duration> {
    let value = headers.get(header::RETRY_AFTER)?.to_str().ok()?.trim();
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }
    let date = parse_http_date(value)?;
    Some((date - now).to_std().unwrap_or(Duration::ZERO))
}

fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc2822(value) {
        return Some(date.with_timezone(&Utc));
    }
    [RFC850_DATE, ASCTIME_DATE]
        .into_iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn with_json_format(params: QueryParams) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if !params.contains_key("format") {
        pairs.push(("format".to_owned(), "json".to_owned()));
    }
    pairs.extend(params.into_pairs());
    pairs
}
