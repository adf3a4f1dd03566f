//! `mediawiki-http` is a resilient async transport for the MediaWiki action API.
//!
//! [`WikiClient::send`] drives a single API call: it retries timeouts,
//! server-directed `5xx` backoff and garbled bodies, decodes the JSON
//! response and turns the wiki's `error` object into a typed [`WikiError`].
//!
//! Helpers for building requests live alongside it:
//! - [`QueryParams`] / [`QueryValue`] for parameter coercion
//! - [`partition`] for batching titles or ids
//! - [`normalize_title_part`] for canonical titles

mod classify;
mod client;
mod decode;
mod error;
mod options;
mod params;
mod partition;
mod title;
mod value;
mod wire;

pub use classify::classify;
pub use client::WikiClient;
pub use error::WikiError;
pub use options::ClientOptions;
pub use params::QueryParams;
pub use partition::partition;
pub use title::normalize_title_part;
pub use value::{AutoWatchBehavior, PropertyFilter, QueryValue};
pub use wire::{wiki_bool, ErrorRecord};

/// A decoded API response body.
pub type Document = serde_json::Value;

pub type Result<T> = std::result::Result<T, WikiError>;
