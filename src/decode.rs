use std::io::Read;

use crate::{Document, WikiError};

/// Decodes a JSON document straight from a byte stream.
///
/// Every failure surfaces as [`WikiError::MalformedResponse`], which the
/// transport treats as retryable. The transport hands in a fully buffered
/// body, so a failing reader means the body was cut short.
pub(crate) fn decode_document<R: Read>(reader: R) -> Result<Document, WikiError> {
    serde_json::from_reader(reader).map_err(WikiError::MalformedResponse)
}
