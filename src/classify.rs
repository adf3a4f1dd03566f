//! Maps the wiki's `error` vocabulary onto [`WikiError`].
//!
//! Rules are evaluated top-down; the first match wins and
//! [`WikiError::OperationFailed`] catches everything else.

use crate::{wire::ErrorRecord, Document, WikiError};

struct ErrorRule {
    matches: fn(&str) -> bool,
    build: fn(String, String) -> WikiError,
}

const ERROR_RULES: &[ErrorRule] = &[
    ErrorRule {
        matches: is_permission_denied,
        build: |_, message| WikiError::UnauthorizedOperation(message),
    },
    ErrorRule {
        matches: is_unknown_action,
        build: |code, message| WikiError::InvalidAction { code, message },
    },
    ErrorRule {
        matches: is_conflict,
        build: |code, message| WikiError::OperationConflict { code, message },
    },
];

// readapidenied: the account has no read right at all.
fn is_permission_denied(code: &str) -> bool {
    matches!(code, "permissiondenied" | "readapidenied")
}

fn is_unknown_action(code: &str) -> bool {
    code == "unknown_action"
}

fn is_conflict(code: &str) -> bool {
    code.ends_with("conflict")
}

/// Inspects a decoded response and returns the error it reports, if any.
///
/// Non-object documents are never classified. A `warnings` member is logged
/// and otherwise ignored.
pub fn classify(document: &Document) -> Option<WikiError> {
    let object = document.as_object()?;

    if let Some(warnings) = object.get("warnings") {
        tracing::warn!(%warnings, "api returned warnings");
    }

    let record = ErrorRecord::from_value(object.get("error")?);
    let message = record.message();
    let rule = ERROR_RULES.iter().find(|rule| (rule.matches)(&record.code));
    Some(match rule {
        Some(rule) => (rule.build)(record.code, message),
        None => WikiError::OperationFailed {
            code: record.code,
            message,
        },
    })
}
