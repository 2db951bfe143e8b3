// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Miette diagnostics for configuration problems.
//!
//! Figment reports deserialization failures with bare field names and
//! figment-flavored wording. This module turns each failure into a
//! [`ConfigError`] that names the full dotted key, lists what the
//! section accepts, and offers a "did you mean" correction when a
//! known key is spelled almost right.

#![allow(unused_assignments)] // the Diagnostic derive expands to code that trips this lint

use miette::Diagnostic;
use thiserror::Error;

/// Jaro-Winkler score a key must beat before it is offered as a
/// correction. 0.75 catches `bot_tokn` without matching unrelated keys.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A single configuration problem, rendered through miette.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// A key that no section of the config model declares.
    #[error("unrecognized key `{key}`")]
    #[diagnostic(
        code(virtshop::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        /// The offending key, prefixed with its section.
        key: String,
        /// Closest valid key, when one scores above the threshold.
        suggestion: Option<String>,
        /// Comma-joined keys the section does accept.
        valid_keys: String,
    },

    /// A value whose type does not match the model.
    #[error("wrong type for `{key}`: {detail}")]
    #[diagnostic(code(virtshop::config::invalid_type), help("this key takes {expected}"))]
    InvalidType {
        /// The dotted key holding the bad value.
        key: String,
        /// What was found versus what the model wants.
        detail: String,
        /// The type the model wants.
        expected: String,
    },

    /// A key the model requires but no layer provided.
    #[error("required key `{key}` is not set")]
    #[diagnostic(
        code(virtshop::config::missing_key),
        help("set `{key}` in virtshop.toml or the matching VIRTSHOP_* environment variable")
    )]
    MissingKey {
        /// The absent key.
        key: String,
    },

    /// A well-typed value that fails a semantic check.
    #[error("invalid value: {message}")]
    #[diagnostic(code(virtshop::config::validation))]
    Validation {
        /// What the check rejected.
        message: String,
    },

    /// Anything figment reports that has no richer mapping.
    #[error("could not load configuration: {0}")]
    #[diagnostic(code(virtshop::config::other))]
    Other(String),
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? This section accepts: {valid_keys}"),
        None => format!("this section accepts: {valid_keys}"),
    }
}

/// Split a `figment::Error` into one [`ConfigError`] per failure.
///
/// Figment bundles every failure it finds into a single error value;
/// extraction with `deny_unknown_fields` can surface several at once.
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    err.into_iter().map(classify).collect()
}

fn classify(error: figment::Error) -> ConfigError {
    use figment::error::Kind;

    match &error.kind {
        Kind::UnknownField(field, expected) => unknown_field(&error.path, field, expected),
        Kind::MissingField(field) => ConfigError::MissingKey {
            key: field.clone().into_owned(),
        },
        Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
            key: error.path.join("."),
            detail: format!("found {actual}, expected {expected}"),
            expected: expected.to_string(),
        },
        _ => ConfigError::Other(error.to_string()),
    }
}

fn unknown_field(path: &[String], field: &str, expected: &[&str]) -> ConfigError {
    ConfigError::UnknownKey {
        // The error path holds the enclosing section, so the reported
        // key reads `telegram.bot_tokn` rather than a bare field name.
        key: dotted_key(path, field),
        suggestion: suggest_key(field, expected),
        valid_keys: expected.join(", "),
    }
}

/// Join a section path and field name into a dotted key.
fn dotted_key(path: &[String], field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{}.{field}", path.join("."))
    }
}

/// Pick the valid key most similar to `unknown`, if any scores above
/// the suggestion threshold.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|&key| (key, strsim::jaro_winkler(unknown, key)))
        .filter(|&(_, score)| score > SUGGESTION_THRESHOLD)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(key, _)| key.to_string())
}

/// Print every error to stderr as a miette graphical report.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    let mut out = String::new();
    for error in errors {
        if handler.render_report(&mut out, error).is_err() {
            out.push_str(&format!("error: {error}\n"));
        }
    }
    eprint!("{out}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_typo_earns_a_suggestion() {
        let valid = &["bot_token", "admin_chat_id"];
        assert_eq!(suggest_key("bot_tokn", valid), Some("bot_token".to_string()));
    }

    #[test]
    fn dropped_underscore_still_matches() {
        let valid = &["support_contact", "reviews_channel", "payment_link"];
        assert_eq!(
            suggest_key("paymentlink", valid),
            Some("payment_link".to_string())
        );
    }

    #[test]
    fn distant_strings_suggest_nothing() {
        let valid = &["name", "log_level"];
        assert_eq!(suggest_key("zzzzzz", valid), None);
    }

    #[test]
    fn dotted_key_prefixes_the_section() {
        assert_eq!(
            dotted_key(&["telegram".to_string()], "bot_tokn"),
            "telegram.bot_tokn"
        );
        assert_eq!(dotted_key(&[], "telegramm"), "telegramm");
    }

    #[test]
    fn help_text_leads_with_the_suggestion() {
        assert_eq!(
            unknown_key_help(Some("bot_token"), "bot_token, admin_chat_id"),
            "did you mean `bot_token`? This section accepts: bot_token, admin_chat_id"
        );
        assert_eq!(
            unknown_key_help(None, "name, log_level"),
            "this section accepts: name, log_level"
        );
    }
}
