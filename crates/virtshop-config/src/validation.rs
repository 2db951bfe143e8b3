// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic validation of configuration values.
//!
//! Type and structure errors are caught at deserialization time; this
//! module checks the values themselves and collects every problem in
//! one pass rather than bailing at the first.

use crate::diagnostic::ConfigError;
use crate::model::VirtshopConfig;

/// Log levels accepted by `bot.log_level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a configuration, collecting all errors.
///
/// Returns an empty vector when the config is valid.
pub fn validate_config(config: &VirtshopConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.bot.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "bot.name must not be empty".to_string(),
        });
    }

    if !VALID_LOG_LEVELS.contains(&config.bot.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "bot.log_level `{}` is not one of: {}",
                config.bot.log_level,
                VALID_LOG_LEVELS.join(", ")
            ),
        });
    }

    if let Some(chat_id) = config.telegram.admin_chat_id
        && chat_id == 0
    {
        errors.push(ConfigError::Validation {
            message: "telegram.admin_chat_id must be a real chat id, not 0".to_string(),
        });
    }

    if config.shop.support_contact.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "shop.support_contact must not be empty".to_string(),
        });
    }

    if config.shop.reviews_channel.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "shop.reviews_channel must not be empty".to_string(),
        });
    }

    let link = &config.shop.payment_link;
    if !link.starts_with("http://") && !link.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("shop.payment_link `{link}` must start with http:// or https://"),
        });
    }

    errors
}
