// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serde models for the configuration file.
//!
//! Every section carries `#[serde(deny_unknown_fields)]` so a misspelled
//! key fails extraction instead of being silently ignored; the
//! diagnostics layer turns that failure into a suggestion.

use serde::{Deserialize, Serialize};

/// Top-level virtshop configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values; only the Telegram credentials have no usable default.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VirtshopConfig {
    /// Bot identity and logging settings.
    #[serde(default)]
    pub bot: BotConfig,

    /// Telegram credentials and the operator chat.
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Shop-facing links baked into replies.
    #[serde(default)]
    pub shop: ShopConfig,
}

/// Bot identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Display name of the bot.
    #[serde(default = "default_bot_name")]
    pub name: String,

    /// Log verbosity: trace, debug, info, warn, or error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            log_level: default_log_level(),
        }
    }
}

/// Telegram integration configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Bot API token from @BotFather. Required for `serve`.
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Chat id that receives finalized order summaries. Required for `serve`.
    #[serde(default)]
    pub admin_chat_id: Option<i64>,
}

/// Shop links shown to users.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ShopConfig {
    /// Support contact handed out by the Support shortcut.
    #[serde(default = "default_support_contact")]
    pub support_contact: String,

    /// Reviews channel handed out by the Reviews shortcut.
    #[serde(default = "default_reviews_channel")]
    pub reviews_channel: String,

    /// Payment link attached to confirmed orders. Test mode only.
    #[serde(default = "default_payment_link")]
    pub payment_link: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            support_contact: default_support_contact(),
            reviews_channel: default_reviews_channel(),
            payment_link: default_payment_link(),
        }
    }
}

fn default_bot_name() -> String {
    "virtshop".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_support_contact() -> String {
    "@virtshop_support".to_string()
}

fn default_reviews_channel() -> String {
    "https://t.me/virtshop_reviews".to_string()
}

fn default_payment_link() -> String {
    "https://payop.com/test".to_string()
}
