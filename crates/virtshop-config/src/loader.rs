// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading on Figment.
//!
//! A local `./virtshop.toml` beats `~/.config/virtshop/virtshop.toml`,
//! which beats `/etc/virtshop/virtshop.toml`; `VIRTSHOP_`-prefixed
//! environment variables beat them all.

#![allow(clippy::result_large_err)] // figment::Error is a large foreign type, boxing it here buys nothing

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::VirtshopConfig;

/// Config sections, used to map env var names onto dotted keys.
const SECTIONS: &[&str] = &["bot", "telegram", "shop"];

/// Load configuration from the default search path.
///
/// Layers, each overriding the one before:
/// 1. built-in defaults
/// 2. `/etc/virtshop/virtshop.toml` (system-wide)
/// 3. `~/.config/virtshop/virtshop.toml` (user XDG config)
/// 4. `./virtshop.toml` (local directory)
/// 5. `VIRTSHOP_*` environment variables
pub fn load_config() -> Result<VirtshopConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VirtshopConfig::default()))
        .merge(Toml::file("/etc/virtshop/virtshop.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("virtshop/virtshop.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("virtshop.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for tests and for callers that already hold the TOML text.
pub fn load_config_from_str(toml_content: &str) -> Result<VirtshopConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VirtshopConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file, with env overrides on top.
pub fn load_config_from_path(path: &Path) -> Result<VirtshopConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VirtshopConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider.
///
/// Uses `Env::map()` with explicit section prefixes rather than
/// `Env::split("_")`: key names contain underscores, and
/// `VIRTSHOP_TELEGRAM_BOT_TOKEN` must map to `telegram.bot_token`, not
/// `telegram.bot.token`. Matching whole section prefixes (instead of
/// substring replacement) also keeps the `bot` section from splitting
/// `bot_token` inside other sections.
fn env_provider() -> Env {
    Env::prefixed("VIRTSHOP_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: VIRTSHOP_TELEGRAM_BOT_TOKEN -> "telegram_bot_token"
        let key_str = key.as_str();
        for section in SECTIONS {
            if let Some(rest) = key_str.strip_prefix(section) {
                if let Some(field) = rest.strip_prefix('_') {
                    return format!("{section}.{field}").into();
                }
            }
        }
        key_str.to_string().into()
    })
}
