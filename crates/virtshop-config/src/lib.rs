// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loading and validation for virtshop.
//!
//! Configuration is layered: built-in defaults, then TOML files
//! (`/etc/virtshop/virtshop.toml`, the XDG config directory, then
//! `./virtshop.toml`), then `VIRTSHOP_*` environment variables. Errors
//! are reported as miette diagnostics with fuzzy match suggestions for
//! misspelled keys.

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{figment_to_config_errors, render_errors, suggest_key, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{BotConfig, ShopConfig, TelegramConfig, VirtshopConfig};
pub use validation::validate_config;

use std::path::Path;

/// Load configuration from the default locations and validate it.
///
/// Returns the config on success, or every deserialization and
/// validation error found.
pub fn load_and_validate() -> Result<VirtshopConfig, Vec<ConfigError>> {
    let config = load_config().map_err(figment_to_config_errors)?;
    finish(config)
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml: &str) -> Result<VirtshopConfig, Vec<ConfigError>> {
    let config = load_config_from_str(toml).map_err(figment_to_config_errors)?;
    finish(config)
}

/// Load configuration from an explicit file path and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<VirtshopConfig, Vec<ConfigError>> {
    let config = load_config_from_path(path).map_err(figment_to_config_errors)?;
    finish(config)
}

fn finish(config: VirtshopConfig) -> Result<VirtshopConfig, Vec<ConfigError>> {
    let errors = validate_config(&config);
    if errors.is_empty() {
        Ok(config)
    } else {
        Err(errors)
    }
}
