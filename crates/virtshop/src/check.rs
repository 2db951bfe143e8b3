// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `virtshop check` command implementation.
//!
//! Runs diagnostic checks against the bot environment to surface
//! configuration problems and Telegram connectivity issues before
//! `serve` is started.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use virtshop_config::model::VirtshopConfig;
use virtshop_config::validate_config;
use virtshop_core::error::VirtshopError;
use virtshop_core::{ChannelAdapter, HealthStatus};
use virtshop_dialog::OptionCatalog;
use virtshop_telegram::TelegramChannel;

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Nothing to report.
    Pass,
    /// Usable, but worth a look.
    Warn,
    /// `serve` would not work like this.
    Fail,
}

/// One line of `virtshop check` output.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// What was checked.
    pub name: String,
    /// How it went.
    pub status: CheckStatus,
    /// Detail shown after the name.
    pub message: String,
    /// How long the check ran.
    pub duration: Duration,
}

/// Run the `virtshop check` command.
///
/// Prints one line per check and a summary. Failed checks make the
/// command exit non-zero; warnings alone do not.
pub async fn run_check(config: &VirtshopConfig) -> Result<(), VirtshopError> {
    let use_color = std::io::stdout().is_terminal();

    let mut results = Vec::new();
    results.push(check_config(config));
    results.push(check_catalog());
    results.push(check_bot_token(config));
    results.push(check_admin_chat(config));
    results.push(check_telegram_api(config).await);

    println!();
    println!("  virtshop check");
    println!("  {}", "-".repeat(50));

    for result in &results {
        println!("{}", render_line(result, use_color));
    }

    println!();

    let fail_count = results
        .iter()
        .filter(|r| r.status == CheckStatus::Fail)
        .count();
    let warn_count = results
        .iter()
        .filter(|r| r.status == CheckStatus::Warn)
        .count();

    if fail_count > 0 || warn_count > 0 {
        let issues = fail_count + warn_count;
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }

    println!();

    if fail_count > 0 {
        let check_word = if fail_count == 1 { "check" } else { "checks" };
        return Err(VirtshopError::Config(format!(
            "{fail_count} {check_word} failed"
        )));
    }
    Ok(())
}

/// Formats one result line, colored for terminals and labeled plain
/// otherwise.
fn render_line(result: &CheckResult, use_color: bool) -> String {
    use colored::Colorize;

    let duration_ms = result.duration.as_millis();
    let message = &result.message;

    let (label, symbol, tinted) = match result.status {
        CheckStatus::Pass => ("[OK]  ", "✓".green(), message.normal()),
        CheckStatus::Warn => ("[WARN]", "!".yellow(), message.yellow()),
        CheckStatus::Fail => ("[FAIL]", "✗".red(), message.red()),
    };

    if use_color {
        format!("    {symbol} {:<20} {tinted} ({duration_ms}ms)", result.name)
    } else {
        format!("    {label} {:<20} {message} ({duration_ms}ms)", result.name)
    }
}

/// Check the loaded configuration passes validation.
fn check_config(config: &VirtshopConfig) -> CheckResult {
    let start = Instant::now();
    let errors = validate_config(config);

    if errors.is_empty() {
        CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Pass,
            message: "valid".to_string(),
            duration: start.elapsed(),
        }
    } else {
        CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Fail,
            message: format!("{} error(s)", errors.len()),
            duration: start.elapsed(),
        }
    }
}

/// Check the built-in catalog is populated.
fn check_catalog() -> CheckResult {
    let start = Instant::now();
    let catalog = OptionCatalog::builtin();

    let projects = catalog.project_keys().count();
    let servers: usize = catalog
        .project_keys()
        .filter_map(|p| catalog.servers(p))
        .map(|s| s.len())
        .sum();

    if projects == 0 || servers == 0 {
        CheckResult {
            name: "Catalog".to_string(),
            status: CheckStatus::Fail,
            message: "no projects configured".to_string(),
            duration: start.elapsed(),
        }
    } else {
        CheckResult {
            name: "Catalog".to_string(),
            status: CheckStatus::Pass,
            message: format!("{projects} projects, {servers} servers"),
            duration: start.elapsed(),
        }
    }
}

/// Check a bot token is configured.
fn check_bot_token(config: &VirtshopConfig) -> CheckResult {
    let start = Instant::now();

    match config.telegram.bot_token.as_deref() {
        Some(token) if !token.trim().is_empty() => CheckResult {
            name: "Bot token".to_string(),
            status: CheckStatus::Pass,
            message: "configured".to_string(),
            duration: start.elapsed(),
        },
        _ => CheckResult {
            name: "Bot token".to_string(),
            status: CheckStatus::Fail,
            message: "telegram.bot_token is not set".to_string(),
            duration: start.elapsed(),
        },
    }
}

/// Check an admin chat is configured for order notifications.
fn check_admin_chat(config: &VirtshopConfig) -> CheckResult {
    let start = Instant::now();

    match config.telegram.admin_chat_id {
        Some(_) => CheckResult {
            name: "Admin chat".to_string(),
            status: CheckStatus::Pass,
            message: "configured".to_string(),
            duration: start.elapsed(),
        },
        None => CheckResult {
            name: "Admin chat".to_string(),
            status: CheckStatus::Fail,
            message: "telegram.admin_chat_id is not set".to_string(),
            duration: start.elapsed(),
        },
    }
}

/// Probe the Telegram Bot API with the configured token.
async fn check_telegram_api(config: &VirtshopConfig) -> CheckResult {
    let start = Instant::now();

    let channel = match TelegramChannel::new(&config.telegram) {
        Ok(channel) => channel,
        Err(_) => {
            return CheckResult {
                name: "Telegram API".to_string(),
                status: CheckStatus::Warn,
                message: "skipped (no bot token)".to_string(),
                duration: start.elapsed(),
            };
        }
    };

    match channel.health_check().await {
        Ok(HealthStatus::Healthy) => CheckResult {
            name: "Telegram API".to_string(),
            status: CheckStatus::Pass,
            message: "reachable".to_string(),
            duration: start.elapsed(),
        },
        Ok(HealthStatus::Degraded(detail)) => CheckResult {
            name: "Telegram API".to_string(),
            status: CheckStatus::Warn,
            message: detail,
            duration: start.elapsed(),
        },
        Ok(HealthStatus::Unhealthy(detail)) => CheckResult {
            name: "Telegram API".to_string(),
            status: CheckStatus::Fail,
            message: detail,
            duration: start.elapsed(),
        },
        Err(e) => CheckResult {
            name: "Telegram API".to_string(),
            status: CheckStatus::Fail,
            message: format!("probe failed: {e}"),
            duration: start.elapsed(),
        },
    }
}
