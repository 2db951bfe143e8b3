// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Every user-visible string and keyboard the wizard emits.
//!
//! Texts are fixed at build time. Amounts keep the `кк` suffix players
//! actually type; everything else is English. Keyboards are one-time
//! menus except the bare back-only keyboard of the amount prompt, which
//! stays up while the user types.

use virtshop_core::types::{Keyboard, OrderAction};

use crate::catalog::{paired_rows, OptionCatalog};
use crate::draft::OrderDraft;

// Button labels the engine matches against, case-exact.
pub const BACK: &str = "Back";
pub const REVIEWS: &str = "Reviews";
pub const SUPPORT: &str = "Support";
pub const CONFIRM: &str = "Confirm";
pub const CANCEL: &str = "Cancel";

pub const START_COMMAND: &str = "/start";
pub const HELP_COMMAND: &str = "/help";

const NOT_SELECTED: &str = "not selected";

// ---------------------------------------------------------------------------
// Texts

pub fn welcome() -> &'static str {
    "👋 Welcome to the virt shop!\n\nI buy and sell virts for GTA5RP and Majestic."
}

pub fn action_prompt() -> &'static str {
    "🎮 Pick what you want to do:"
}

/// Shown when an idle user sends anything but /start.
pub fn idle_hint() -> &'static str {
    "🔄 Send /start to begin."
}

/// Shown when the user backs out of the action menu.
pub fn restart_hint() -> &'static str {
    "🔄 Okay. Send /start when you want to begin again."
}

pub fn help() -> &'static str {
    "ℹ️ This bot buys and sells virts for GTA5RP and Majestic.\n\n\
     Commands:\n\
     /start — start or restart the order wizard\n\
     /help — this message\n\n\
     Pick an action, a project, a server and an amount (1кк to 100кк), \
     then a payment method, and confirm the order."
}

pub fn reviews(channel: &str) -> String {
    format!("📝 Our reviews live here: {channel}\n\n🔄 Send /start to place an order.")
}

pub fn support(contact: &str) -> String {
    format!("📞 Support: {contact}\n\n🔄 Send /start to place an order.")
}

pub fn invalid_action() -> &'static str {
    "❌ Please pick an action from the menu."
}

/// Project prompt; repeats the chosen action when one is already drafted.
pub fn project_prompt(action: Option<OrderAction>) -> String {
    let label = action.map_or_else(|| NOT_SELECTED.to_string(), |a| a.to_string());
    format!("✅ You picked: {label}.\n🌐 Now choose a project:")
}

pub fn invalid_project() -> &'static str {
    "❌ Please pick a project from the menu."
}

pub fn server_prompt(project: &str) -> String {
    format!("✅ You picked: {project}.\n🌍 Now choose a server:")
}

/// Shorter server prompt used when the user backs into the step.
pub fn server_reprompt(project: &str) -> String {
    format!("🌍 Choose a server for {project}:")
}

pub fn invalid_server() -> &'static str {
    "❌ Please pick a server from the menu."
}

pub fn amount_prompt(server: &str) -> String {
    format!("✅ You picked: {server}.\n💵 Enter an amount from 1кк to 100кк (for example 12кк):")
}

/// Amount prompt used when the user backs into the step; repeats the
/// drafted amount when one exists.
pub fn amount_reprompt(current: Option<u32>) -> String {
    match current {
        Some(units) => format!(
            "💵 Enter an amount from 1кк to 100кк (for example 12кк). Current amount: {units}кк."
        ),
        None => "💵 Enter an amount from 1кк to 100кк (for example 12кк):".to_string(),
    }
}

pub fn invalid_amount() -> &'static str {
    "❌ Please enter an amount from 1кк to 100кк (for example 12кк)."
}

pub fn payment_prompt(units: u32) -> String {
    format!("✅ Amount: {units}кк.\n💳 Now choose a payment method:")
}

pub fn payment_reprompt() -> &'static str {
    "💳 Choose a payment method:"
}

pub fn invalid_payment() -> &'static str {
    "❌ Please pick a payment method from the menu."
}

/// The order summary shown before confirmation. Total on any draft;
/// fields a forward path always fills fall back to placeholders only in
/// impossible situations.
pub fn order_summary(draft: &OrderDraft) -> String {
    let action = draft
        .action
        .map_or_else(|| NOT_SELECTED.to_string(), |a| a.to_string());
    let payment = draft
        .payment_method
        .map_or_else(|| NOT_SELECTED.to_string(), |p| p.to_string());
    let project = draft.project.as_deref().unwrap_or(NOT_SELECTED);
    let server = draft.server.as_deref().unwrap_or(NOT_SELECTED);
    let units = draft.amount_units.unwrap_or(0);
    let price = draft.price_rub.unwrap_or(0);
    format!(
        "📋 Check your order:\n\n\
         🎯 Action: {action}\n\
         🎮 Project: {project}\n\
         🌍 Server: {server}\n\
         💰 Amount: {units}кк\n\
         💸 Price: {price} RUB\n\
         💳 Payment: {payment}\n\n\
         Press Confirm to place the order or Cancel to drop it."
    )
}

pub fn invalid_confirm() -> &'static str {
    "❌ Please answer with Confirm, Cancel or Back."
}

pub fn cancelled() -> &'static str {
    "❌ Order cancelled. Send /start to begin again."
}

pub fn payment_link(link: &str) -> String {
    format!("🔗 Payment link (test mode): {link}")
}

pub fn order_accepted() -> &'static str {
    "✅ Order accepted! Payment runs in test mode."
}

pub fn new_order_prompt() -> &'static str {
    "🔄 Place another order?"
}

/// Appended when the operator notification could not be delivered.
pub fn notify_warning() -> &'static str {
    "⚠️ Your order is accepted, but we could not reach the operator. \
     Please message support if nothing happens soon."
}

// ---------------------------------------------------------------------------
// Keyboards

fn row(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|l| l.to_string()).collect()
}

pub fn action_menu() -> Keyboard {
    Keyboard::Options {
        rows: vec![
            row(&["Buy", "Sell"]),
            row(&[REVIEWS, SUPPORT]),
            row(&[BACK]),
        ],
        one_time: true,
    }
}

pub fn project_menu(catalog: &OptionCatalog) -> Keyboard {
    Keyboard::Options {
        rows: vec![
            catalog.project_keys().map(str::to_string).collect(),
            row(&[BACK]),
        ],
        one_time: true,
    }
}

/// Server buttons two per row with a trailing back row.
pub fn server_menu(catalog: &OptionCatalog, project: &str) -> Keyboard {
    let mut rows = catalog
        .servers(project)
        .map(paired_rows)
        .unwrap_or_default();
    rows.push(row(&[BACK]));
    Keyboard::Options {
        rows,
        one_time: true,
    }
}

/// The amount step keeps its back button up while the user types.
pub fn amount_menu() -> Keyboard {
    Keyboard::Options {
        rows: vec![row(&[BACK])],
        one_time: false,
    }
}

pub fn payment_menu() -> Keyboard {
    Keyboard::Options {
        rows: vec![
            row(&["Card", "SBP"]),
            row(&["USDT", "BTC"]),
            row(&[BACK]),
        ],
        one_time: true,
    }
}

pub fn confirm_menu() -> Keyboard {
    Keyboard::Options {
        rows: vec![row(&[CONFIRM, CANCEL]), row(&[BACK])],
        one_time: true,
    }
}

/// Offered after an order completes.
pub fn new_order_menu() -> Keyboard {
    Keyboard::Options {
        rows: vec![row(&[START_COMMAND])],
        one_time: true,
    }
}
