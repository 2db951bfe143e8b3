// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared between the dialogue engine, the Telegram channel,
//! and the operator notifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Status label stamped on every confirmed order. Payments run in test
/// mode, so orders never progress past this state.
pub const STATUS_AWAITING_PAYMENT: &str = "Awaiting payment (test mode)";

/// Stable conversation identity: the Telegram user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of the person an inbound event came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub id: UserId,
    /// Telegram username without the `@`, when the account has one.
    pub username: Option<String>,
}

/// One inbound text event, already stripped down to what the engine needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Chat to answer into. Equals the user id for private chats.
    pub chat_id: i64,
    pub sender: Sender,
    pub text: String,
}

/// Reply keyboard instruction attached to an outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// Show a reply keyboard with the given button rows.
    Options {
        rows: Vec<Vec<String>>,
        /// Hide the keyboard after one use. Menus set this; the bare
        /// back-only keyboard of the amount prompt stays up.
        one_time: bool,
    },
    /// Remove whatever reply keyboard the chat currently shows.
    Remove,
}

/// One outbound message produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    /// Plain text; leaves any visible keyboard untouched.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    /// Text plus a reply keyboard.
    pub fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }

    /// Text that also removes the current reply keyboard.
    pub fn remove_keyboard(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(Keyboard::Remove),
        }
    }
}

/// What the user wants to do with their virts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum OrderAction {
    Buy,
    Sell,
}

/// How the user intends to pay (or get paid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum PaymentMethod {
    Card,
    #[strum(serialize = "SBP")]
    Sbp,
    #[strum(serialize = "USDT")]
    Usdt,
    #[strum(serialize = "BTC")]
    Btc,
}

/// A confirmed order, emitted exactly once per completed wizard run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedOrder {
    pub user_id: UserId,
    /// Username at confirmation time, `No username` when the account has none.
    pub username: String,
    pub action: OrderAction,
    pub project: String,
    pub server: String,
    /// Millions of virts, 1..=100.
    pub amount_units: u32,
    pub price_rub: u32,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

impl FinalizedOrder {
    /// Short order tag shown to the operator, derived from the user id.
    pub fn order_tag(&self) -> String {
        format!("#ID{}", self.user_id)
    }
}

/// Result of a channel health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Degraded(String),
    Unhealthy(String),
}
