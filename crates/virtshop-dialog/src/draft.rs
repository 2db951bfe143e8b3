// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The order draft a session accumulates while walking the wizard.

use chrono::{DateTime, Utc};
use virtshop_core::types::{
    FinalizedOrder, OrderAction, PaymentMethod, UserId, STATUS_AWAITING_PAYMENT,
};

/// Fields collected so far. Back-navigation never clears any of them;
/// a field only changes when its step is answered again, and the whole
/// draft resets only on finalize, cancel, or restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub action: Option<OrderAction>,
    pub project: Option<String>,
    pub server: Option<String>,
    /// Millions of virts, 1..=100.
    pub amount_units: Option<u32>,
    /// Computed when the amount is accepted.
    pub price_rub: Option<u32>,
    pub payment_method: Option<PaymentMethod>,
    /// Sender identity, captured when the payment method is accepted.
    pub username: Option<String>,
    pub user_id: Option<UserId>,
}

impl OrderDraft {
    /// True when no step has been answered yet.
    pub fn is_empty(&self) -> bool {
        *self == OrderDraft::default()
    }

    /// Builds the finalized order from a fully collected draft.
    ///
    /// Returns `None` when a required field is missing, which cannot
    /// happen on any forward path through the wizard; the engine treats
    /// that as invalid input rather than panicking.
    pub fn finalize(&self, created_at: DateTime<Utc>) -> Option<FinalizedOrder> {
        Some(FinalizedOrder {
            user_id: self.user_id?,
            username: self
                .username
                .clone()
                .unwrap_or_else(|| "No username".to_string()),
            action: self.action?,
            project: self.project.clone()?,
            server: self.server.clone()?,
            amount_units: self.amount_units?,
            price_rub: self.price_rub?,
            payment_method: self.payment_method?,
            created_at,
            status: STATUS_AWAITING_PAYMENT.to_string(),
        })
    }
}
