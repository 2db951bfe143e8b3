// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operator notification over Telegram.
//!
//! Every finalized order is posted as one summary message to the
//! configured admin chat. Delivery runs after the user's wizard has
//! already completed; failures are reported to the caller and logged,
//! never retried here.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::info;
use virtshop_core::error::VirtshopError;
use virtshop_core::traits::OrderNotifier;
use virtshop_core::types::FinalizedOrder;

/// Sends order summaries to the operator's admin chat.
pub struct TelegramNotifier {
    bot: Bot,
    admin_chat_id: ChatId,
    payment_link: String,
}

impl TelegramNotifier {
    /// Creates a notifier posting to the given admin chat.
    pub fn new(bot: Bot, admin_chat_id: i64, payment_link: impl Into<String>) -> Self {
        Self {
            bot,
            admin_chat_id: ChatId(admin_chat_id),
            payment_link: payment_link.into(),
        }
    }
}

#[async_trait]
impl OrderNotifier for TelegramNotifier {
    async fn notify(&self, order: &FinalizedOrder) -> Result<(), VirtshopError> {
        let summary = admin_summary(order, &self.payment_link);

        info!(
            admin_chat_id = self.admin_chat_id.0,
            order = %order.order_tag(),
            "sending order notification to operator"
        );

        self.bot
            .send_message(self.admin_chat_id, summary)
            .await
            .map_err(|e| VirtshopError::channel(format!("failed to notify operator: {e}"), e))?;

        Ok(())
    }
}

/// Renders the operator summary for one finalized order.
fn admin_summary(order: &FinalizedOrder, payment_link: &str) -> String {
    format!(
        "🔔 New order {tag}\n\n\
         📅 Date and time: {time}\n\
         👤 User: @{username} (ID: {user_id})\n\
         🎯 Action: {action}\n\
         🎮 Project: {project}\n\
         🌍 Server: {server}\n\
         💰 Amount: {amount}кк\n\
         💸 Price: {price} RUB\n\
         💳 Payment type: {payment}\n\
         📊 Status: {status}\n\n\
         🔗 Payment link: {payment_link}",
        tag = order.order_tag(),
        time = order.created_at.format("%Y-%m-%d %H:%M:%S"),
        username = order.username,
        user_id = order.user_id,
        action = order.action,
        project = order.project,
        server = order.server,
        amount = order.amount_units,
        price = order.price_rub,
        payment = order.payment_method,
        status = order.status,
    )
}
