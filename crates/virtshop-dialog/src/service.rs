// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Glue between the pure engine and the effectful edges.
//!
//! One inbound message flows through here: load the session, step the
//! engine, save the outcome — all under the store's per-user entry lock —
//! then dispatch any finalized order to the operator notifier outside the
//! lock. A failed dispatch never unwinds the user's transition; the user
//! gets a soft warning appended to the replies instead.

use std::sync::Arc;

use tracing::{debug, info, warn};
use virtshop_core::traits::OrderNotifier;
use virtshop_core::types::{InboundMessage, Reply};

use crate::engine::DialogEngine;
use crate::store::SessionStore;
use crate::text;

pub struct DialogService {
    engine: DialogEngine,
    store: Arc<SessionStore>,
    notifier: Arc<dyn OrderNotifier>,
}

impl DialogService {
    pub fn new(
        engine: DialogEngine,
        store: Arc<SessionStore>,
        notifier: Arc<dyn OrderNotifier>,
    ) -> Self {
        Self {
            engine,
            store,
            notifier,
        }
    }

    /// Handles one inbound message and returns the replies to send, in
    /// order.
    pub async fn handle(&self, msg: &InboundMessage) -> Vec<Reply> {
        let user = msg.sender.id;
        let (mut replies, order) = self.store.update(user, |session| {
            let from = session.state;
            let result = self
                .engine
                .step(from, session.draft.clone(), &msg.sender, &msg.text);
            session.state = result.state;
            session.draft = result.draft;
            debug!(user_id = %user, from = %from, to = %session.state, "dialog step");
            (result.replies, result.order)
        });

        if let Some(order) = order {
            info!(
                user_id = %user,
                order = %order.order_tag(),
                action = %order.action,
                amount = order.amount_units,
                price_rub = order.price_rub,
                payment = %order.payment_method,
                "order finalized"
            );
            if let Err(error) = self.notifier.notify(&order).await {
                warn!(user_id = %user, %error, "operator notification failed");
                replies.push(Reply::text(text::notify_warning()));
            }
        }
        replies
    }
}
