// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the complete order pipeline.
//!
//! Each test wires the dialogue service exactly the way `serve` does —
//! default configuration, built-in catalog, in-memory store — with a
//! recording notifier standing in for the Telegram admin chat. Tests are
//! independent and order-insensitive.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use virtshop_config::model::VirtshopConfig;
use virtshop_core::error::VirtshopError;
use virtshop_core::traits::OrderNotifier;
use virtshop_core::types::{
    FinalizedOrder, InboundMessage, Keyboard, OrderAction, PaymentMethod, Reply, Sender, UserId,
};
use virtshop_dialog::{DialogEngine, DialogService, OptionCatalog, SessionStore, ShopInfo};

#[derive(Default)]
struct RecordingNotifier {
    orders: Mutex<Vec<FinalizedOrder>>,
    fail: bool,
}

#[async_trait]
impl OrderNotifier for RecordingNotifier {
    async fn notify(&self, order: &FinalizedOrder) -> Result<(), VirtshopError> {
        self.orders.lock().unwrap().push(order.clone());
        if self.fail {
            return Err(VirtshopError::Channel {
                message: "admin chat unreachable".into(),
                source: None,
            });
        }
        Ok(())
    }
}

struct Harness {
    service: DialogService,
    store: Arc<SessionStore>,
    notifier: Arc<RecordingNotifier>,
}

impl Harness {
    fn new() -> Self {
        Self::build(false)
    }

    fn with_failing_notifier() -> Self {
        Self::build(true)
    }

    fn build(fail_notifier: bool) -> Self {
        let config = VirtshopConfig::default();
        let shop = ShopInfo {
            support_contact: config.shop.support_contact.clone(),
            reviews_channel: config.shop.reviews_channel.clone(),
            payment_link: config.shop.payment_link.clone(),
        };
        let engine = DialogEngine::new(OptionCatalog::builtin(), shop);
        let store = Arc::new(SessionStore::new());
        let notifier = Arc::new(RecordingNotifier {
            orders: Mutex::new(Vec::new()),
            fail: fail_notifier,
        });
        let service = DialogService::new(engine, Arc::clone(&store), notifier.clone());
        Self {
            service,
            store,
            notifier,
        }
    }

    async fn send(&self, user_id: i64, text: &str) -> Vec<Reply> {
        let msg = InboundMessage {
            chat_id: user_id,
            sender: Sender {
                id: UserId(user_id),
                username: Some(format!("user{user_id}")),
            },
            text: text.to_string(),
        };
        self.service.handle(&msg).await
    }

    /// Sends the inputs in order and returns the replies of the last one.
    async fn walk(&self, user_id: i64, inputs: &[&str]) -> Vec<Reply> {
        let mut last = Vec::new();
        for input in inputs {
            last = self.send(user_id, input).await;
        }
        last
    }

    fn orders(&self) -> Vec<FinalizedOrder> {
        self.notifier.orders.lock().unwrap().clone()
    }
}

fn options_rows(reply: &Reply) -> Vec<Vec<String>> {
    match &reply.keyboard {
        Some(Keyboard::Options { rows, .. }) => rows.clone(),
        other => panic!("expected an options keyboard, got {other:?}"),
    }
}

// ---- Test 1: Full buy pipeline ----

#[tokio::test]
async fn test_buy_walk_delivers_link_and_dispatches_the_order() {
    let h = Harness::new();
    let replies = h
        .walk(42, &["/start", "Buy", "GTA5RP", "Downtown", "12кк", "Card", "Confirm"])
        .await;

    // Finalize sequence: payment link (keyboard removed), acceptance,
    // new-order prompt.
    assert_eq!(replies.len(), 3);
    assert!(replies[0].text.contains("https://payop.com/test"));
    assert_eq!(replies[0].keyboard, Some(Keyboard::Remove));
    assert!(replies[1].text.contains("Order accepted"));
    assert!(replies[2].text.contains("another order"));

    let orders = h.orders();
    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert_eq!(order.user_id, UserId(42));
    assert_eq!(order.username, "user42");
    assert_eq!(order.action, OrderAction::Buy);
    assert_eq!(order.project, "GTA5RP");
    assert_eq!(order.server, "Downtown");
    assert_eq!(order.amount_units, 12);
    assert_eq!(order.price_rub, 19200);
    assert_eq!(order.payment_method, PaymentMethod::Card);

    assert_eq!(h.store.active_sessions(), 0, "finalized session must be gone");
}

#[tokio::test]
async fn test_sell_walk_prices_at_the_sell_rate() {
    let h = Harness::new();
    h.walk(7, &["/start", "Sell", "Majestic", "New York", "100кк", "USDT", "Confirm"])
        .await;

    let orders = h.orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].action, OrderAction::Sell);
    assert_eq!(orders[0].server, "New York");
    assert_eq!(orders[0].price_rub, 90_000);
    assert_eq!(orders[0].payment_method, PaymentMethod::Usdt);
}

// ---- Test 2: Step-by-step prompts and keyboards ----

#[tokio::test]
async fn test_each_step_prompts_with_its_menu() {
    let h = Harness::new();

    let replies = h.send(42, "/start").await;
    assert_eq!(replies.len(), 2);
    assert!(replies[0].text.contains("Welcome"));
    assert_eq!(options_rows(&replies[1])[0], vec!["Buy", "Sell"]);

    let replies = h.send(42, "Buy").await;
    assert!(replies[0].text.contains("choose a project"));
    assert_eq!(options_rows(&replies[0])[0], vec!["GTA5RP", "Majestic"]);

    let replies = h.send(42, "GTA5RP").await;
    let rows = options_rows(&replies[0]);
    assert_eq!(rows[0], vec!["Downtown", "Burton"]);
    assert_eq!(rows.last().unwrap(), &vec!["Back".to_string()]);

    let replies = h.send(42, "Downtown").await;
    assert!(replies[0].text.contains("1кк to 100кк"));

    let replies = h.send(42, "12кк").await;
    assert!(replies[0].text.contains("payment method"));
    assert_eq!(options_rows(&replies[0])[0], vec!["Card", "SBP"]);

    let replies = h.send(42, "Card").await;
    assert!(replies[0].text.contains("Check your order"));
    assert!(replies[0].text.contains("19200 RUB"));
    assert_eq!(options_rows(&replies[0])[0], vec!["Confirm", "Cancel"]);
}

// ---- Test 3: Rejection and recovery ----

#[tokio::test]
async fn test_bad_amounts_reprompt_until_a_valid_one() {
    let h = Harness::new();
    h.walk(42, &["/start", "Buy", "GTA5RP", "Downtown"]).await;

    for wrong in ["0кк", "101кк", "12kk", "12", "abcкк"] {
        let replies = h.send(42, wrong).await;
        assert_eq!(replies.len(), 1, "{wrong:?} should only re-prompt");
        assert!(replies[0].text.starts_with('❌'), "{wrong:?} should be rejected");
    }

    // Progress was never lost: a valid amount still advances.
    let replies = h.send(42, "5кк").await;
    assert!(replies[0].text.contains("5кк"));
    assert!(replies[0].text.contains("payment method"));
}

#[tokio::test]
async fn test_back_retraces_without_losing_the_draft() {
    let h = Harness::new();
    h.walk(42, &["/start", "Buy", "GTA5RP", "Downtown", "12кк", "Card"])
        .await;

    // Summary -> payment -> amount, where the drafted value is repeated.
    let replies = h.send(42, "Back").await;
    assert!(replies[0].text.contains("payment method"));
    let replies = h.send(42, "Back").await;
    assert!(replies[0].text.contains("Current amount: 12кк"));

    // Changing the amount re-prices the order.
    let replies = h.send(42, "25кк").await;
    assert!(replies[0].text.contains("25кк"));
    let replies = h.send(42, "SBP").await;
    assert!(replies[0].text.contains("40000 RUB"));
    assert!(replies[0].text.contains("SBP"));
}

// ---- Test 4: Shortcuts and stray input ----

#[tokio::test]
async fn test_reviews_and_support_shortcuts_leave_the_wizard() {
    let h = Harness::new();

    h.send(1, "/start").await;
    let replies = h.send(1, "Reviews").await;
    assert_eq!(replies.len(), 1);
    assert!(replies[0].text.contains("https://t.me/virtshop_reviews"));
    assert_eq!(replies[0].keyboard, Some(Keyboard::Remove));
    assert_eq!(h.store.active_sessions(), 0);

    h.send(1, "/start").await;
    let replies = h.send(1, "Support").await;
    assert!(replies[0].text.contains("@virtshop_support"));
    assert_eq!(h.store.active_sessions(), 0);
}

#[tokio::test]
async fn test_stray_text_hints_at_start_without_a_session() {
    let h = Harness::new();
    let replies = h.send(42, "hello?").await;
    assert_eq!(replies.len(), 1);
    assert!(replies[0].text.contains("/start"));
    assert_eq!(h.store.active_sessions(), 0);

    let replies = h.send(42, "/help").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(h.store.active_sessions(), 0);
}

#[tokio::test]
async fn test_start_midwizard_restarts_cleanly() {
    let h = Harness::new();
    h.walk(42, &["/start", "Buy", "GTA5RP", "Downtown", "12кк"]).await;

    let replies = h.send(42, "/start").await;
    assert_eq!(replies.len(), 2);
    assert!(replies[0].text.contains("Welcome"));

    // The old draft is gone; the next order is built from scratch.
    h.walk(42, &["Buy", "Majestic", "Miami", "2кк", "Card", "Confirm"]).await;
    let orders = h.orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].project, "Majestic");
    assert_eq!(orders[0].amount_units, 2);
    assert_eq!(orders[0].price_rub, 3200);
}

// ---- Test 5: Cancellation ----

#[tokio::test]
async fn test_cancel_never_reaches_the_operator() {
    let h = Harness::new();
    let replies = h
        .walk(42, &["/start", "Buy", "GTA5RP", "Downtown", "12кк", "Card", "Cancel"])
        .await;

    assert_eq!(replies.len(), 1);
    assert!(replies[0].text.contains("cancelled"));
    assert!(h.orders().is_empty());
    assert_eq!(h.store.active_sessions(), 0);
}

// ---- Test 6: Operator outage ----

#[tokio::test]
async fn test_operator_outage_warns_but_accepts_the_order() {
    let h = Harness::with_failing_notifier();
    let replies = h
        .walk(42, &["/start", "Buy", "GTA5RP", "Downtown", "1кк", "BTC", "Confirm"])
        .await;

    // The full finalize sequence, then the soft warning.
    assert_eq!(replies.len(), 4);
    assert!(replies[0].text.contains("https://payop.com/test"));
    assert!(replies[3].text.contains("could not reach the operator"));

    let orders = h.orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].price_rub, 1600);
    assert_eq!(h.store.active_sessions(), 0);
}

// ---- Test 7: Concurrent users ----

#[tokio::test]
async fn test_two_users_wizard_independently() {
    let h = Harness::new();

    // Interleave two wizards step by step.
    h.walk(100, &["/start", "Buy", "GTA5RP", "Downtown"]).await;
    h.walk(200, &["/start", "Sell", "Majestic", "Miami"]).await;
    assert_eq!(h.store.active_sessions(), 2);

    h.send(100, "10кк").await;
    h.send(200, "20кк").await;
    h.send(100, "Card").await;
    h.send(200, "BTC").await;
    h.send(100, "Confirm").await;
    h.send(200, "Confirm").await;

    let orders = h.orders();
    assert_eq!(orders.len(), 2);

    let first = orders.iter().find(|o| o.user_id == UserId(100)).unwrap();
    assert_eq!(first.action, OrderAction::Buy);
    assert_eq!(first.server, "Downtown");
    assert_eq!(first.amount_units, 10);
    assert_eq!(first.price_rub, 16_000);

    let second = orders.iter().find(|o| o.user_id == UserId(200)).unwrap();
    assert_eq!(second.action, OrderAction::Sell);
    assert_eq!(second.server, "Miami");
    assert_eq!(second.amount_units, 20);
    assert_eq!(second.price_rub, 18_000);

    assert_eq!(h.store.active_sessions(), 0);
}
