// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the virtshop order bot.
//!
//! This crate provides the shared types, the error enum, and the trait
//! seams (`ChannelAdapter`, `OrderNotifier`) that the dialogue engine,
//! the Telegram transport, and the binary build on.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::VirtshopError;
pub use traits::{ChannelAdapter, OrderNotifier};
pub use types::{
    FinalizedOrder, HealthStatus, InboundMessage, Keyboard, OrderAction, PaymentMethod, Reply,
    Sender, UserId,
};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn virtshop_error_has_all_variants() {
        let _config = VirtshopError::Config("test".into());
        let _channel = VirtshopError::Channel {
            message: "test".into(),
            source: None,
        };
        let _sourced = VirtshopError::channel("send failed", std::io::Error::other("test"));
        let _internal = VirtshopError::Internal("test".into());
    }

    #[test]
    fn order_action_labels_round_trip() {
        for action in [OrderAction::Buy, OrderAction::Sell] {
            let label = action.to_string();
            let parsed = OrderAction::from_str(&label).expect("should parse back");
            assert_eq!(action, parsed);
        }
        assert_eq!(OrderAction::Buy.to_string(), "Buy");
        assert_eq!(OrderAction::Sell.to_string(), "Sell");
        // Labels are case-exact.
        assert!(OrderAction::from_str("buy").is_err());
    }

    #[test]
    fn payment_method_labels_match_buttons() {
        let expected = [
            (PaymentMethod::Card, "Card"),
            (PaymentMethod::Sbp, "SBP"),
            (PaymentMethod::Usdt, "USDT"),
            (PaymentMethod::Btc, "BTC"),
        ];
        for (method, label) in expected {
            assert_eq!(method.to_string(), label);
            assert_eq!(PaymentMethod::from_str(label).unwrap(), method);
        }
        assert!(PaymentMethod::from_str("sbp").is_err());
    }

    #[test]
    fn order_tag_derives_from_user_id() {
        let order = FinalizedOrder {
            user_id: UserId(1386655173),
            username: "alice".into(),
            action: OrderAction::Buy,
            project: "GTA5RP".into(),
            server: "Downtown".into(),
            amount_units: 12,
            price_rub: 19200,
            payment_method: PaymentMethod::Card,
            created_at: chrono::Utc::now(),
            status: types::STATUS_AWAITING_PAYMENT.into(),
        };
        assert_eq!(order.order_tag(), "#ID1386655173");
    }

    #[test]
    fn finalized_order_serializes() {
        let order = FinalizedOrder {
            user_id: UserId(7),
            username: "No username".into(),
            action: OrderAction::Sell,
            project: "Majestic".into(),
            server: "Boston".into(),
            amount_units: 3,
            price_rub: 2700,
            payment_method: PaymentMethod::Usdt,
            created_at: chrono::Utc::now(),
            status: types::STATUS_AWAITING_PAYMENT.into(),
        };
        let json = serde_json::to_string(&order).expect("should serialize");
        let parsed: FinalizedOrder = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(order, parsed);
    }

    #[test]
    fn reply_constructors_set_keyboards() {
        assert_eq!(Reply::text("hi").keyboard, None);
        assert_eq!(Reply::remove_keyboard("bye").keyboard, Some(Keyboard::Remove));

        let menu = Reply::with_keyboard(
            "pick",
            Keyboard::Options {
                rows: vec![vec!["Buy".into(), "Sell".into()]],
                one_time: true,
            },
        );
        match menu.keyboard {
            Some(Keyboard::Options { ref rows, one_time }) => {
                assert_eq!(rows.len(), 1);
                assert!(one_time);
            }
            other => panic!("expected options keyboard, got {other:?}"),
        }
    }

    #[test]
    fn trait_objects_are_constructible() {
        // Compile-time check that both seams stay object-safe.
        fn _assert_channel(_: &dyn ChannelAdapter) {}
        fn _assert_notifier(_: &dyn OrderNotifier) {}
    }
}
