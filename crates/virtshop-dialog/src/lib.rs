// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The virtshop order wizard.
//!
//! A linear buy/sell dialogue: action, project, server, amount, payment
//! method, confirmation. [`engine::DialogEngine`] holds the pure
//! transition function; [`store::SessionStore`] keeps per-user progress
//! in memory; [`service::DialogService`] ties both to the operator
//! notifier. Nothing in this crate talks to Telegram.

pub mod amount;
pub mod catalog;
pub mod draft;
pub mod engine;
pub mod pricing;
pub mod service;
pub mod state;
pub mod store;
pub mod text;

pub use amount::{parse_amount, AmountError};
pub use catalog::OptionCatalog;
pub use draft::OrderDraft;
pub use engine::{DialogEngine, ShopInfo, StepResult};
pub use pricing::price_rub;
pub use service::DialogService;
pub use state::DialogState;
pub use store::{Session, SessionStore};
