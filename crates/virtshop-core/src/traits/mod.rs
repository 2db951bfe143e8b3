// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the pure dialogue core and the effectful edges.
//!
//! Both traits use `#[async_trait]` so implementations can be held behind
//! `dyn` pointers by the service and the event loop.

pub mod channel;
pub mod notifier;

pub use channel::ChannelAdapter;
pub use notifier::OrderNotifier;
