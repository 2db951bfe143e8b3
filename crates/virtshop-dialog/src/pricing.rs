// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed per-unit pricing.

use virtshop_core::types::OrderAction;

/// Rubles the shop charges per million sold to the user.
const BUY_RATE_RUB: u32 = 1600;
/// Rubles the shop pays per million bought from the user.
const SELL_RATE_RUB: u32 = 900;

/// Price of an order in rubles. `units` is millions of virts; with at
/// most 100 units this stays far below `u32::MAX`.
pub fn price_rub(action: OrderAction, units: u32) -> u32 {
    match action {
        OrderAction::Buy => units * BUY_RATE_RUB,
        OrderAction::Sell => units * SELL_RATE_RUB,
    }
}
