// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wizard states.
//!
//! The wizard is a linear chain: Idle -> Action -> Project -> Server ->
//! Amount -> PaymentType -> Confirm. Back-navigation walks the same chain
//! in reverse, one step at a time, and never skips.

/// States of the order wizard. A session holds exactly one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DialogState {
    /// No wizard in progress. Represented by an absent session entry.
    #[default]
    Idle,
    /// Choosing buy/sell (or the reviews/support shortcuts).
    Action,
    /// Choosing a game project.
    Project,
    /// Choosing a server of the chosen project.
    Server,
    /// Entering the amount in millions of virts.
    Amount,
    /// Choosing a payment method.
    PaymentType,
    /// Reviewing the summary, confirming or cancelling.
    Confirm,
}

impl DialogState {
    /// The state a back-navigation lands in. Fixed per state; `Idle` is
    /// its own predecessor.
    pub fn predecessor(self) -> DialogState {
        match self {
            DialogState::Idle => DialogState::Idle,
            DialogState::Action => DialogState::Idle,
            DialogState::Project => DialogState::Action,
            DialogState::Server => DialogState::Project,
            DialogState::Amount => DialogState::Server,
            DialogState::PaymentType => DialogState::Amount,
            DialogState::Confirm => DialogState::PaymentType,
        }
    }
}

impl std::fmt::Display for DialogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialogState::Idle => write!(f, "idle"),
            DialogState::Action => write!(f, "action"),
            DialogState::Project => write!(f, "project"),
            DialogState::Server => write!(f, "server"),
            DialogState::Amount => write!(f, "amount"),
            DialogState::PaymentType => write!(f, "payment_type"),
            DialogState::Confirm => write!(f, "confirm"),
        }
    }
}
