// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operator notification trait.

use async_trait::async_trait;

use crate::error::VirtshopError;
use crate::types::FinalizedOrder;

/// Delivers a finalized order to the operator.
///
/// Injected into the dialogue service so delivery failures stay isolated:
/// by the time `notify` runs, the user's transition is already committed,
/// and a failed dispatch must never unwind it.
#[async_trait]
pub trait OrderNotifier: Send + Sync + 'static {
    async fn notify(&self, order: &FinalizedOrder) -> Result<(), VirtshopError>;
}
