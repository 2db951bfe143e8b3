// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel adapter trait for the messaging transport (Telegram today).

use async_trait::async_trait;

use crate::error::VirtshopError;
use crate::types::{HealthStatus, InboundMessage, Reply};

/// Bidirectional messaging transport.
///
/// The engine never talks to the platform directly; the event loop drives
/// one of these, feeding inbound messages to the dialogue service and
/// sending its replies back out.
#[async_trait]
pub trait ChannelAdapter: Send + Sync + 'static {
    /// Human-readable name of this channel instance.
    fn name(&self) -> &str;

    /// Establishes the connection and starts ingesting updates.
    async fn connect(&mut self) -> Result<(), VirtshopError>;

    /// Sends one reply into the given chat.
    async fn send(&self, chat_id: i64, reply: Reply) -> Result<(), VirtshopError>;

    /// Receives the next inbound text message.
    async fn receive(&self) -> Result<InboundMessage, VirtshopError>;

    /// Probes the platform connection.
    async fn health_check(&self) -> Result<HealthStatus, VirtshopError>;

    /// Gracefully shuts down the channel, releasing any held resources.
    async fn shutdown(&self) -> Result<(), VirtshopError>;
}
