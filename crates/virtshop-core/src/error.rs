// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared across the virtshop workspace.

use thiserror::Error;

/// The primary error type used across the channel adapter, the notifier,
/// and the binary's wiring code.
#[derive(Debug, Error)]
pub enum VirtshopError {
    /// Bad or missing configuration, caught before the bot starts.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Transport trouble: connecting, sending, or receiving failed.
    #[error("channel failure: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Breaches of invariants that normal operation never hits.
    #[error("internal error: {0}")]
    Internal(String),
}

impl VirtshopError {
    /// Builds a [`VirtshopError::Channel`] from a message and an underlying cause.
    pub fn channel(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Channel {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
