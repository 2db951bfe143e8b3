// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram channel adapter for the virtshop order bot.
//!
//! Implements [`ChannelAdapter`] for the Telegram Bot API via teloxide:
//! long polling behind a supervised background task, DM/text filtering,
//! reply keyboard rendering, and the operator notifier.

pub mod handler;
pub mod keyboard;
pub mod notifier;

use std::time::Duration;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use virtshop_config::model::TelegramConfig;
use virtshop_core::error::VirtshopError;
use virtshop_core::traits::ChannelAdapter;
use virtshop_core::types::{HealthStatus, InboundMessage, Reply};

pub use notifier::TelegramNotifier;

/// Webhook deletion attempts before polling proceeds anyway.
const WEBHOOK_DELETE_ATTEMPTS: u32 = 3;

/// Pause between webhook deletion attempts.
const WEBHOOK_RETRY_PAUSE: Duration = Duration::from_secs(5);

/// Pause before restarting a dispatcher that returned.
const POLLING_RESTART_PAUSE: Duration = Duration::from_secs(10);

/// Inbound messages buffered between the poller and the bot loop.
const INBOUND_QUEUE_DEPTH: usize = 100;

/// The Telegram side of [`ChannelAdapter`].
///
/// Long polling runs in a background task and pushes private text
/// messages into an internal queue; [`ChannelAdapter::receive`] is its
/// only consumer, so the dialogue service sees messages one at a time
/// in arrival order.
pub struct TelegramChannel {
    bot: Bot,
    inbound_rx: tokio::sync::Mutex<mpsc::Receiver<InboundMessage>>,
    inbound_tx: mpsc::Sender<InboundMessage>,
    polling_handle: Option<tokio::task::JoinHandle<()>>,
}

impl TelegramChannel {
    /// Builds the adapter from `[telegram]` config.
    ///
    /// Fails when `telegram.bot_token` is absent or blank; nothing here
    /// talks to the network yet.
    pub fn new(config: &TelegramConfig) -> Result<Self, VirtshopError> {
        let token = config.bot_token.as_deref().ok_or_else(|| {
            VirtshopError::Config("telegram.bot_token is required to run the bot".into())
        })?;

        if token.is_empty() {
            return Err(VirtshopError::Config("telegram.bot_token is empty".into()));
        }

        let bot = Bot::new(token);
        let (inbound_tx, inbound_rx) = mpsc::channel(INBOUND_QUEUE_DEPTH);

        Ok(Self {
            bot,
            inbound_rx: tokio::sync::Mutex::new(inbound_rx),
            inbound_tx,
            polling_handle: None,
        })
    }

    /// The underlying [`Bot`], shared with the operator notifier.
    pub fn bot(&self) -> &Bot {
        &self.bot
    }
}

#[async_trait]
impl ChannelAdapter for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn connect(&mut self) -> Result<(), VirtshopError> {
        if self.polling_handle.is_some() {
            return Ok(()); // already polling
        }

        // A leftover webhook blocks long polling. Deletion also drops
        // pending updates, so no processed event is ever re-delivered.
        if !delete_webhook_with_retries(&self.bot).await {
            error!("failed to delete webhook after {WEBHOOK_DELETE_ATTEMPTS} attempts, starting polling anyway");
        }

        let bot = self.bot.clone();
        let tx = self.inbound_tx.clone();

        info!("starting long polling");

        let handle = tokio::spawn(async move {
            loop {
                let update_tx = tx.clone();
                let handler =
                    Update::filter_message().endpoint(move |msg: Message| {
                        let tx = update_tx.clone();
                        async move {
                            // Group and channel traffic never reaches the wizard.
                            if !handler::is_dm(&msg) {
                                debug!(chat_id = msg.chat.id.0, "dropping non-DM message");
                                return respond(());
                            }

                            // Only text with an identifiable sender goes through.
                            match handler::to_inbound_message(&msg) {
                                Some(inbound) => {
                                    if tx.send(inbound).await.is_err() {
                                        warn!("inbound queue closed, dropping message");
                                    }
                                }
                                None => {
                                    debug!(msg_id = msg.id.0, "dropping non-text message");
                                }
                            }

                            respond(())
                        }
                    });

                Dispatcher::builder(bot.clone(), handler)
                    .default_handler(|_| async {}) // edits, callbacks, etc. are not used
                    .build()
                    .dispatch()
                    .await;

                warn!(
                    pause_secs = POLLING_RESTART_PAUSE.as_secs(),
                    "update dispatcher stopped, restarting"
                );
                tokio::time::sleep(POLLING_RESTART_PAUSE).await;
            }
        });

        self.polling_handle = Some(handle);
        Ok(())
    }

    async fn send(&self, chat_id: i64, reply: Reply) -> Result<(), VirtshopError> {
        let markup = reply.keyboard.as_ref().map(keyboard::reply_markup);

        let mut request = self.bot.send_message(ChatId(chat_id), reply.text);
        if let Some(markup) = markup {
            request = request.reply_markup(markup);
        }

        request
            .await
            .map_err(|e| VirtshopError::channel(format!("failed to send message: {e}"), e))?;

        Ok(())
    }

    async fn receive(&self) -> Result<InboundMessage, VirtshopError> {
        let mut rx = self.inbound_rx.lock().await;
        rx.recv().await.ok_or(VirtshopError::Channel {
            message: "Telegram inbound queue closed".into(),
            source: None,
        })
    }

    async fn health_check(&self) -> Result<HealthStatus, VirtshopError> {
        // getMe validates the token and reachability in one call.
        match self.bot.get_me().await {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(format!("getMe failed: {e}"))),
        }
    }

    async fn shutdown(&self) -> Result<(), VirtshopError> {
        debug!("telegram channel shutting down");
        if let Some(handle) = &self.polling_handle {
            handle.abort();
        }
        Ok(())
    }
}

/// Deletes any configured webhook, retrying a few times.
///
/// Mirrors the startup sequence the Bot API expects: long polling
/// conflicts with an active webhook, and `drop_pending_updates` clears
/// the backlog so old wizard input is not replayed into fresh sessions.
async fn delete_webhook_with_retries(bot: &Bot) -> bool {
    for attempt in 1..=WEBHOOK_DELETE_ATTEMPTS {
        match bot.delete_webhook().drop_pending_updates(true).await {
            Ok(_) => {
                info!("webhook deleted, pending updates dropped");
                return true;
            }
            Err(e) => {
                error!(
                    error = %e,
                    attempt,
                    max_attempts = WEBHOOK_DELETE_ATTEMPTS,
                    "failed to delete webhook"
                );
                if attempt < WEBHOOK_DELETE_ATTEMPTS {
                    tokio::time::sleep(WEBHOOK_RETRY_PAUSE).await;
                }
            }
        }
    }
    false
}
