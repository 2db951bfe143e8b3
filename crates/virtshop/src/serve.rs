// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `virtshop serve` command implementation.
//!
//! Wires the dialogue engine, session store, Telegram channel, and
//! operator notifier together, then runs the event loop until a
//! shutdown signal arrives.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use virtshop_config::model::VirtshopConfig;
use virtshop_core::error::VirtshopError;
use virtshop_core::traits::{ChannelAdapter, OrderNotifier};
use virtshop_core::types::InboundMessage;
use virtshop_dialog::{DialogEngine, DialogService, OptionCatalog, SessionStore, ShopInfo};
use virtshop_telegram::{TelegramChannel, TelegramNotifier};

use crate::shutdown;

/// Runs the `virtshop serve` command.
///
/// Initializes the channel and notifier from configuration, connects,
/// and enters the main bot loop. Supports graceful shutdown via signal
/// handlers.
pub async fn run_serve(config: VirtshopConfig) -> Result<(), VirtshopError> {
    init_tracing(&config.bot.log_level);

    info!(bot = config.bot.name.as_str(), "starting virtshop serve");

    let admin_chat_id = config.telegram.admin_chat_id.ok_or_else(|| {
        eprintln!(
            "error: admin chat id required. Set telegram.admin_chat_id in virtshop.toml \
             or the VIRTSHOP_TELEGRAM_ADMIN_CHAT_ID environment variable."
        );
        VirtshopError::Config("telegram.admin_chat_id is required to run the bot".into())
    })?;

    let mut channel = TelegramChannel::new(&config.telegram).map_err(|e| {
        error!(error = %e, "failed to initialize Telegram channel");
        eprintln!(
            "error: bot token required. Set telegram.bot_token in virtshop.toml \
             or the VIRTSHOP_TELEGRAM_BOT_TOKEN environment variable."
        );
        e
    })?;

    let notifier: Arc<dyn OrderNotifier> = Arc::new(TelegramNotifier::new(
        channel.bot().clone(),
        admin_chat_id,
        config.shop.payment_link.clone(),
    ));

    let shop = ShopInfo {
        support_contact: config.shop.support_contact.clone(),
        reviews_channel: config.shop.reviews_channel.clone(),
        payment_link: config.shop.payment_link.clone(),
    };
    let engine = DialogEngine::new(OptionCatalog::builtin(), shop);
    let store = Arc::new(SessionStore::new());
    let service = DialogService::new(engine, store.clone(), notifier);

    channel.connect().await?;
    info!(channel = channel.name(), "channel connected");

    // Install signal handler.
    let cancel = shutdown::install_signal_handler();

    let mut bot_loop = BotLoop::new(Box::new(channel), service);
    bot_loop.run(cancel).await?;

    let mid_wizard = store.active_sessions();
    if mid_wizard > 0 {
        info!(
            sessions = mid_wizard,
            "sessions were mid-wizard at shutdown; drafts are in-memory and start over"
        );
    }

    info!("virtshop serve shutdown complete");
    Ok(())
}

/// The main event loop: receive one message, step the dialogue, send
/// the replies back.
struct BotLoop {
    channel: Box<dyn ChannelAdapter>,
    service: DialogService,
}

impl BotLoop {
    fn new(channel: Box<dyn ChannelAdapter>, service: DialogService) -> Self {
        Self { channel, service }
    }

    /// Runs the loop until the cancellation token is triggered.
    ///
    /// Messages are pulled one at a time, so every user's events are
    /// handled in arrival order.
    async fn run(&mut self, cancel: CancellationToken) -> Result<(), VirtshopError> {
        info!("bot loop running");

        loop {
            tokio::select! {
                msg = self.channel.receive() => {
                    match msg {
                        Ok(inbound) => self.handle_inbound(inbound).await,
                        Err(e) => {
                            error!(error = %e, "channel receive error");
                            // If the channel is closed, break out of the loop.
                            if e.to_string().contains("closed") {
                                break;
                            }
                        }
                    }
                }
                _ = cancel.cancelled() => {
                    info!("shutdown signal received, stopping bot loop");
                    break;
                }
            }
        }

        self.channel.shutdown().await?;
        info!("bot loop stopped");
        Ok(())
    }

    /// Handles a single inbound message. Send failures are logged and
    /// skipped; the wizard state has already advanced, and the user can
    /// repeat their input.
    async fn handle_inbound(&self, inbound: InboundMessage) {
        let chat_id = inbound.chat_id;
        let replies = self.service.handle(&inbound).await;

        for reply in replies {
            if let Err(e) = self.channel.send(chat_id, reply).await {
                error!(error = %e, chat_id, "failed to send reply");
            }
        }
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    // Directives need each workspace crate by name; a bare `virtshop=`
    // prefix would not match the `virtshop_dialog`/`virtshop_telegram`
    // targets.
    let directives = format!(
        "warn,virtshop={log_level},virtshop_dialog={log_level},virtshop_telegram={log_level}"
    );

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
