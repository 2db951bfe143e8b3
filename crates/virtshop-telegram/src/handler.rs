// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Update filtering and conversion into channel-agnostic messages.
//!
//! The wizard only ever reacts to plain text sent in a private chat, so
//! everything else (groups, channels, media, senderless service posts)
//! is dropped here before the dialogue service sees it.

use teloxide::prelude::*;
use teloxide::types::ChatKind;
use virtshop_core::types::{InboundMessage, Sender, UserId};

/// True when the message arrived in a one-on-one chat.
pub fn is_dm(msg: &Message) -> bool {
    matches!(msg.chat.kind, ChatKind::Private(_))
}

/// Converts a Telegram message into an [`InboundMessage`].
///
/// Returns `None` for non-text messages (photos, stickers, documents)
/// and for messages without a sender, which cannot be tied to a
/// conversation.
pub fn to_inbound_message(msg: &Message) -> Option<InboundMessage> {
    let text = msg.text()?;
    let user = msg.from.as_ref()?;

    Some(InboundMessage {
        chat_id: msg.chat.id.0,
        sender: Sender {
            id: UserId(user.id.0 as i64),
            username: user.username.clone(),
        },
        text: text.to_string(),
    })
}
