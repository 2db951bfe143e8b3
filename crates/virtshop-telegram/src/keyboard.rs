// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering of channel-agnostic keyboard instructions into Telegram
//! reply markup.

use teloxide::types::{KeyboardButton, KeyboardMarkup, KeyboardRemove, ReplyMarkup};
use virtshop_core::types::Keyboard;

/// Converts a [`Keyboard`] instruction into Telegram reply markup.
///
/// Option keyboards always request `resize_keyboard` so menus stay
/// compact on phones; `one_time_keyboard` follows the instruction flag.
pub fn reply_markup(keyboard: &Keyboard) -> ReplyMarkup {
    match keyboard {
        Keyboard::Options { rows, one_time } => {
            let buttons = rows
                .iter()
                .map(|row| row.iter().map(KeyboardButton::new).collect::<Vec<_>>());
            let mut markup = KeyboardMarkup::new(buttons);
            markup.resize_keyboard = true;
            markup.one_time_keyboard = *one_time;
            ReplyMarkup::Keyboard(markup)
        }
        Keyboard::Remove => ReplyMarkup::KeyboardRemove(KeyboardRemove::new()),
    }
}
