// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The wizard's transition function.
//!
//! `DialogEngine::step` is pure: current state + draft + one inbound text
//! in, next state + updated draft + replies (and possibly a finalized
//! order) out. All storage, locking, and delivery happens around it, so
//! every transition in this file is testable without a network.

use std::str::FromStr;

use chrono::Utc;
use tracing::{debug, warn};
use virtshop_core::types::{FinalizedOrder, OrderAction, PaymentMethod, Reply, Sender};

use crate::amount::parse_amount;
use crate::catalog::OptionCatalog;
use crate::draft::OrderDraft;
use crate::pricing::price_rub;
use crate::state::DialogState;
use crate::text;

/// Shop-specific values baked into replies.
#[derive(Debug, Clone)]
pub struct ShopInfo {
    pub support_contact: String,
    pub reviews_channel: String,
    pub payment_link: String,
}

/// Outcome of one engine step.
#[derive(Debug)]
pub struct StepResult {
    pub state: DialogState,
    pub draft: OrderDraft,
    pub replies: Vec<Reply>,
    /// Present exactly when this step confirmed an order.
    pub order: Option<FinalizedOrder>,
}

impl StepResult {
    /// Stay where we are, answer with one reply.
    fn stay(state: DialogState, draft: OrderDraft, reply: Reply) -> Self {
        Self {
            state,
            draft,
            replies: vec![reply],
            order: None,
        }
    }

    /// Leave the wizard with a cleared draft.
    fn reset(reply: Reply) -> Self {
        Self {
            state: DialogState::Idle,
            draft: OrderDraft::default(),
            replies: vec![reply],
            order: None,
        }
    }

    /// Move to `state`, answer with one reply.
    fn advance(state: DialogState, draft: OrderDraft, reply: Reply) -> Self {
        Self {
            state,
            draft,
            replies: vec![reply],
            order: None,
        }
    }
}

/// The order wizard.
pub struct DialogEngine {
    catalog: OptionCatalog,
    shop: ShopInfo,
}

impl DialogEngine {
    pub fn new(catalog: OptionCatalog, shop: ShopInfo) -> Self {
        Self { catalog, shop }
    }

    /// Advances one session by one inbound text.
    pub fn step(
        &self,
        state: DialogState,
        draft: OrderDraft,
        sender: &Sender,
        input: &str,
    ) -> StepResult {
        // Commands work in every state. /start restarts the wizard from
        // scratch; /help answers without touching the session.
        if input == text::START_COMMAND {
            debug!(user_id = %sender.id, "wizard (re)started");
            return StepResult {
                state: DialogState::Action,
                draft: OrderDraft::default(),
                replies: vec![
                    Reply::text(text::welcome()),
                    Reply::with_keyboard(text::action_prompt(), text::action_menu()),
                ],
                order: None,
            };
        }
        if input == text::HELP_COMMAND {
            return StepResult {
                state,
                draft,
                replies: vec![Reply::text(text::help())],
                order: None,
            };
        }

        match state {
            DialogState::Idle => {
                StepResult::stay(state, draft, Reply::text(text::idle_hint()))
            }
            DialogState::Action => self.on_action(draft, input),
            DialogState::Project => self.on_project(draft, input),
            DialogState::Server => self.on_server(draft, input),
            DialogState::Amount => self.on_amount(draft, input),
            DialogState::PaymentType => self.on_payment(draft, sender, input),
            DialogState::Confirm => self.on_confirm(draft, sender, input),
        }
    }

    fn on_action(&self, draft: OrderDraft, input: &str) -> StepResult {
        match input {
            text::BACK => StepResult::reset(Reply::remove_keyboard(text::restart_hint())),
            text::REVIEWS => {
                StepResult::reset(Reply::remove_keyboard(text::reviews(&self.shop.reviews_channel)))
            }
            text::SUPPORT => {
                StepResult::reset(Reply::remove_keyboard(text::support(&self.shop.support_contact)))
            }
            _ => match OrderAction::from_str(input) {
                Ok(action) => {
                    let mut draft = draft;
                    draft.action = Some(action);
                    StepResult::advance(
                        DialogState::Project,
                        draft,
                        Reply::with_keyboard(
                            text::project_prompt(Some(action)),
                            text::project_menu(&self.catalog),
                        ),
                    )
                }
                Err(_) => StepResult::stay(
                    DialogState::Action,
                    draft,
                    Reply::with_keyboard(text::invalid_action(), text::action_menu()),
                ),
            },
        }
    }

    fn on_project(&self, mut draft: OrderDraft, input: &str) -> StepResult {
        if input == text::BACK {
            return StepResult::advance(
                DialogState::Action,
                draft,
                Reply::with_keyboard(text::action_prompt(), text::action_menu()),
            );
        }
        if self.catalog.is_project(input) {
            draft.project = Some(input.to_string());
            return StepResult::advance(
                DialogState::Server,
                draft,
                Reply::with_keyboard(
                    text::server_prompt(input),
                    text::server_menu(&self.catalog, input),
                ),
            );
        }
        StepResult::stay(
            DialogState::Project,
            draft,
            Reply::with_keyboard(text::invalid_project(), text::project_menu(&self.catalog)),
        )
    }

    fn on_server(&self, mut draft: OrderDraft, input: &str) -> StepResult {
        if input == text::BACK {
            let prompt = text::project_prompt(draft.action);
            return StepResult::advance(
                DialogState::Project,
                draft,
                Reply::with_keyboard(prompt, text::project_menu(&self.catalog)),
            );
        }
        let project = draft.project.clone().unwrap_or_default();
        if self.catalog.is_server_of(&project, input) {
            draft.server = Some(input.to_string());
            return StepResult::advance(
                DialogState::Amount,
                draft,
                Reply::with_keyboard(text::amount_prompt(input), text::amount_menu()),
            );
        }
        StepResult::stay(
            DialogState::Server,
            draft,
            Reply::with_keyboard(
                text::invalid_server(),
                text::server_menu(&self.catalog, &project),
            ),
        )
    }

    fn on_amount(&self, mut draft: OrderDraft, input: &str) -> StepResult {
        if input == text::BACK {
            let project = draft.project.clone().unwrap_or_default();
            return StepResult::advance(
                DialogState::Server,
                draft,
                Reply::with_keyboard(
                    text::server_reprompt(&project),
                    text::server_menu(&self.catalog, &project),
                ),
            );
        }
        match parse_amount(input) {
            Ok(units) => {
                let Some(action) = draft.action else {
                    // Unreachable on any forward path; treat as invalid
                    // input instead of panicking.
                    warn!("amount step reached without an action in the draft");
                    return StepResult::stay(
                        DialogState::Amount,
                        draft,
                        Reply::text(text::invalid_amount()),
                    );
                };
                let price = price_rub(action, units);
                draft.amount_units = Some(units);
                draft.price_rub = Some(price);
                debug!(units, price_rub = price, "amount accepted");
                StepResult::advance(
                    DialogState::PaymentType,
                    draft,
                    Reply::with_keyboard(text::payment_prompt(units), text::payment_menu()),
                )
            }
            Err(reason) => {
                debug!(%reason, "amount rejected");
                // The back-only keyboard is persistent, no need to resend it.
                StepResult::stay(DialogState::Amount, draft, Reply::text(text::invalid_amount()))
            }
        }
    }

    fn on_payment(&self, mut draft: OrderDraft, sender: &Sender, input: &str) -> StepResult {
        if input == text::BACK {
            let reprompt = text::amount_reprompt(draft.amount_units);
            return StepResult::advance(
                DialogState::Amount,
                draft,
                Reply::with_keyboard(reprompt, text::amount_menu()),
            );
        }
        match PaymentMethod::from_str(input) {
            Ok(method) => {
                draft.payment_method = Some(method);
                draft.username = sender.username.clone();
                draft.user_id = Some(sender.id);
                let summary = text::order_summary(&draft);
                StepResult::advance(
                    DialogState::Confirm,
                    draft,
                    Reply::with_keyboard(summary, text::confirm_menu()),
                )
            }
            Err(_) => StepResult::stay(
                DialogState::PaymentType,
                draft,
                Reply::with_keyboard(text::invalid_payment(), text::payment_menu()),
            ),
        }
    }

    fn on_confirm(&self, draft: OrderDraft, sender: &Sender, input: &str) -> StepResult {
        match input {
            text::BACK => StepResult::advance(
                DialogState::PaymentType,
                draft,
                Reply::with_keyboard(text::payment_reprompt(), text::payment_menu()),
            ),
            text::CANCEL => {
                debug!(user_id = %sender.id, "order cancelled");
                StepResult::reset(Reply::remove_keyboard(text::cancelled()))
            }
            text::CONFIRM => match draft.finalize(Utc::now()) {
                Some(order) => StepResult {
                    state: DialogState::Idle,
                    draft: OrderDraft::default(),
                    replies: vec![
                        Reply::remove_keyboard(text::payment_link(&self.shop.payment_link)),
                        Reply::text(text::order_accepted()),
                        Reply::with_keyboard(text::new_order_prompt(), text::new_order_menu()),
                    ],
                    order: Some(order),
                },
                None => {
                    warn!(user_id = %sender.id, "confirmation with an incomplete draft");
                    StepResult::stay(
                        DialogState::Confirm,
                        draft,
                        Reply::with_keyboard(text::invalid_confirm(), text::confirm_menu()),
                    )
                }
            },
            _ => StepResult::stay(
                DialogState::Confirm,
                draft,
                Reply::with_keyboard(text::invalid_confirm(), text::confirm_menu()),
            ),
        }
    }
}
