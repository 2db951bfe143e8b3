// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory session store.
//!
//! Sessions live only for the lifetime of the process. The store is keyed
//! by conversation identity and hands out access through a per-key closure
//! so that two events for the same user can never interleave a
//! read-modify-write; distinct users proceed in parallel.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use virtshop_core::types::UserId;

use crate::draft::OrderDraft;
use crate::state::DialogState;

/// One user's wizard progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub state: DialogState,
    pub draft: OrderDraft,
    /// Stamped on every handled event.
    pub last_activity: Option<DateTime<Utc>>,
}

/// Concurrent map of active sessions. Idle sessions are represented by
/// absence, so the map only holds users currently inside the wizard.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<UserId, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Runs `f` on the user's session under its entry lock and stamps
    /// `last_activity`. A missing entry starts as a fresh idle session;
    /// an entry left idle by `f` is removed again.
    pub fn update<R>(&self, user: UserId, f: impl FnOnce(&mut Session) -> R) -> R {
        let (result, idle) = {
            let mut entry = self.sessions.entry(user).or_default();
            let session = entry.value_mut();
            let result = f(session);
            session.last_activity = Some(Utc::now());
            (result, session.state == DialogState::Idle)
        };
        if idle {
            // Re-check under the lock: another event may have revived the
            // session between releasing the entry and getting here.
            self.sessions
                .remove_if(&user, |_, session| session.state == DialogState::Idle);
        }
        result
    }

    /// Snapshot of the user's session; absence reads as a fresh idle one.
    pub fn load(&self, user: UserId) -> Session {
        self.sessions
            .get(&user)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Number of users currently inside the wizard.
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }
}
