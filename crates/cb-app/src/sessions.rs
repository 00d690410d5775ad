//! Live wizard sessions.
//!
//! Sessions are in-memory only. Settings survive restarts through the
//! store; an open dialog does not, and a button press on a menu from
//! before a restart simply starts a fresh session on that message.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use cb_core::ids::{MessageId, UserId};
use cb_core::wizard::WizardState;

/// One user's open settings dialog.
#[derive(Debug)]
pub struct UserSession {
    pub state: WizardState,
    /// Menu message the wizard keeps editing in place.
    pub menu_message: Option<MessageId>,
}

impl UserSession {
    pub fn new(state: WizardState, menu_message: Option<MessageId>) -> Self {
        Self {
            state,
            menu_message,
        }
    }
}

/// All open dialogs, one at most per user.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<UserId, Arc<Mutex<UserSession>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, user: UserId) -> Option<Arc<Mutex<UserSession>>> {
        self.sessions.read().await.get(&user).cloned()
    }

    /// Replaces any existing session wholesale. Opening a new menu while an
    /// old dialog is still around abandons the old one.
    pub async fn replace(&self, user: UserId, session: UserSession) -> Arc<Mutex<UserSession>> {
        let handle = Arc::new(Mutex::new(session));
        self.sessions
            .write()
            .await
            .insert(user, handle.clone());
        handle
    }

    pub async fn remove(&self, user: UserId) {
        self.sessions.write().await.remove(&user);
    }
}

/// Hands out one turn per user at a time.
///
/// The router holds a user's turn for the whole of an event, so a second
/// event from the same user waits until the first one finished. Different
/// users never wait on each other.
#[derive(Default)]
pub struct EventGate {
    turns: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl EventGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, user: UserId) -> OwnedMutexGuard<()> {
        let turn = {
            let mut turns = self.turns.lock().await;
            turns.entry(user).or_default().clone()
        };
        turn.lock_owned().await
    }

    /// Returns a turn and forgets the user's entry once nobody waits on it.
    pub async fn release(&self, user: UserId, turn: OwnedMutexGuard<()>) {
        drop(turn);
        let mut turns = self.turns.lock().await;
        if turns.get(&user).is_some_and(|t| Arc::strong_count(t) == 1) {
            turns.remove(&user);
        }
    }
}
