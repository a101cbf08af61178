//! Process-wide authentication state.
//!
//! A [`SessionManager`] moves through
//! `Uninitialized -> Checking -> {Authenticated, Unauthenticated}` and passes
//! back through `Checking` for every login, signup or logout. `loading` is
//! true exactly while one of those transitions is running.
//!
//! Transitions are serialized: a second call waits for the first to settle
//! before it starts, so overlapping calls apply in order and the last one
//! decides the final state. Every published state is visible to
//! [`SessionManager::subscribe`] receivers.

mod notify;
mod token;

pub use notify::*;
pub use token::*;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};

use crate::error::Error;
use crate::latency::{Latency, Op};
use crate::models::{SignupInput, User};
use crate::store::{demo_user, Store};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Startup check has not run yet.
    Uninitialized,
    /// A transition is in flight.
    Checking,
    Authenticated,
    Unauthenticated,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Checking => "checking",
            Self::Authenticated => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }
}

/// Snapshot of the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    fn initial() -> Self {
        Self {
            phase: SessionPhase::Uninitialized,
            user: None,
            loading: true,
        }
    }

    fn authenticated(user: User) -> Self {
        Self {
            phase: SessionPhase::Authenticated,
            user: Some(user),
            loading: false,
        }
    }

    fn unauthenticated() -> Self {
        Self {
            phase: SessionPhase::Unauthenticated,
            user: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }
}

pub struct SessionManager {
    store: Store,
    tokens: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
    latency: Latency,
    state: watch::Sender<SessionState>,
    transition: Mutex<()>,
}

impl SessionManager {
    pub fn new(
        store: Store,
        tokens: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
        latency: Latency,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::initial());
        Self {
            store,
            tokens,
            notifier,
            latency,
            state,
            transition: Mutex::new(()),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Restore a saved session, if any. A failing token store is logged and
    /// treated as "no session".
    pub async fn initialize(&self) {
        let _guard = self.transition.lock().await;
        self.begin();

        self.latency.wait(Op::StorageRead).await;
        let next = match self.tokens.load() {
            Ok(Some(_)) => SessionState::authenticated(demo_user()),
            Ok(None) => SessionState::unauthenticated(),
            Err(e) => {
                let err = Error::Unhandled(e.to_string());
                tracing::error!("Failed to load auth status: {}", err);
                SessionState::unauthenticated()
            }
        };
        self.publish(next);
    }

    /// Returns `true` on success. On failure the error message goes to the
    /// notifier and the previous settled state is kept.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let _guard = self.transition.lock().await;
        let previous = self.begin();

        match self.store.login(email, password).await {
            Ok(response) => {
                self.save_token(&response.token);
                self.publish(SessionState::authenticated(response.user));
                true
            }
            Err(e) => {
                self.fail(previous, &e);
                false
            }
        }
    }

    /// Same contract as [`login`](Self::login). A successful signup is
    /// logged in straight away.
    pub async fn signup(&self, input: SignupInput) -> bool {
        let _guard = self.transition.lock().await;
        let previous = self.begin();

        match self.store.signup(input).await {
            Ok(response) => {
                self.save_token(&response.token);
                self.publish(SessionState::authenticated(response.user));
                true
            }
            Err(e) => {
                self.fail(previous, &e);
                false
            }
        }
    }

    pub async fn logout(&self) {
        let _guard = self.transition.lock().await;
        self.begin();

        self.latency.wait(Op::StorageClear).await;
        if let Err(e) = self.tokens.clear() {
            tracing::warn!("Failed to clear stored token: {}", e);
        }
        self.publish(SessionState::unauthenticated());
    }

    /// Enter `Checking` and return the state being left.
    fn begin(&self) -> SessionState {
        let previous = self.state();
        self.state.send_modify(|s| {
            s.phase = SessionPhase::Checking;
            s.loading = true;
        });
        previous
    }

    fn publish(&self, next: SessionState) {
        tracing::info!(
            phase = next.phase.as_str(),
            user = next.user.as_ref().map(|u| u.id.as_str()),
            "Session state changed"
        );
        self.state.send_replace(next);
    }

    fn fail(&self, previous: SessionState, err: &Error) {
        self.notifier.notify(&err.to_string());
        let next = match previous.phase {
            SessionPhase::Authenticated => SessionState {
                loading: false,
                ..previous
            },
            _ => SessionState::unauthenticated(),
        };
        self.publish(next);
    }

    fn save_token(&self, token: &str) {
        if let Err(e) = self.tokens.save(token) {
            tracing::warn!("Failed to store session token: {}", e);
        }
    }
}
