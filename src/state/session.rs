//! Session gate: the one owner of authentication state.
//!
//! DESIGN
//! ======
//! The gate publishes a [`Session`] snapshot through a `tokio::sync::watch`
//! channel; views subscribe and re-render on change. The gate is the only
//! writer. Login/logout/refresh are async and suspend only at network
//! boundaries.
//!
//! Staleness is handled with a generation counter instead of cancellation:
//! every operation captures the generation when it starts and commits its
//! final state only if no teardown has happened in between. Ordinary
//! completions never invalidate each other — the last one to finish simply
//! writes last. Only `logout` (and a failed login, which is its own terminal
//! outcome) commits unconditionally and bumps the generation, so a `login`
//! or `refresh_user` that resolves after a newer `logout` is discarded and
//! a late success can never resurrect a user whose session was just torn
//! down.
//!
//! While mounted, the gate is registered as the transport's unauthorized
//! observer: any 401 anywhere forces a logout. The registration is released
//! when the [`SessionMount`] guard drops.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;

use crate::net::api;
use crate::net::http::{Transport, UnauthorizedObserver};
use crate::net::types::User;
use crate::store::CredentialStore;

/// Message shown when the initial session check fails for a reason other
/// than missing/expired credentials.
const SESSION_CHECK_FALLBACK: &str = "Could not validate the session.";

/// Message shown when an explicit login attempt is rejected without a
/// server-provided detail.
const LOGIN_FALLBACK: &str = "Invalid credentials.";

/// Reactive session snapshot observed by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub is_loading: bool,
    /// Human-readable failure from the last operation, if any. The expected
    /// 401/403 on the initial session check never sets this.
    pub error: Option<String>,
}

impl Session {
    /// State before the first `refresh_user` resolves.
    #[must_use]
    pub fn initial() -> Self {
        Self { user: None, is_loading: true, error: None }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Owns the session state machine. Always used behind an [`Arc`] so it can
/// register itself as the transport's unauthorized observer.
pub struct SessionGate {
    transport: Arc<Transport>,
    store: Arc<CredentialStore>,
    state: watch::Sender<Session>,
    /// Teardown counter; see module docs. Only unconditional commits bump
    /// it, so in-flight operations survive ordinary completions.
    generation: Mutex<u64>,
    /// Guards against logout re-entry, e.g. a 401 raised by the
    /// best-effort logout request itself.
    logging_out: AtomicBool,
}

/// Scoped registration of the gate as the transport's unauthorized
/// observer. Dropping it clears the slot, so the handler cannot outlive
/// the mount.
pub struct SessionMount {
    transport: Arc<Transport>,
}

impl Drop for SessionMount {
    fn drop(&mut self) {
        self.transport.set_unauthorized_observer(None);
    }
}

impl SessionGate {
    #[must_use]
    pub fn new(transport: Arc<Transport>, store: Arc<CredentialStore>) -> Arc<Self> {
        let (state, _) = watch::channel(Session::initial());
        Arc::new(Self {
            transport,
            store,
            state,
            generation: Mutex::new(0),
            logging_out: AtomicBool::new(false),
        })
    }

    /// Register as the transport's unauthorized observer and run the
    /// initial session check. Keep the returned guard alive for as long as
    /// the gate should react to 401s.
    pub async fn mount(self: Arc<Self>) -> SessionMount {
        let observer: Arc<dyn UnauthorizedObserver> = self.clone();
        self.transport.set_unauthorized_observer(Some(&observer));
        self.refresh_user().await;
        SessionMount { transport: Arc::clone(&self.transport) }
    }

    /// Subscribe to session changes. The receiver always sees the latest
    /// snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Current session snapshot.
    #[must_use]
    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Re-fetch the current user from `/auth/me` and settle the session.
    ///
    /// A 401/403 here is the expected "not signed in" answer and ends in a
    /// silent anonymous state; any other failure records a display message.
    pub async fn refresh_user(&self) {
        let started = self.current_generation();
        let outcome = api::current_user(&self.transport).await;
        self.commit(started, move |session| {
            match outcome {
                Ok(user) => {
                    session.user = Some(user);
                    session.error = None;
                }
                Err(ref e) if e.is_unauthorized() => {
                    session.user = None;
                    session.error = None;
                }
                Err(ref e) => {
                    session.user = None;
                    session.error = Some(e.user_message(SESSION_CHECK_FALLBACK));
                }
            }
            session.is_loading = false;
        });
    }

    /// Authenticate. On success the credential is stored and the session
    /// re-checked; on failure the session records a display message.
    ///
    /// Returns whether the login succeeded — this never panics and the
    /// boolean is the whole contract.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let started = {
            let generation = self.generation.lock().unwrap_or_else(PoisonError::into_inner);
            self.state.send_modify(|s| s.is_loading = true);
            *generation
        };
        match api::login(&self.transport, email, password).await {
            Ok(resp) => {
                // Store the credential only if no teardown has committed
                // since we started; checked under the generation lock so
                // the decision and the write are one step.
                let fresh = {
                    let generation = self.generation.lock().unwrap_or_else(PoisonError::into_inner);
                    if *generation == started {
                        self.store.set(&resp.access_token);
                        true
                    } else {
                        false
                    }
                };
                if fresh {
                    self.refresh_user().await;
                } else {
                    tracing::debug!("login resolved after a session teardown — discarded");
                }
                true
            }
            Err(e) => {
                let message = e.user_message(LOGIN_FALLBACK);
                tracing::debug!(error = %e, "login rejected");
                // Unguarded on purpose: a 401 on the login call itself has
                // already forced a logout (bumping the generation), and the
                // user still needs to see why the login failed. This write
                // never touches `user`.
                self.force_commit(|session| {
                    session.error = Some(message);
                    session.is_loading = false;
                });
                false
            }
        }
    }

    /// Tear the session down. The credential is cleared before the network
    /// call so no further request can carry it; the server-side logout is
    /// best-effort and its failure is ignored. Always ends anonymous and
    /// not loading. Safe to call repeatedly.
    pub async fn logout(&self) {
        if self.logging_out.swap(true, Ordering::AcqRel) {
            return;
        }
        self.state.send_modify(|s| s.is_loading = true);
        self.store.clear();
        if let Err(e) = api::logout(&self.transport).await {
            tracing::debug!(error = %e, "best-effort logout request failed — ignored");
        }
        self.force_commit(|session| {
            session.user = None;
            session.is_loading = false;
        });
        self.logging_out.store(false, Ordering::Release);
    }

    /// True iff a user is loaded and their role set intersects `roles`.
    /// Pure and synchronous; never touches the network.
    #[must_use]
    pub fn has_role(&self, roles: &[&str]) -> bool {
        self.state
            .borrow()
            .user
            .as_ref()
            .is_some_and(|user| roles.iter().any(|role| user.roles.contains(*role)))
    }

    fn current_generation(&self) -> u64 {
        *self.generation.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a completing write only if no teardown committed since
    /// `started`. Ordinary completions race by finishing order: the last
    /// one to resolve writes last. Returns whether the write happened.
    fn commit(&self, started: u64, apply: impl FnOnce(&mut Session)) -> bool {
        let generation = self.generation.lock().unwrap_or_else(PoisonError::into_inner);
        if *generation != started {
            tracing::debug!(started, current = *generation, "stale session write discarded");
            return false;
        }
        self.state.send_modify(apply);
        true
    }

    /// Apply a completing write unconditionally and bump the generation,
    /// invalidating any operation still in flight.
    fn force_commit(&self, apply: impl FnOnce(&mut Session)) {
        let mut generation = self.generation.lock().unwrap_or_else(PoisonError::into_inner);
        *generation += 1;
        self.state.send_modify(apply);
    }
}

#[async_trait::async_trait]
impl UnauthorizedObserver for SessionGate {
    async fn on_unauthorized(&self) {
        self.logout().await;
    }
}
