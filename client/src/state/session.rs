//! Reactive session handle for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the tab's `SessionController` and provides a
//! [`SessionContext`] through Leptos context. The controller stays the only
//! writer; the context mirrors every controller change into an `RwSignal` so
//! components and effects re-run on session transitions.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use vendorhub::{Identity, SessionController, SessionError, SessionSnapshot};

/// Controller plus a reactive mirror of its snapshot.
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub controller: SessionController,
    pub snapshot: RwSignal<SessionSnapshot>,
}

impl SessionContext {
    /// Wrap `controller` and keep the signal in sync with it.
    pub fn new(controller: SessionController) -> Self {
        let snapshot = RwSignal::new(controller.snapshot());
        let subscription = controller.subscribe(move |next| {
            snapshot.try_set(next.clone());
        });
        let cleanup_controller = controller.clone();
        on_cleanup(move || {
            cleanup_controller.unsubscribe(subscription);
        });
        Self { controller, snapshot }
    }

    pub fn login(&self, token: &str) {
        self.controller.login(token);
    }

    pub fn logout(&self) {
        self.controller.logout();
    }

    /// Tracked read of the current user.
    pub fn user(&self) -> Option<Identity> {
        self.snapshot.with(|s| s.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.with(SessionSnapshot::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.with(SessionSnapshot::is_loading)
    }
}

/// Build a [`SessionContext`] for `controller` and provide it to descendants.
pub fn provide_session(controller: SessionController) -> SessionContext {
    let session = SessionContext::new(controller);
    provide_context(session.clone());
    session
}

/// The session provided by an ancestor, or
/// [`SessionError::MissingSessionContext`] when none was.
pub fn use_session() -> Result<SessionContext, SessionError> {
    use_context::<SessionContext>().ok_or(SessionError::MissingSessionContext)
}
