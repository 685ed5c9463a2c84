//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes, the header menu, and the login page all need the same
//! guard and dashboard decisions; they live here so each screen stays
//! declarative.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use vendorhub::{Destination, GuardState, Role, RouteGuard, SessionSnapshot};

use crate::util::browser::page_is_leaving;

#[cfg(feature = "hydrate")]
use crate::state::session::SessionContext;

/// Run a [`RouteGuard`] against `snapshot` and `required_role`, calling
/// `navigate` once per redirect decision. The returned signal drives what
/// the protected subtree renders.
pub fn install_route_guard<F>(
    snapshot: RwSignal<SessionSnapshot>,
    required_role: MaybeProp<Role>,
    navigate: F,
) -> RwSignal<GuardState>
where
    F: Fn(Destination) + 'static,
{
    let state = RwSignal::new(GuardState::Loading);
    let guard = StoredValue::new(RouteGuard::new(required_role.get_untracked()));
    Effect::new(move || {
        let current = snapshot.get();
        let role = required_role.get();
        let next = guard.try_update_value(|g| {
            g.set_required_role(role);
            g.observe(&current, &navigate)
        });
        if let Some(next) = next {
            state.set(next);
        }
    });
    state
}

/// Replace the current route with `destination` through the client router.
/// Skipped once the controller has started a full-page navigation, so a
/// logout on a protected page navigates once.
pub fn route_to<N>(destination: Destination, navigate: &N)
where
    N: Fn(&str, NavigateOptions),
{
    if page_is_leaving() {
        return;
    }
    navigate(destination.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
}

/// Dashboard link for the signed-in user, `None` when signed out.
pub fn dashboard_href(snapshot: &SessionSnapshot) -> Option<&'static str> {
    snapshot.role().map(|role| Destination::dashboard_for(role).path())
}

/// Re-check expiry until the component owning this call is cleaned up.
/// Sleeps until the token's expiry, capped so clock changes are noticed.
#[cfg(feature = "hydrate")]
pub fn install_expiry_watch(session: SessionContext) {
    const MAX_WAIT_SECS: u64 = 60;

    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    let alive_task = alive.clone();
    leptos::task::spawn_local(async move {
        loop {
            let wait = session
                .controller
                .seconds_until_expiry()
                .map_or(MAX_WAIT_SECS, |secs| secs.clamp(1, MAX_WAIT_SECS));
            gloo_timers::future::sleep(std::time::Duration::from_secs(wait)).await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            if session.controller.expire_if_due() {
                log::info!("session expired while the tab was open");
            }
        }
    });
    on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
}
