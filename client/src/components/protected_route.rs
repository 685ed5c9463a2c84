//! Role-gated wrapper for dashboard routes.
//!
//! Children render only once the session has finished loading and the user
//! satisfies `required_role`. Everything else either shows a spinner or
//! navigates away.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use vendorhub::{GuardState, Role};

use crate::state::session::use_session;
use crate::util::auth::{install_route_guard, route_to};

#[component]
pub fn ProtectedRoute(
    /// Role the current user must hold. Any signed-in user passes when unset.
    #[prop(optional, into)]
    required_role: MaybeProp<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = match use_session() {
        Ok(session) => session,
        Err(e) => {
            return view! { <div class="protected-route__error">{e.to_string()}</div> }.into_any();
        }
    };

    let navigate = use_navigate();
    let state = install_route_guard(session.snapshot, required_role, move |destination| {
        route_to(destination, &navigate);
    });

    view! {
        {move || match state.get() {
            GuardState::Loading => view! {
                <div class="protected-route__loading">
                    <span class="spinner" aria-label="Loading session"></span>
                </div>
            }
            .into_any(),
            GuardState::Redirecting(_) => ().into_any(),
            GuardState::Authorized => children().into_any(),
        }}
    }
    .into_any()
}
