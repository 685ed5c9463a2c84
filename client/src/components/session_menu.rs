//! Header menu showing the signed-in user and a sign-out action.

use leptos::prelude::*;

use crate::state::session::use_session;
use crate::util::auth::dashboard_href;

#[component]
pub fn SessionMenu() -> impl IntoView {
    let Ok(session) = use_session() else {
        return ().into_any();
    };
    let snapshot = session.snapshot;

    view! {
        <nav class="session-menu">
            {move || match snapshot.with(|s| s.user().cloned()) {
                Some(user) => {
                    let href = snapshot.with(dashboard_href).unwrap_or("/");
                    let session = session.clone();
                    view! {
                        <a class="session-menu__name" href=href>{user.name}</a>
                        <span class="session-menu__role">{user.role.to_string()}</span>
                        <button class="session-menu__logout" on:click=move |_| session.logout()>
                            "Sign Out"
                        </button>
                    }
                    .into_any()
                }
                None => view! { <a class="session-menu__login" href="/login">"Sign In"</a> }.into_any(),
            }}
        </nav>
    }
    .into_any()
}
