//! Login page: accepts an access token issued by the auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Token issuance happens elsewhere; this page only hands the pasted token to
//! the session controller and forwards the user to their dashboard once the
//! session is established.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use vendorhub::Invalidation;

use crate::state::session::use_session;
use crate::util::auth::dashboard_href;

/// Trim pasted token input and require a value.
fn validate_token_input(raw: &str) -> Result<String, &'static str> {
    let token = raw.trim();
    if token.is_empty() {
        return Err("Paste your access token first.");
    }
    Ok(token.to_owned())
}

/// Notice for a session that was rejected or ran out.
fn invalidation_message(invalidation: Option<Invalidation>) -> Option<&'static str> {
    match invalidation? {
        Invalidation::Malformed => Some("That token could not be read. Please sign in again."),
        Invalidation::Expired => Some("Your session has expired. Please sign in again."),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = match use_session() {
        Ok(session) => session,
        Err(e) => return view! { <p class="login-message">{e.to_string()}</p> }.into_any(),
    };
    let token = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let navigate = use_navigate();

    // Already signed in, or just signed in: go to the role's dashboard.
    let snapshot = session.snapshot;
    Effect::new(move || {
        let current = snapshot.get();
        if current.is_loading() {
            return;
        }
        if let Some(href) = dashboard_href(&current) {
            navigate(href, NavigateOptions::default());
        }
    });

    let submit_session = session.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_token_input(&token.get()) {
            Ok(value) => {
                info.set(String::new());
                submit_session.login(&value);
                token.set(String::new());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    let notice = move || {
        let typed = info.get();
        if typed.is_empty() {
            snapshot.with(|s| invalidation_message(s.invalidation)).map(str::to_owned)
        } else {
            Some(typed)
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"VendorHub"</h1>
                <p class="login-card__subtitle">"Sign in with your access token"</p>
                <form class="login-form" on:submit=on_submit>
                    <textarea
                        class="login-input login-input--token"
                        placeholder="eyJhbGciOi..."
                        prop:value=move || token.get()
                        on:input=move |ev| token.set(event_target_value(&ev))
                    ></textarea>
                    <button class="login-button" type="submit" disabled=move || session.is_loading()>
                        "Sign In"
                    </button>
                </form>
                {move || notice().map(|text| view! { <p class="login-message">{text}</p> })}
            </div>
        </div>
    }
    .into_any()
}
