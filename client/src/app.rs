//! Root application component with routing and the session provider.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use vendorhub::SessionController;

use crate::pages::dashboard::{AdminDashboardPage, CustomerDashboardPage, HomePage, VendorDashboardPage};
use crate::pages::login::LoginPage;
use crate::state::session::provide_session;
use crate::util::browser::{LocalStorage, LocationNavigator};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the tab's single session controller. Startup reconstruction runs in
/// an effect so it only happens in the browser, where `localStorage` exists;
/// the server render always shows the loading state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let controller = SessionController::new(Arc::new(LocalStorage), Arc::new(LocationNavigator));
    let session = provide_session(controller);

    let startup = session.clone();
    Effect::new(move || startup.controller.initialize());

    #[cfg(feature = "hydrate")]
    crate::util::auth::install_expiry_watch(session);
    #[cfg(not(feature = "hydrate"))]
    drop(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/vendorhub.css"/>
        <Title text="VendorHub"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("customer")) view=CustomerDashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("vendor")) view=VendorDashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("admin")) view=AdminDashboardPage/>
            </Routes>
        </Router>
    }
}
