//! Role dashboards and the public landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each dashboard sits behind `ProtectedRoute` with its role, so a user who
//! types another role's URL is sent back to their own dashboard.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use vendorhub::{Identity, Role};

use crate::components::protected_route::ProtectedRoute;
use crate::components::session_menu::SessionMenu;
use crate::state::session::use_session;

/// Greeting line for the dashboard header.
fn greeting(identity: &Identity) -> String {
    match identity.slug.as_deref() {
        Some(slug) => format!("Welcome back, {} ({slug})", identity.name),
        None => format!("Welcome back, {}", identity.name),
    }
}

fn dashboard_title(role: &Role) -> &'static str {
    match role {
        Role::Customer => "Customer Dashboard",
        Role::Vendor => "Vendor Dashboard",
        Role::Admin => "Admin Dashboard",
        Role::Other(_) => "Dashboard",
    }
}

/// Shared dashboard body; only rendered once the route guard authorizes.
#[component]
fn DashboardBody(role: Role) -> impl IntoView {
    let title = dashboard_title(&role);
    let user = use_session().ok().and_then(|session| session.user());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{title}</h1>
                <SessionMenu/>
            </header>
            <p class="dashboard-page__greeting">{user.as_ref().map(greeting)}</p>
        </div>
    }
}

#[component]
pub fn CustomerDashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute required_role=Role::Customer>
            <DashboardBody role=Role::Customer/>
        </ProtectedRoute>
    }
}

#[component]
pub fn VendorDashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute required_role=Role::Vendor>
            <DashboardBody role=Role::Vendor/>
        </ProtectedRoute>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute required_role=Role::Admin>
            <DashboardBody role=Role::Admin/>
        </ProtectedRoute>
    }
}

/// Public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"VendorHub"</h1>
                <SessionMenu/>
            </header>
            <p>"Marketplace tools for customers, vendors and administrators."</p>
        </div>
    }
}
