//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the tab's session from Leptos context; none of them
//! mutate it except through `SessionContext`.

pub mod protected_route;
pub mod session_menu;
