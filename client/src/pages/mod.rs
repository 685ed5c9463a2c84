//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates gating and
//! session chrome to `components`.

pub mod dashboard;
pub mod login;
