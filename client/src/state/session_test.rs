use std::sync::Arc;

use vendorhub::navigation::RecordingNavigator;
use vendorhub::{MemoryStorage, Role};

use super::*;

const TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.eyJlbWFpbCI6ImFAeC5jb20iLCJyb2xlIjoidmVuZG9yIiwic2x1ZyI6ImFjbWUifQ.c2ln";

fn controller() -> SessionController {
    SessionController::new(Arc::new(MemoryStorage::new()), Arc::new(RecordingNavigator::new()))
}

#[test]
fn use_session_without_provider_is_missing_context() {
    let owner = Owner::new();
    owner.with(|| {
        assert!(matches!(use_session(), Err(SessionError::MissingSessionContext)));
    });
}

#[test]
fn provided_session_is_found() {
    let owner = Owner::new();
    owner.with(|| {
        provide_session(controller());
        assert!(use_session().is_ok());
    });
}

#[test]
fn signal_mirrors_controller_changes() {
    let owner = Owner::new();
    owner.with(|| {
        let session = provide_session(controller());
        assert!(session.snapshot.get_untracked().loading);

        session.controller.initialize();
        assert!(!session.snapshot.get_untracked().loading);

        session.login(TOKEN);
        let user = session.snapshot.get_untracked().user().cloned().unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.role, Role::Vendor);
        assert_eq!(user.slug.as_deref(), Some("acme"));

        session.logout();
        assert!(!session.snapshot.get_untracked().is_authenticated());
    });
}
