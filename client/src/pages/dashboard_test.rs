use super::*;

fn identity(slug: Option<&str>) -> Identity {
    Identity {
        email: "a@x.com".to_owned(),
        role: Role::Vendor,
        name: "Ada".to_owned(),
        slug: slug.map(str::to_owned),
        expires_at: None,
    }
}

#[test]
fn greeting_includes_slug_when_present() {
    assert_eq!(greeting(&identity(Some("acme"))), "Welcome back, Ada (acme)");
    assert_eq!(greeting(&identity(None)), "Welcome back, Ada");
}

#[test]
fn dashboard_title_per_role() {
    assert_eq!(dashboard_title(&Role::Customer), "Customer Dashboard");
    assert_eq!(dashboard_title(&Role::Vendor), "Vendor Dashboard");
    assert_eq!(dashboard_title(&Role::Admin), "Admin Dashboard");
    assert_eq!(dashboard_title(&Role::Other("guest".to_owned())), "Dashboard");
}
