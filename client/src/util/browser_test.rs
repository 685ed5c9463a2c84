use super::*;

#[test]
fn page_is_not_leaving_until_marked() {
    assert!(!page_is_leaving());
    mark_leaving();
    assert!(page_is_leaving());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_unavailable_outside_the_browser() {
    assert!(matches!(LocalStorage.get("authToken"), Err(StorageError::Unavailable(_))));
    assert!(matches!(LocalStorage.set("authToken", "a.b.c"), Err(StorageError::Unavailable(_))));
    assert!(matches!(LocalStorage.remove("authToken"), Err(StorageError::Unavailable(_))));
}
