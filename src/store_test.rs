use super::*;

// =============================================================================
// In-memory behavior
// =============================================================================

#[test]
fn starts_empty() {
    let store = CredentialStore::in_memory();
    assert_eq!(store.get(), None);
}

#[test]
fn set_then_get_round_trips() {
    let store = CredentialStore::in_memory();
    store.set("tok1");
    assert_eq!(store.get(), Some("tok1".to_owned()));
}

#[test]
fn set_replaces_previous_credential() {
    let store = CredentialStore::in_memory();
    store.set("tok1");
    store.set("tok2");
    assert_eq!(store.get(), Some("tok2".to_owned()));
}

#[test]
fn clear_removes_credential() {
    let store = CredentialStore::in_memory();
    store.set("tok1");
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn clear_on_empty_store_is_a_no_op() {
    let store = CredentialStore::in_memory();
    store.clear();
    assert_eq!(store.get(), None);
}

// =============================================================================
// File persistence
// =============================================================================

#[test]
fn persisted_credential_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("token");

    let store = CredentialStore::with_persistence(path.clone());
    store.set("tok1");
    drop(store);

    let reopened = CredentialStore::with_persistence(path);
    assert_eq!(reopened.get(), Some("tok1".to_owned()));
}

#[test]
fn clear_removes_backing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("token");

    let store = CredentialStore::with_persistence(path.clone());
    store.set("tok1");
    store.clear();
    assert!(!path.exists());

    let reopened = CredentialStore::with_persistence(path);
    assert_eq!(reopened.get(), None);
}

#[test]
fn missing_file_starts_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = CredentialStore::with_persistence(dir.path().join("does-not-exist"));
    assert_eq!(store.get(), None);
}

#[test]
fn stored_value_is_trimmed_on_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("token");
    std::fs::write(&path, "  tok1\n").expect("seed file");

    let store = CredentialStore::with_persistence(path);
    assert_eq!(store.get(), Some("tok1".to_owned()));
}

#[test]
fn blank_file_counts_as_no_credential() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("token");
    std::fs::write(&path, "\n").expect("seed file");

    let store = CredentialStore::with_persistence(path);
    assert_eq!(store.get(), None);
}

#[test]
fn unwritable_path_degrades_to_memory() {
    // Pointing the store at a directory makes every file operation fail;
    // the store must keep working in memory and never panic.
    let dir = tempfile::tempdir().expect("tempdir");
    let store = CredentialStore::with_persistence(dir.path().to_path_buf());

    store.set("tok1");
    assert_eq!(store.get(), Some("tok1".to_owned()));
    store.clear();
    assert_eq!(store.get(), None);
}
