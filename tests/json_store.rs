//! Tests for the JSON-file-backed user store.

use stackkit::users::{JsonStore, Role, User, UserStore};
use tempfile::tempdir;

#[test]
fn open_on_missing_file_starts_empty() {
    let dir = tempdir().unwrap();
    let store = JsonStore::open(dir.path().join("users.json")).unwrap();
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn records_survive_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.json");

    let user = User::new("ada@example.com", "Ada");
    {
        let store = JsonStore::open(&path).unwrap();
        store.insert(user.clone()).unwrap();
    }

    let store = JsonStore::open(&path).unwrap();
    let loaded = store.get(user.id).unwrap().unwrap();
    assert_eq!(loaded.email, "ada@example.com");
    assert_eq!(loaded.role, Role::User);
}

#[test]
fn update_and_delete_rewrite_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("users.json");

    let mut user = User::new("ada@example.com", "Ada");
    let other = User::new("bob@example.com", "Bob");
    {
        let store = JsonStore::open(&path).unwrap();
        store.insert(user.clone()).unwrap();
        store.insert(other.clone()).unwrap();

        user.name = "Countess".to_string();
        store.update(user.clone()).unwrap();
        store.delete(other.id).unwrap();
    }

    let store = JsonStore::open(&path).unwrap();
    let all = store.list().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Countess");
}

#[test]
fn update_missing_record_is_not_found() {
    let dir = tempdir().unwrap();
    let store = JsonStore::open(dir.path().join("users.json")).unwrap();
    assert!(store.update(User::new("x@example.com", "X")).is_err());
}

#[test]
fn creates_parent_directories() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b").join("users.json");
    let store = JsonStore::open(&nested).unwrap();
    store.insert(User::new("ada@example.com", "Ada")).unwrap();
    assert!(nested.exists());
}

#[test]
fn find_by_email_is_case_sensitive() {
    let dir = tempdir().unwrap();
    let store = JsonStore::open(dir.path().join("users.json")).unwrap();
    store.insert(User::new("Ada@example.com", "Ada")).unwrap();

    assert!(store.find_by_email("Ada@example.com").unwrap().is_some());
    assert!(store.find_by_email("ada@example.com").unwrap().is_none());
}
