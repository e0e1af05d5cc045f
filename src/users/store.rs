//! The data-source seam: the service is generic over this trait so the same
//! authorization and validation logic runs against any backend.

use super::Error;
use super::model::{Role, User};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use ulid::Ulid;

/// Minimal CRUD surface a backend must provide. Email lookup is case-sensitive
/// exact match — uniqueness is defined at this level, not per backend.
pub trait UserStore: Send + Sync {
    /// Persists a new record; the caller has already checked uniqueness.
    ///
    /// # Errors
    /// Backend I/O or serialization failures.
    fn insert(&self, user: User) -> Result<(), Error>;

    /// Fetches by ID.
    ///
    /// # Errors
    /// Backend I/O failures; a missing record is `Ok(None)`.
    fn get(&self, id: Ulid) -> Result<Option<User>, Error>;

    /// Case-sensitive exact email lookup.
    ///
    /// # Errors
    /// Backend I/O failures; a missing record is `Ok(None)`.
    fn find_by_email(&self, email: &str) -> Result<Option<User>, Error>;

    /// Replaces an existing record.
    ///
    /// # Errors
    /// `Error::NotFound` when the ID has no record; backend failures otherwise.
    fn update(&self, user: User) -> Result<(), Error>;

    /// Removes a record.
    ///
    /// # Errors
    /// `Error::NotFound` when the ID has no record; backend failures otherwise.
    fn delete(&self, id: Ulid) -> Result<(), Error>;

    /// All records, ordered by ID (ULIDs sort by creation time).
    ///
    /// # Errors
    /// Backend I/O failures.
    fn list(&self) -> Result<Vec<User>, Error>;

    /// All records with the given role, ordered by ID.
    ///
    /// # Errors
    /// Backend I/O failures.
    fn list_by_role(&self, role: Role) -> Result<Vec<User>, Error> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|u| u.role == role)
            .collect())
    }
}

/// In-memory backend for tests, demos, and single-process tools.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<Ulid, User>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Ulid, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserStore for MemoryStore {
    fn insert(&self, user: User) -> Result<(), Error> {
        self.lock().insert(user.id, user);
        Ok(())
    }

    fn get(&self, id: Ulid) -> Result<Option<User>, Error> {
        Ok(self.lock().get(&id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        Ok(self.lock().values().find(|u| u.email == email).cloned())
    }

    fn update(&self, user: User) -> Result<(), Error> {
        let mut users = self.lock();
        if !users.contains_key(&user.id) {
            return Err(Error::NotFound(user.id.to_string()));
        }
        users.insert(user.id, user);
        Ok(())
    }

    fn delete(&self, id: Ulid) -> Result<(), Error> {
        self.lock()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<User>, Error> {
        let mut users: Vec<User> = self.lock().values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }
}
