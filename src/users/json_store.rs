//! File-backed store for tools and small deployments that need persistence
//! without a database. The whole record set is held in memory and rewritten on
//! every mutation via write-temp-then-rename, so a crash mid-write leaves the
//! previous file intact.

use super::Error;
use super::model::User;
use super::store::UserStore;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use ulid::Ulid;

/// JSON array on disk, `HashMap` in memory. One mutex covers load state and the
/// rewrite so concurrent mutations serialize cleanly.
pub struct JsonStore {
    path: PathBuf,
    users: Mutex<HashMap<Ulid, User>>,
}

impl JsonStore {
    /// Loads the existing file or starts empty when none exists. The parent
    /// directory is created here so later rewrites can't fail on a missing path.
    ///
    /// # Errors
    /// I/O failures other than a missing file, or unparseable JSON content.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let users = match fs::read_to_string(&path) {
            Ok(content) => {
                let records: Vec<User> = serde_json::from_str(&content)?;
                records.into_iter().map(|u| (u.id, u)).collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            users: Mutex::new(users),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Ulid, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Rewrites the whole file under the caller's lock. Temp-then-rename keeps
    /// the previous content intact if the write dies halfway.
    fn persist(&self, users: &HashMap<Ulid, User>) -> Result<(), Error> {
        let mut records: Vec<&User> = users.values().collect();
        records.sort_by_key(|u| u.id);

        let json = serde_json::to_string_pretty(&records)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl UserStore for JsonStore {
    fn insert(&self, user: User) -> Result<(), Error> {
        let mut users = self.lock();
        users.insert(user.id, user);
        self.persist(&users)
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
        self.persist(&users)
    }

    fn delete(&self, id: Ulid) -> Result<(), Error> {
        let mut users = self.lock();
        if users.remove(&id).is_none() {
            return Err(Error::NotFound(id.to_string()));
        }
        self.persist(&users)
    }

    fn list(&self) -> Result<Vec<User>, Error> {
        let mut users: Vec<User> = self.lock().values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }
}
