//! CRUD facade with the authorization rules evaluated in precedence order.
//! Generic over the store so the same rules run against any backend.

use super::Error;
use super::model::{Role, Status, User, UserUpdate};
use super::store::UserStore;
use crate::logger::Logger;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use ulid::Ulid;

/// `local@domain.tld` shape — no attempt at full RFC 5322, matching what the
/// registration form enforces upstream.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// Authorization table, first match wins:
///
/// | actor vs target | modify | delete |
/// |-----------------|--------|--------|
/// | self            | yes    | no     |
/// | SUPER_ADMIN     | yes    | yes    |
/// | MANAGER         | only plain users | no |
/// | other           | no     | no     |
pub struct UserService<S: UserStore> {
    store: S,
    logger: Arc<Logger>,
}

impl<S: UserStore> UserService<S> {
    /// The logger is injected — the service has no ambient state of its own.
    pub const fn new(store: S, logger: Arc<Logger>) -> Self {
        Self { store, logger }
    }

    /// The backing store, for maintenance tooling that needs direct access.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Registration: no actor, open to anyone. New accounts start as
    /// unverified regular users.
    ///
    /// # Errors
    /// `Validation` for a malformed email, `DuplicateEmail` when the address is
    /// taken (case-sensitive exact match), `Store` on backend failures.
    pub fn register(
        &self,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<User, Error> {
        let email = email.into();
        validate_email(&email)?;

        if self.store.find_by_email(&email)?.is_some() {
            return Err(Error::DuplicateEmail(email));
        }

        let user = User::new(email, name);
        self.store.insert(user.clone())?;
        self.logger
            .info("USERS", &format!("Registered {} ({})", user.email, user.id));
        Ok(user)
    }

    /// Completes email verification: the one transition out of
    /// `PendingVerification`. Verifying an already-active account is a no-op.
    ///
    /// # Errors
    /// `NotFound` for an unknown ID, `InvalidTransition` when the account is
    /// inactive or suspended.
    pub fn verify_email(&self, id: Ulid) -> Result<User, Error> {
        let mut user = self.fetch(id)?;

        if user.status == Status::Active {
            return Ok(user);
        }
        if user.status != Status::PendingVerification {
            return Err(Error::InvalidTransition {
                from: user.status.to_string(),
                to: Status::Active.to_string(),
            });
        }

        user.status = Status::Active;
        user.updated_at = chrono::Utc::now();
        self.store.update(user.clone())?;
        self.logger
            .info("USERS", &format!("Verified {} ({})", user.email, user.id));
        Ok(user)
    }

    /// Fetch by ID; reads are unrestricted.
    ///
    /// # Errors
    /// `Store` on backend failures; a missing record is `Ok(None)`.
    pub fn get(&self, id: Ulid) -> Result<Option<User>, Error> {
        self.store.get(id)
    }

    /// Field-wise update under the authorization table. An email change
    /// re-validates shape and uniqueness; a status change must pass the
    /// transition table; a role change additionally requires a super admin.
    ///
    /// # Errors
    /// `NotFound`, `Unauthorized`, `Validation`, `DuplicateEmail`,
    /// `InvalidTransition`, or `Store`.
    pub fn update(&self, actor: &User, target_id: Ulid, update: UserUpdate) -> Result<User, Error> {
        let mut target = self.fetch(target_id)?;

        if !can_modify(actor, &target) {
            self.logger.warn(
                "USERS",
                &format!("{} denied update of {}", actor.id, target.id),
            );
            return Err(Error::Unauthorized(format!(
                "{} may not modify {}",
                actor.role, target_id
            )));
        }

        if let Some(email) = update.email
            && email != target.email
        {
            validate_email(&email)?;
            if self.store.find_by_email(&email)?.is_some() {
                return Err(Error::DuplicateEmail(email));
            }
            target.email = email;
        }

        if let Some(name) = update.name {
            target.name = name;
        }

        if let Some(role) = update.role
            && role != target.role
        {
            if actor.role != Role::SuperAdmin {
                return Err(Error::Unauthorized(
                    "only a super admin may change roles".to_string(),
                ));
            }
            target.role = role;
        }

        if let Some(status) = update.status {
            if !target.status.can_transition(status) {
                return Err(Error::InvalidTransition {
                    from: target.status.to_string(),
                    to: status.to_string(),
                });
            }
            target.status = status;
        }

        target.updated_at = chrono::Utc::now();
        self.store.update(target.clone())?;
        self.logger
            .info("USERS", &format!("Updated {} ({})", target.email, target.id));
        Ok(target)
    }

    /// Deletion: self-delete is forbidden for everyone (the `self` row matches
    /// first), everything else requires a super admin.
    ///
    /// # Errors
    /// `NotFound`, `Unauthorized`, or `Store`.
    pub fn delete(&self, actor: &User, target_id: Ulid) -> Result<(), Error> {
        let target = self.fetch(target_id)?;

        if !can_delete(actor, &target) {
            self.logger.warn(
                "USERS",
                &format!("{} denied delete of {}", actor.id, target.id),
            );
            let reason = if actor.id == target.id {
                "self-delete is forbidden".to_string()
            } else {
                format!("{} may not delete users", actor.role)
            };
            return Err(Error::Unauthorized(reason));
        }

        self.store.delete(target_id)?;
        self.logger.info(
            "USERS",
            &format!("Deleted {} ({})", target.email, target.id),
        );
        Ok(())
    }

    /// Full listing, restricted to managers and super admins.
    ///
    /// # Errors
    /// `Unauthorized` or `Store`.
    pub fn list(&self, actor: &User) -> Result<Vec<User>, Error> {
        require_listing_role(actor)?;
        self.store.list()
    }

    /// Role-filtered listing, restricted to managers and super admins.
    ///
    /// # Errors
    /// `Unauthorized` or `Store`.
    pub fn list_by_role(&self, actor: &User, role: Role) -> Result<Vec<User>, Error> {
        require_listing_role(actor)?;
        self.store.list_by_role(role)
    }

    fn fetch(&self, id: Ulid) -> Result<User, Error> {
        self.store.get(id)?.ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

fn validate_email(email: &str) -> Result<(), Error> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(Error::Validation(format!("malformed email: '{email}'")))
    }
}

/// Self first, then role — the order is the precedence of the table above.
/// Managers cannot touch other managers or super admins.
fn can_modify(actor: &User, target: &User) -> bool {
    if actor.id == target.id {
        return true;
    }
    match actor.role {
        Role::SuperAdmin => true,
        Role::Manager => target.role == Role::User,
        Role::User => false,
    }
}

/// The `self` row matches before the super-admin row, so nobody deletes
/// their own account.
fn can_delete(actor: &User, target: &User) -> bool {
    if actor.id == target.id {
        return false;
    }
    actor.role == Role::SuperAdmin
}

fn require_listing_role(actor: &User) -> Result<(), Error> {
    match actor.role {
        Role::Manager | Role::SuperAdmin => Ok(()),
        Role::User => Err(Error::Unauthorized(
            "listing requires a manager or super admin".to_string(),
        )),
    }
}
