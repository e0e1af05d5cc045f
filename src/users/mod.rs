//! User registration, profile management, and role-based authorization over a
//! pluggable store seam.

mod error;
mod json_store;
mod model;
mod service;
mod store;

pub use error::Error;
pub use json_store::JsonStore;
pub use model::{Role, Status, User, UserUpdate};
pub use service::UserService;
pub use store::{MemoryStore, UserStore};
