//! Session store backends.
//!
//! The import engine talks to the host application's session tree through
//! the [`SessionStore`] trait. Two backends are provided: a directory store
//! that writes one INI-style file per session, and an in-memory store for
//! tests and dry runs.

mod dir_store;
mod store;

pub use dir_store::{DirSessionStore, SESSION_FILE_EXTENSION};
pub use store::{InMemorySessionStore, SessionStore};
