//! Login session management for the Reelhub client.
//!
//! This crate answers one question for the rest of the client: *who is
//! logged in right now, and what may they do?*
//!
//! 1. **Persistence** — where session state lives ([`StorageBackend`]
//!    trait, with [`MemoryStorage`] and [`FileStorage`] in the box)
//! 2. **Interpretation** — what the stored bytes mean
//!    ([`SessionStore`]: token, roles, account id, privilege checks)
//! 3. **Degradation** — mangled or partial state reads as "logged out",
//!    never as an error or a panic
//!
//! # How it fits in the stack
//!
//! ```text
//! Guards & screens (above)  ← ask is_authenticated / is_privileged
//!     ↕
//! Session layer (this crate)  ← owns the stored token, roles, user id
//!     ↕
//! Storage backend (below)  ← a file directory, a map, or your own impl
//! ```
//!
//! The HTTP layer also reads through here: the stored token is what
//! becomes the `Authorization: Bearer` header on every request.

mod error;
mod session;
mod storage;
mod store;

pub use error::SessionError;
pub use session::{Session, SessionConfig, ROLES_KEY, TOKEN_KEY, USER_ID_KEY};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::SessionStore;
