//! Tab-scoped session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionStore`] is the single source of truth for "who is logged in". The
//! route guard, the request authenticator, the login flow and the header all
//! read through it; nothing else touches the underlying storage key.

pub mod storage;
pub mod store;

pub use storage::{MemoryStorage, SessionStorage};
#[cfg(feature = "csr")]
pub use storage::BrowserSessionStorage;
pub use store::{SESSION_KEY, SessionStore};
