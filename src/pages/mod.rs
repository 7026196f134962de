//! Route page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are the route-level views. The resource pages share the async
//! load/edit/delete plumbing in [`resource`]; requests go out through the
//! authenticated pipeline, so an expired session is handled before a page
//! sees the error.

pub mod login;
pub mod products;
pub mod resource;
pub mod users;
