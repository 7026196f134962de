//! Client-side flows layered over the session core.
//!
//! DESIGN
//! ======
//! Components depend on these small models instead of calling the auth client
//! and session store directly, so ordering rules (save before navigate, drop
//! stale results) live in one place.

pub mod forms;
pub mod login;
