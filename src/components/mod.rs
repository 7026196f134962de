//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared [`crate::app::ClientContext`] from Leptos
//! context; none of them own session state.

pub mod header;
pub mod notice;
pub mod product_form;
pub mod require_session;
pub mod user_form;
