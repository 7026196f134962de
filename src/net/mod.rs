//! Networking modules for the backend REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves requests over the wire, `authenticator` is the pipeline
//! stage that stamps the bearer credential, `auth` performs the credential
//! exchange, `api` holds the resource services, and `types` defines the wire
//! schema.

pub mod api;
pub mod auth;
pub mod authenticator;
pub mod transport;
pub mod types;
