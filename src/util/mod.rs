//! Small browser-facing helpers shared by pages and components.

pub mod browser;
