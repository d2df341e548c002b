//! Shared types for the Kidopedia chat widget.
//!
//! Nothing in here depends on the browser, so the widget logic can be
//! exercised with plain `cargo test`.

pub mod domain;
pub mod shared;
