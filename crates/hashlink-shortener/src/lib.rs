//! URL shortener service implementation.
//!
//! This crate wires a [`Generator`][hashlink_generator::Generator] and a
//! [`Repository`][hashlink_core::Repository] into the create/resolve
//! operations of [`Shortener`]. Core types are re-exported from
//! `hashlink_core`.

pub mod clock;
pub mod service;

pub use clock::{Clock, SystemClock};
pub use hashlink_core::{ShortCode, ShortLink, Shortener, ShortenerError};
pub use service::ShortenerService;
