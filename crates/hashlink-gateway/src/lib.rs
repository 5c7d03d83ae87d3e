//! HTTP gateway for the hashlink URL shortener.
//!
//! Exposes the create (`POST /short`) and resolve (`GET /redirect/{code}`)
//! operations of a [`Shortener`][hashlink_core::Shortener] over axum.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use state::AppState;
