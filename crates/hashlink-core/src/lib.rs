//! Core types and traits for the hashlink URL shortener.
//!
//! This crate provides the types shared by the identifier generator, the
//! mapping store, the shortener service and the HTTP gateway.

pub mod error;
pub mod link;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use error::{CoreError, ShortenerError, StorageError};
pub use link::ShortLink;
pub use repository::{ReadRepository, Repository};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
