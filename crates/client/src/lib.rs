//! `gridbase-client` - typed HTTP client over the registered routes.
//!
//! [`ApiClient`] exposes one function per endpoint; URLs are built through
//! the strict builder against the shared path templates, so a renamed
//! placeholder fails at the call site instead of producing a malformed URL.
//! [`views`] adds remotely-backed view handles on top.

pub mod client;
pub mod views;

pub use client::ApiClient;
pub use views::{CalendarView, GalleryView};
