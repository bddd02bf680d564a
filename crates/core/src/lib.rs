//! `gridbase-core` - shared domain model.
//!
//! This crate contains the types shared between the API service and the
//! typed client: identifiers, the wire-level error model, and the view
//! records with their per-type option bags. No transport or framework
//! concerns live here.

pub mod error;
pub mod id;
pub mod view;

pub use error::{ErrorCode, HttpError, HttpResult};
pub use id::{FieldId, ShareId, TableId, ViewId};
pub use view::{
    CalendarViewOptions, ColorConfig, ColorConfigType, GalleryViewOptions, View, ViewOptions,
    ViewType,
};
