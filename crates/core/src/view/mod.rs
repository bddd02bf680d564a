//! View records and their per-type option bags.
//!
//! A view is one visual presentation of a table. Its `options` payload is
//! shaped by the view type; updates replace the whole options object on the
//! remote side, so partial patches are merged locally first (see
//! [`CalendarViewOptions::merged_with`]).

pub mod calendar;
pub mod color;
pub mod gallery;

pub use calendar::CalendarViewOptions;
pub use color::{ColorConfig, ColorConfigType};
pub use gallery::GalleryViewOptions;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::HttpError;
use crate::id::{ShareId, TableId, ViewId};

/// Kind of visual presentation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewType {
    Grid,
    Calendar,
    Gallery,
    Kanban,
    Form,
}

/// Per-type option bag.
///
/// The wire format carries no discriminator; variants are told apart by
/// their field sets (`deny_unknown_fields` on each record), with calendar
/// tried first. [`View::validate_options`] enforces that the deserialized
/// variant matches the view type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewOptions {
    Calendar(CalendarViewOptions),
    Gallery(GalleryViewOptions),
}

impl ViewOptions {
    fn matches(&self, view_type: ViewType) -> bool {
        matches!(
            (self, view_type),
            (ViewOptions::Calendar(_), ViewType::Calendar)
                | (ViewOptions::Gallery(_), ViewType::Gallery)
        )
    }

    /// True when every field is unset. The untagged decode resolves `{}` to
    /// the first variant, so an empty bag says nothing about the view type.
    pub fn is_empty(&self) -> bool {
        match self {
            ViewOptions::Calendar(o) => *o == CalendarViewOptions::default(),
            ViewOptions::Gallery(o) => *o == GalleryViewOptions::default(),
        }
    }

    /// Empty bag of the right shape for a view type, if that type has one.
    pub fn empty_for(view_type: ViewType) -> Option<Self> {
        match view_type {
            ViewType::Calendar => Some(ViewOptions::Calendar(CalendarViewOptions::default())),
            ViewType::Gallery => Some(ViewOptions::Gallery(GalleryViewOptions::default())),
            _ => None,
        }
    }
}

/// A view record as stored and served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub id: ViewId,
    pub table_id: TableId,
    pub name: String,
    #[serde(rename = "type")]
    pub view_type: ViewType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ViewOptions>,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_id: Option<ShareId>,
    #[serde(default)]
    pub enable_share: bool,
    pub last_modified_time: DateTime<Utc>,
}

impl View {
    /// Create a fresh, unlocked, unshared view.
    pub fn new(table_id: TableId, name: impl Into<String>, view_type: ViewType) -> Self {
        Self {
            id: ViewId::generate(),
            table_id,
            name: name.into(),
            view_type,
            options: None,
            is_locked: false,
            share_id: None,
            enable_share: false,
            last_modified_time: Utc::now(),
        }
    }

    /// Reject an options payload whose shape does not fit this view's type.
    pub fn validate_options(&self, options: &ViewOptions) -> Result<(), HttpError> {
        if options.matches(self.view_type) {
            Ok(())
        } else {
            Err(HttpError::validation(format!(
                "options shape does not match view type {:?}",
                self.view_type
            )))
        }
    }

    /// Replace the options object wholesale.
    ///
    /// An all-unset payload is re-shaped to this view's own variant before
    /// validation, since the wire form `{}` carries no type information.
    pub fn replace_options(&mut self, options: ViewOptions) -> Result<(), HttpError> {
        let options = if options.is_empty() {
            ViewOptions::empty_for(self.view_type).unwrap_or(options)
        } else {
            options
        };
        self.validate_options(&options)?;
        self.options = Some(options);
        self.last_modified_time = Utc::now();
        Ok(())
    }
}
