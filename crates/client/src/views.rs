//! Remotely-backed view handles.
//!
//! A handle pairs a plain [`View`] data struct with an [`ApiClient`]
//! collaborator and exposes the view-type-specific operations through
//! delegation. No optimistic local mutation: `update_option` sends the full
//! replacement payload and leaves reconciliation (refetching) to the caller.

use std::sync::Arc;

use gridbase_core::{
    CalendarViewOptions, FieldId, GalleryViewOptions, HttpError, HttpResult, View, ViewOptions,
    ViewType,
};

use crate::client::ApiClient;

/// Handle over a calendar view.
#[derive(Debug, Clone)]
pub struct CalendarView {
    data: View,
    client: Arc<ApiClient>,
}

impl CalendarView {
    /// Wrap a fetched view; fails if the record is not a calendar view.
    pub fn new(data: View, client: Arc<ApiClient>) -> HttpResult<Self> {
        if data.view_type != ViewType::Calendar {
            return Err(HttpError::validation(format!(
                "expected a calendar view, got {:?}",
                data.view_type
            )));
        }
        Ok(Self { data, client })
    }

    pub fn data(&self) -> &View {
        &self.data
    }

    fn options(&self) -> CalendarViewOptions {
        match &self.data.options {
            Some(ViewOptions::Calendar(options)) => options.clone(),
            _ => CalendarViewOptions::default(),
        }
    }

    pub fn start_date_field_id(&self) -> Option<FieldId> {
        self.options().start_date_field_id
    }

    pub fn end_date_field_id(&self) -> Option<FieldId> {
        self.options().end_date_field_id
    }

    pub fn title_field_id(&self) -> Option<FieldId> {
        self.options().title_field_id
    }

    /// Merge a partial patch into the current options and send the full
    /// replacement to the remote API.
    pub async fn update_option(&self, patch: CalendarViewOptions) -> HttpResult<()> {
        let full = self.options().merged_with(patch);
        self.client
            .update_view_options(
                &self.data.table_id,
                &self.data.id,
                &ViewOptions::Calendar(full),
            )
            .await
    }
}

/// Handle over a gallery view.
#[derive(Debug, Clone)]
pub struct GalleryView {
    data: View,
    client: Arc<ApiClient>,
}

impl GalleryView {
    pub fn new(data: View, client: Arc<ApiClient>) -> HttpResult<Self> {
        if data.view_type != ViewType::Gallery {
            return Err(HttpError::validation(format!(
                "expected a gallery view, got {:?}",
                data.view_type
            )));
        }
        Ok(Self { data, client })
    }

    pub fn data(&self) -> &View {
        &self.data
    }

    fn options(&self) -> GalleryViewOptions {
        match &self.data.options {
            Some(ViewOptions::Gallery(options)) => options.clone(),
            _ => GalleryViewOptions::default(),
        }
    }

    pub fn cover_field_id(&self) -> Option<FieldId> {
        self.options().cover_field_id
    }

    pub async fn update_option(&self, patch: GalleryViewOptions) -> HttpResult<()> {
        let full = self.options().merged_with(patch);
        self.client
            .update_view_options(
                &self.data.table_id,
                &self.data.id,
                &ViewOptions::Gallery(full),
            )
            .await
    }
}
