//! Calendar view options.

use serde::{Deserialize, Serialize};

use crate::id::FieldId;
use crate::view::color::ColorConfig;

/// Options for a calendar view. Every field is optional; an empty bag is a
/// valid (unconfigured) calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CalendarViewOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_field_id: Option<FieldId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_field_id: Option<FieldId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_field_id: Option<FieldId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_config: Option<ColorConfig>,
}

impl CalendarViewOptions {
    /// Merge a partial patch over these options.
    ///
    /// Fields set in the patch win; unset fields keep their current value.
    /// The result is the full replacement payload sent to the remote API.
    pub fn merged_with(&self, patch: Self) -> Self {
        Self {
            start_date_field_id: patch
                .start_date_field_id
                .or_else(|| self.start_date_field_id.clone()),
            end_date_field_id: patch
                .end_date_field_id
                .or_else(|| self.end_date_field_id.clone()),
            title_field_id: patch.title_field_id.or_else(|| self.title_field_id.clone()),
            color_config: patch.color_config.or_else(|| self.color_config.clone()),
        }
    }
}
