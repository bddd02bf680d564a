//! Gallery view options.

use serde::{Deserialize, Serialize};

use crate::id::FieldId;

/// Options for a gallery view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GalleryViewOptions {
    /// Attachment field rendered as the card cover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_field_id: Option<FieldId>,
    /// Fit (rather than crop) the cover image into the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cover_fit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_field_name_hidden: Option<bool>,
}

impl GalleryViewOptions {
    /// Merge a partial patch over these options; see
    /// [`CalendarViewOptions::merged_with`](crate::view::CalendarViewOptions::merged_with).
    pub fn merged_with(&self, patch: Self) -> Self {
        Self {
            cover_field_id: patch.cover_field_id.or_else(|| self.cover_field_id.clone()),
            is_cover_fit: patch.is_cover_fit.or(self.is_cover_fit),
            is_field_name_hidden: patch.is_field_name_hidden.or(self.is_field_name_hidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_identity_for_empty_patch() {
        let base = GalleryViewOptions {
            cover_field_id: Some(FieldId::generate()),
            is_cover_fit: Some(false),
            is_field_name_hidden: Some(true),
        };
        assert_eq!(base.merged_with(GalleryViewOptions::default()), base);
    }

    #[test]
    fn merge_takes_patched_booleans() {
        let base = GalleryViewOptions {
            is_cover_fit: Some(false),
            ..Default::default()
        };
        let merged = base.merged_with(GalleryViewOptions {
            is_cover_fit: Some(true),
            ..Default::default()
        });
        assert_eq!(merged.is_cover_fit, Some(true));
    }
}
