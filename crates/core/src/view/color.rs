//! Record coloring configuration shared by view option bags.

use serde::{Deserialize, Serialize};

use crate::id::FieldId;

/// Where the record color comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorConfigType {
    /// Color derives from a select-type field's choice colors.
    Field,
    /// A single custom color applied to all records.
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorConfig {
    #[serde(rename = "type")]
    pub config_type: ColorConfigType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_id: Option<FieldId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
