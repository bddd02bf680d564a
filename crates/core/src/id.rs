//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are short prefixed strings (`tblXXX`, `viwXXX`) rather than
//! raw UUIDs, matching the wire format the API exposes in paths and payloads.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::HttpError;

/// Identifier of a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(String);

/// Identifier of a view within a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

/// Identifier of a field (column).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

/// Identifier of a readonly share grant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareId(String);

macro_rules! impl_prefixed_id {
    ($t:ty, $prefix:literal, $name:literal) => {
        impl $t {
            pub const PREFIX: &'static str = $prefix;

            /// Generate a fresh identifier.
            ///
            /// Uses the full UUIDv7 hex form as the suffix: time-ordered, and
            /// the random tail keeps same-millisecond generations distinct.
            /// Prefer passing IDs explicitly in tests for determinism.
            pub fn generate() -> Self {
                let suffix = Uuid::now_v7().simple();
                Self(format!("{}{}", $prefix, suffix))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $t {
            type Err = HttpError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let suffix = s.strip_prefix($prefix).ok_or_else(|| {
                    HttpError::validation(format!(
                        "{}: expected prefix {:?}, got {:?}",
                        $name, $prefix, s
                    ))
                })?;
                if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
                    return Err(HttpError::validation(format!(
                        "{}: malformed suffix in {:?}",
                        $name, s
                    )));
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

impl_prefixed_id!(TableId, "tbl", "TableId");
impl_prefixed_id!(ViewId, "viw", "ViewId");
impl_prefixed_id!(FieldId, "fld", "FieldId");
impl_prefixed_id!(ShareId, "shr", "ShareId");
