use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of skeleton errors.
///
/// Layout degeneracies (empty scans, zero-sized containers, detached nodes)
/// are never errors. These kinds only cover the edges where external input
/// enters the crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SkeletonErrorKind {
    InvalidColor,
    InvalidConfig,
    Snapshot,
}

impl fmt::Display for SkeletonErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkeletonErrorKind::InvalidColor => write!(f, "InvalidColor"),
            SkeletonErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
            SkeletonErrorKind::Snapshot => write!(f, "Snapshot"),
        }
    }
}

/// Structured error shared by the core, the component, and config loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkeletonError {
    pub kind: SkeletonErrorKind,
    pub message: String,
    /// Config field the error refers to, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl SkeletonError {
    pub fn invalid_color(field: impl Into<String>, value: &str) -> Self {
        Self {
            kind: SkeletonErrorKind::InvalidColor,
            message: format!("'{value}' is not a CSS color"),
            field: Some(field.into()),
        }
    }

    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: SkeletonErrorKind::InvalidConfig,
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn snapshot(message: impl Into<String>) -> Self {
        Self {
            kind: SkeletonErrorKind::Snapshot,
            message: message.into(),
            field: None,
        }
    }
}

impl fmt::Display for SkeletonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{} ({}): {}", self.kind, field, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for SkeletonError {}

impl From<serde_json::Error> for SkeletonError {
    fn from(err: serde_json::Error) -> Self {
        SkeletonError::snapshot(err.to_string())
    }
}
