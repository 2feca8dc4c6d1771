use std::path::PathBuf;

use thiserror::Error;

use crate::model::role::CursorRole;

pub type Result<T> = std::result::Result<T, CursorError>;

#[derive(Debug, Error)]
pub enum CursorError {
    #[error("cursor resource `{0}` not found")]
    MissingResource(String),

    #[error("failed to decode cursor resource `{name}`: {reason}")]
    Decode { name: String, reason: String },

    #[error("hotspot ({x}, {y}) lies outside the {width}x{height} image `{name}`")]
    HotspotOutOfBounds {
        name: String,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("native {role} cursor unavailable: {reason}")]
    NativeUnavailable { role: CursorRole, reason: String },

    #[error("native cursor handle is null")]
    NullNativeHandle,

    #[error("display scale must be positive and finite, got {0}")]
    InvalidScale(f32),

    #[error("cursor registry is already initialized")]
    AlreadyInitialized,

    #[error("cursor registry is not ready")]
    NotReady,

    #[error("invalid cursor configuration: {0}")]
    Config(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CursorError {
    /// Errors that abort initialization. Everything else degrades to a
    /// standard cursor or is a caller mistake.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CursorError::MissingResource(_)
                | CursorError::Decode { .. }
                | CursorError::HotspotOutOfBounds { .. }
        )
    }

    pub(crate) fn decode(name: &str, reason: impl ToString) -> Self {
        CursorError::Decode {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(CursorError::MissingResource("EyedropCursor".into()).is_fatal());
        assert!(CursorError::decode("EyedropCursor@2x", "truncated").is_fatal());
        assert!(!CursorError::NullNativeHandle.is_fatal());
        assert!(
            !CursorError::NativeUnavailable {
                role: CursorRole::Drag,
                reason: "LoadCursorW failed".into(),
            }
            .is_fatal()
        );
    }

    #[test]
    fn test_messages_name_the_resource() {
        let err = CursorError::decode("EyedropCursor", "bad header");
        assert_eq!(
            err.to_string(),
            "failed to decode cursor resource `EyedropCursor`: bad header"
        );
    }
}
