#![forbid(unsafe_code)]

//! Error types.

use std::fmt;

/// Failure reported by a [`SurfaceHost`](crate::host::SurfaceHost).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The platform refused to show or move the floating surface.
    PermissionDenied,
    /// The surface no longer exists (removed externally, display gone).
    SurfaceMissing,
    /// Any other platform failure.
    Other(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "surface permission denied"),
            Self::SurfaceMissing => write!(f, "surface is missing"),
            Self::Other(msg) => write!(f, "surface host error: {msg}"),
        }
    }
}

impl std::error::Error for HostError {}

/// Errors returned by [`DragController`](crate::controller::DragController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragError {
    /// `attach` was called before `configure`.
    NotConfigured,
    /// Configuration cannot change while an element is attached.
    AlreadyAttached,
    /// The configuration violates an invariant.
    InvalidConfig(String),
    /// The surface host failed.
    Host(HostError),
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "drag controller is not configured"),
            Self::AlreadyAttached => write!(f, "drag controller is already attached"),
            Self::InvalidConfig(msg) => write!(f, "invalid drag configuration: {msg}"),
            Self::Host(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DragError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Host(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HostError> for DragError {
    fn from(err: HostError) -> Self {
        Self::Host(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_messages() {
        assert_eq!(
            DragError::NotConfigured.to_string(),
            "drag controller is not configured"
        );
        assert_eq!(
            DragError::InvalidConfig("left > right".into()).to_string(),
            "invalid drag configuration: left > right"
        );
        assert_eq!(
            DragError::from(HostError::Other("boom".into())).to_string(),
            "surface host error: boom"
        );
    }

    #[test]
    fn host_error_is_source() {
        let err = DragError::from(HostError::PermissionDenied);
        assert!(err.source().is_some());
        assert!(DragError::AlreadyAttached.source().is_none());
    }
}
