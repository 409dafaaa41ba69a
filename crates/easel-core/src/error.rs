//! Errors raised while acquiring a surface or wiring up the host.
//!
//! Drawing calls never fail at this level; backends log and drop
//! primitive errors the way the platform silently ignores them.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EaselError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EaselError {
    /// No global window (e.g. running in a worker).
    #[error("no window available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    /// The host could not create or attach a new surface.
    #[error("failed to create surface: {0}")]
    SurfaceCreation(String),

    /// The surface exists but has no 2D drawing context.
    #[error("2d context unavailable: {0}")]
    ContextUnavailable(String),

    /// The host refused the viewport resize listener.
    #[error("failed to register resize listener: {0}")]
    Listener(String),
}
