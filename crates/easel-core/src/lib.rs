pub mod config;
pub mod error;
pub mod facade;
pub mod model;
pub mod subscription;
pub mod surface;

pub use config::{ArcOptions, EaselConfig, PathOptions};
pub use error::{EaselError, Result};
pub use facade::Easel;
pub use model::*;
pub use subscription::ResizeSubscription;
pub use surface::{Host, ResizeHandler, Surface};
