//! Native backends for the Easel facade.
//!
//! `RecordingSurface` turns surface calls into kurbo paths and a display
//! list; `HeadlessHost` drives the viewport by hand; `paint` replays a
//! display list into a Vello scene.

pub mod headless;
pub mod paint;
pub mod record;

pub use headless::HeadlessHost;
pub use paint::{paint_display_list, paint_to_brush};
pub use record::{DrawOp, RecordingSurface};
