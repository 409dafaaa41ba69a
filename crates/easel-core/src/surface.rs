//! Collaborator contracts: the drawing surface and the host that owns it.
//!
//! `Surface` is the immediate-mode 2D context plus its backing store.
//! Method names follow the canvas primitives one-to-one; coordinates are
//! surface pixels with y pointing down.

use crate::error::Result;
use crate::model::Size;
use crate::subscription::ResizeSubscription;

/// Called with the new viewport size on every host resize.
pub type ResizeHandler = Box<dyn FnMut(Size)>;

/// A 2D immediate-mode drawing surface.
pub trait Surface {
    /// Fill/stroke style handle. Passed through untouched.
    type Style;

    /// Current backing-store size in pixels.
    fn pixel_size(&self) -> Size;

    /// Resize the backing store. Platforms clear content and drawing
    /// state when this happens.
    fn set_pixel_size(&mut self, size: Size);

    /// Lay the surface out as a block element. No-op where that means nothing.
    fn show_as_block(&mut self) {}

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);

    /// Circular arc around `(x, y)`. Angles in radians; positive sweep is
    /// clockwise on screen unless `anticlockwise`.
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    );

    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn save(&mut self);
    fn restore(&mut self);

    fn set_fill_style(&mut self, style: &Self::Style);
    fn set_stroke_style(&mut self, style: &Self::Style);
}

/// The environment around a surface: display tree and viewport.
pub trait Host {
    type Surface: Surface;

    /// Create a new surface and attach it to the display tree.
    fn create_surface(&self) -> Result<Self::Surface>;

    /// Current viewport size in pixels.
    fn viewport_size(&self) -> Size;

    /// Register `handler` for viewport resizes until the returned
    /// subscription is disposed.
    fn on_resize(&self, handler: ResizeHandler) -> Result<ResizeSubscription>;
}
