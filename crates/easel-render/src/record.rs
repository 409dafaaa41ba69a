//! In-memory surface that records what would be painted.
//!
//! Follows canvas semantics closely enough that a facade driven against it
//! produces the same paths a browser would: arcs connect to the current
//! point, `close_path` returns the pen to the subpath start, painting does
//! not consume the path, and resizing wipes everything.

use easel_core::model::{Paint, Size};
use easel_core::surface::Surface;
use kurbo::{Arc, BezPath, PathEl, Point, Rect, Vec2};
use smallvec::SmallVec;
use std::f64::consts::TAU;

/// Flattening tolerance for arcs, in pixels.
const ARC_TOLERANCE: f64 = 0.1;

/// Floor on tolerance relative to the radius, caps subdivision of huge arcs.
const ARC_RELATIVE_TOLERANCE: f64 = 1e-6;

/// Canvas default backing size.
const DEFAULT_SIZE: Size = Size::new(300, 150);

/// A finalized paint operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fill { path: BezPath, paint: Paint },
    Stroke { path: BezPath, paint: Paint },
    FillRect { rect: Rect, paint: Paint },
    ClearRect(Rect),
}

#[derive(Debug, Clone, Default, PartialEq)]
struct GraphicsState {
    fill: Paint,
    stroke: Paint,
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    path: BezPath,
    state: GraphicsState,
    stack: SmallVec<[GraphicsState; 4]>,
    ops: Vec<DrawOp>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            path: BezPath::new(),
            state: GraphicsState::default(),
            stack: SmallVec::new(),
            ops: Vec::new(),
        }
    }

    /// Display list recorded since creation or the last resize.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// The path under construction.
    pub fn current_path(&self) -> &BezPath {
        &self.path
    }

    pub fn fill_paint(&self) -> &Paint {
        &self.state.fill
    }

    pub fn stroke_paint(&self) -> &Paint {
        &self.state.stroke
    }

    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Pen position, or `None` when no subpath has been started.
    pub fn current_point(&self) -> Option<Point> {
        let elements = self.path.elements();
        match elements.last()? {
            PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
                Some(*p)
            }
            PathEl::ClosePath => elements.iter().rev().find_map(|el| match el {
                PathEl::MoveTo(p) => Some(*p),
                _ => None,
            }),
        }
    }
}

/// Canvas sweep rules: a sweep of a full turn or more draws the whole
/// circle, anything less wraps into `[0, TAU)` in the drawing direction.
fn canvas_sweep(start_angle: f64, end_angle: f64, anticlockwise: bool) -> f64 {
    let delta = end_angle - start_angle;
    if anticlockwise {
        if -delta >= TAU { -TAU } else { -(-delta).rem_euclid(TAU) }
    } else if delta >= TAU {
        TAU
    } else {
        delta.rem_euclid(TAU)
    }
}

/// Canvas silently drops path calls with a NaN or infinite argument.
fn all_finite(args: &[f64]) -> bool {
    args.iter().all(|v| v.is_finite())
}

impl Surface for RecordingSurface {
    type Style = Paint;

    fn pixel_size(&self) -> Size {
        self.size
    }

    fn set_pixel_size(&mut self, size: Size) {
        log::trace!("recording surface resized to {size:?}");
        *self = Self::new(size);
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        if !all_finite(&[x, y]) {
            log::warn!("move_to({x}, {y}) ignored");
            return;
        }
        self.path.move_to((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if !all_finite(&[x, y]) {
            log::warn!("line_to({x}, {y}) ignored");
            return;
        }
        if self.current_point().is_some() {
            self.path.line_to((x, y));
        } else {
            self.path.move_to((x, y));
        }
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        if !all_finite(&[x, y, radius, start_angle, end_angle]) {
            log::warn!("arc with non-finite argument ignored");
            return;
        }
        if radius < 0.0 {
            log::warn!("arc with negative radius {radius} ignored");
            return;
        }

        let center = Point::new(x, y);
        let start = center + Vec2::from_angle(start_angle) * radius;
        if self.current_point().is_some() {
            self.path.line_to(start);
        } else {
            self.path.move_to(start);
        }

        let sweep = canvas_sweep(start_angle, end_angle, anticlockwise);
        if radius == 0.0 || sweep == 0.0 {
            return;
        }
        let arc = Arc {
            center,
            radii: Vec2::new(radius, radius),
            start_angle,
            sweep_angle: sweep,
            x_rotation: 0.0,
        };
        let tolerance = ARC_TOLERANCE.max(radius * ARC_RELATIVE_TOLERANCE);
        for el in arc.append_iter(tolerance) {
            self.path.push(el);
        }
    }

    fn close_path(&mut self) {
        if self.current_point().is_some() {
            self.path.close_path();
        }
    }

    fn fill(&mut self) {
        if self.path.elements().is_empty() {
            log::trace!("fill of empty path");
            return;
        }
        self.ops.push(DrawOp::Fill {
            path: self.path.clone(),
            paint: self.state.fill.clone(),
        });
    }

    fn stroke(&mut self) {
        if self.path.elements().is_empty() {
            log::trace!("stroke of empty path");
            return;
        }
        self.ops.push(DrawOp::Stroke {
            path: self.path.clone(),
            paint: self.state.stroke.clone(),
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::FillRect {
            rect: Rect::from_origin_size((x, y), (width, height)),
            paint: self.state.fill.clone(),
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops
            .push(DrawOp::ClearRect(Rect::from_origin_size((x, y), (width, height))));
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn set_fill_style(&mut self, style: &Paint) {
        self.state.fill = style.clone();
    }

    fn set_stroke_style(&mut self, style: &Paint) {
        self.state.stroke = style.clone();
    }
}
