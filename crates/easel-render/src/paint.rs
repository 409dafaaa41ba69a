//! Display list → Vello drawing commands.
//!
//! Replays what a `RecordingSurface` captured into a `vello::Scene`.
//! The caller owns the scene and presents it through wgpu.

use crate::record::DrawOp;
use easel_core::model::{Color as EaselColor, GradientStop, Paint};
use kurbo::{Affine, Stroke};
use peniko::{Brush, Color, ColorStop, Compose, Fill, Gradient};
use vello::Scene;

/// Width used for recorded strokes; the facade does not forward line width.
const STROKE_WIDTH: f64 = 1.0;

/// Append every recorded operation to `scene`, in order.
pub fn paint_display_list(scene: &mut Scene, ops: &[DrawOp]) {
    for op in ops {
        match op {
            DrawOp::Fill { path, paint } => {
                if let Some(brush) = paint_to_brush(paint) {
                    scene.fill(Fill::NonZero, Affine::IDENTITY, &brush, None, path);
                }
            }
            DrawOp::Stroke { path, paint } => {
                if let Some(brush) = paint_to_brush(paint) {
                    scene.stroke(&Stroke::new(STROKE_WIDTH), Affine::IDENTITY, &brush, None, path);
                }
            }
            DrawOp::FillRect { rect, paint } => {
                if let Some(brush) = paint_to_brush(paint) {
                    scene.fill(Fill::NonZero, Affine::IDENTITY, &brush, None, rect);
                }
            }
            DrawOp::ClearRect(rect) => {
                // An empty layer composited with Clear zeroes everything under the clip.
                scene.push_layer(Compose::Clear, 1.0, Affine::IDENTITY, rect);
                scene.pop_layer();
            }
        }
    }
}

/// Convert a paint into a Vello brush. Patterns have no Vello-side
/// registry, so they yield `None` and the operation is skipped.
pub fn paint_to_brush(paint: &Paint) -> Option<Brush> {
    match paint {
        Paint::Solid { color } => Some(Brush::Solid(to_peniko(*color))),
        Paint::LinearGradient { start, end, stops } => Some(Brush::Gradient(
            Gradient::new_linear(*start, *end).with_stops(color_stops(stops).as_slice()),
        )),
        Paint::RadialGradient {
            center,
            radius,
            stops,
        } => Some(Brush::Gradient(
            Gradient::new_radial(*center, *radius as f32).with_stops(color_stops(stops).as_slice()),
        )),
        Paint::Pattern { id } => {
            log::debug!("pattern {id:?} has no vello brush, skipping");
            None
        }
    }
}

fn to_peniko(c: EaselColor) -> Color {
    Color::new([c.r, c.g, c.b, c.a])
}

fn color_stops(stops: &[GradientStop]) -> Vec<ColorStop> {
    stops
        .iter()
        .map(|s| ColorStop::from((s.offset, to_peniko(s.color))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::model::PatternId;
    use kurbo::{BezPath, Rect};

    #[test]
    fn solid_paint_maps_to_solid_brush() {
        let brush = paint_to_brush(&Paint::solid(EaselColor::rgba(1.0, 0.5, 0.0, 1.0)));
        match brush {
            Some(Brush::Solid(c)) => assert_eq!(c.components, [1.0, 0.5, 0.0, 1.0]),
            other => panic!("expected solid brush, got {other:?}"),
        }
    }

    #[test]
    fn gradients_keep_their_stops() {
        let paint = Paint::RadialGradient {
            center: (5.0, 5.0),
            radius: 5.0,
            stops: vec![
                GradientStop { offset: 0.0, color: EaselColor::WHITE },
                GradientStop { offset: 1.0, color: EaselColor::BLACK },
            ],
        };
        match paint_to_brush(&paint) {
            Some(Brush::Gradient(g)) => assert_eq!(g.stops.len(), 2),
            other => panic!("expected gradient brush, got {other:?}"),
        }
    }

    #[test]
    fn patterns_are_skipped() {
        assert!(paint_to_brush(&Paint::Pattern { id: PatternId(1) }).is_none());
    }

    #[test]
    fn replays_every_op_kind() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 10.0));
        let ops = vec![
            DrawOp::Fill { path: path.clone(), paint: Paint::default() },
            DrawOp::Stroke { path, paint: Paint::default() },
            DrawOp::FillRect {
                rect: Rect::new(0.0, 0.0, 5.0, 5.0),
                paint: Paint::Pattern { id: PatternId(0) },
            },
            DrawOp::ClearRect(Rect::new(0.0, 0.0, 5.0, 5.0)),
        ];
        let mut scene = Scene::new();
        paint_display_list(&mut scene, &ops);
    }
}
