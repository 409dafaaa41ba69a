//! `web-sys` implementations of the surface and host contracts.
//!
//! `WebCanvas` drives an `HtmlCanvasElement` through its
//! `CanvasRenderingContext2d`; `WebHost` is the browser window.

use easel_core::error::{EaselError, Result};
use easel_core::model::{GradientStop, Paint, PatternId, Size};
use easel_core::subscription::ResizeSubscription;
use easel_core::surface::{Host, ResizeHandler, Surface};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasGradient, CanvasPattern, CanvasRenderingContext2d, Document, HtmlCanvasElement, Window,
};

/// Fallback when a paint cannot be turned into a canvas style.
const FALLBACK_CSS: &str = "#000000";

/// A canvas fill/stroke style: CSS color, gradient or pattern.
#[derive(Debug, Clone)]
pub enum WebStyle {
    Css(String),
    Gradient(CanvasGradient),
    Pattern(CanvasPattern),
}

impl WebStyle {
    /// Classify a JS value. `None` for anything a canvas would not accept.
    pub fn from_js(value: &JsValue) -> Option<Self> {
        if let Some(css) = value.as_string() {
            return Some(Self::Css(css));
        }
        if let Some(gradient) = value.dyn_ref::<CanvasGradient>() {
            return Some(Self::Gradient(gradient.clone()));
        }
        value
            .dyn_ref::<CanvasPattern>()
            .map(|pattern| Self::Pattern(pattern.clone()))
    }
}

impl From<&str> for WebStyle {
    fn from(css: &str) -> Self {
        Self::Css(css.to_string())
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

// ─── Surface ─────────────────────────────────────────────────────────────

pub struct WebCanvas {
    element: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    patterns: Vec<CanvasPattern>,
}

impl WebCanvas {
    /// Wrap an existing `<canvas>` and acquire its 2D context.
    pub fn from_element(element: HtmlCanvasElement) -> Result<Self> {
        let ctx = element
            .get_context("2d")
            .map_err(|e| EaselError::ContextUnavailable(describe(e)))?
            .ok_or_else(|| EaselError::ContextUnavailable("canvas returned no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EaselError::ContextUnavailable("context is not a 2d context".into()))?;
        Ok(Self {
            element,
            ctx,
            patterns: Vec::new(),
        })
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        &self.element
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    /// Make `pattern` addressable from a serialized `Paint::Pattern`.
    pub fn register_pattern(&mut self, pattern: CanvasPattern) -> PatternId {
        let id = PatternId(self.patterns.len() as u32);
        self.patterns.push(pattern);
        id
    }

    /// Build the canvas style for `paint`. Gradients are created on this
    /// surface's context.
    pub fn style_from_paint(&self, paint: &Paint) -> WebStyle {
        match paint {
            Paint::Solid { color } => WebStyle::Css(color.to_hex()),
            Paint::LinearGradient { start, end, stops } => {
                let gradient = self.ctx.create_linear_gradient(start.0, start.1, end.0, end.1);
                add_stops(&gradient, stops);
                WebStyle::Gradient(gradient)
            }
            Paint::RadialGradient {
                center,
                radius,
                stops,
            } => match self
                .ctx
                .create_radial_gradient(center.0, center.1, 0.0, center.0, center.1, *radius)
            {
                Ok(gradient) => {
                    add_stops(&gradient, stops);
                    WebStyle::Gradient(gradient)
                }
                Err(e) => {
                    log::warn!("radial gradient rejected: {}", describe(e));
                    WebStyle::Css(
                        paint
                            .flat_color()
                            .map_or_else(|| FALLBACK_CSS.to_string(), |c| c.to_hex()),
                    )
                }
            },
            Paint::Pattern { id } => match self.patterns.get(id.0 as usize) {
                Some(pattern) => WebStyle::Pattern(pattern.clone()),
                None => {
                    log::warn!("unknown pattern {id:?}");
                    WebStyle::from(FALLBACK_CSS)
                }
            },
        }
    }
}

fn add_stops(gradient: &CanvasGradient, stops: &[GradientStop]) {
    for stop in stops {
        if let Err(e) = gradient.add_color_stop(stop.offset, &stop.color.to_hex()) {
            log::warn!("color stop at {} rejected: {}", stop.offset, describe(e));
        }
    }
}

impl Surface for WebCanvas {
    type Style = WebStyle;

    fn pixel_size(&self) -> Size {
        Size::new(self.element.width(), self.element.height())
    }

    fn set_pixel_size(&mut self, size: Size) {
        self.element.set_width(size.width);
        self.element.set_height(size.height);
    }

    fn show_as_block(&mut self) {
        if let Err(e) = self.element.style().set_property("display", "block") {
            log::warn!("could not set display: block: {}", describe(e));
        }
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
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
        if let Err(e) = self
            .ctx
            .arc_with_anticlockwise(x, y, radius, start_angle, end_angle, anticlockwise)
        {
            log::warn!("arc rejected: {}", describe(e));
        }
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_fill_style(&mut self, style: &WebStyle) {
        match style {
            WebStyle::Css(css) => self.ctx.set_fill_style_str(css),
            WebStyle::Gradient(g) => self.ctx.set_fill_style_canvas_gradient(g),
            WebStyle::Pattern(p) => self.ctx.set_fill_style_canvas_pattern(p),
        }
    }

    fn set_stroke_style(&mut self, style: &WebStyle) {
        match style {
            WebStyle::Css(css) => self.ctx.set_stroke_style_str(css),
            WebStyle::Gradient(g) => self.ctx.set_stroke_style_canvas_gradient(g),
            WebStyle::Pattern(p) => self.ctx.set_stroke_style_canvas_pattern(p),
        }
    }
}

// ─── Host ────────────────────────────────────────────────────────────────

/// The browser window and its document.
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(EaselError::NoWindow)?;
        let document = window.document().ok_or(EaselError::NoDocument)?;
        Ok(Self { window, document })
    }
}

fn viewport_of(window: &Window) -> Size {
    let px = |dim: std::result::Result<JsValue, JsValue>| {
        dim.ok()
            .and_then(|v| v.as_f64())
            .map_or(0, |v| v.max(0.0) as u32)
    };
    Size::new(px(window.inner_width()), px(window.inner_height()))
}

impl Host for WebHost {
    type Surface = WebCanvas;

    fn create_surface(&self) -> Result<WebCanvas> {
        let element = self
            .document
            .create_element("canvas")
            .map_err(|e| EaselError::SurfaceCreation(describe(e)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| EaselError::SurfaceCreation("created element is not a canvas".into()))?;
        let body = self
            .document
            .body()
            .ok_or_else(|| EaselError::SurfaceCreation("document has no body".into()))?;
        body.append_child(&element)
            .map_err(|e| EaselError::SurfaceCreation(describe(e)))?;
        log::debug!("attached new canvas to <body>");
        WebCanvas::from_element(element)
    }

    fn viewport_size(&self) -> Size {
        viewport_of(&self.window)
    }

    fn on_resize(&self, mut handler: ResizeHandler) -> Result<ResizeSubscription> {
        let window = self.window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || handler(viewport_of(&window)));
        self.window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .map_err(|e| EaselError::Listener(describe(e)))?;
        log::debug!("resize listener attached");

        let target = self.window.clone();
        Ok(ResizeSubscription::new(move || {
            if let Err(e) = target
                .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            {
                log::warn!("resize listener not removed: {}", describe(e));
            }
            // The closure is freed here, after the browser has let go of it.
            drop(callback);
        }))
    }
}
