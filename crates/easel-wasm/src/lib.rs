//! WASM bridge for Easel — exposes the drawing facade to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`.

mod web;

pub use web::{WebCanvas, WebHost, WebStyle};

use easel_core::{ArcOptions, Easel, EaselConfig, EaselError, Paint, PathOptions, ResizeSubscription};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasPattern, HtmlCanvasElement};

/// The JS-facing drawing facade.
///
/// Owns the canvas, the window host, and the resize subscription created
/// by `initialize` in full-window mode.
#[wasm_bindgen]
pub struct EaselCanvas {
    easel: Easel<WebCanvas>,
    host: WebHost,
    subscription: Option<ResizeSubscription>,
}

#[wasm_bindgen]
impl EaselCanvas {
    /// Adopt `canvas`, or create one and append it to `<body>`.
    /// `full_window` defaults to `true`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: Option<HtmlCanvasElement>,
        full_window: Option<bool>,
    ) -> Result<EaselCanvas, JsValue> {
        let config = EaselConfig {
            full_window: full_window.unwrap_or(true),
        };
        Self::build(canvas, config)
    }

    /// Same as the constructor, with config given as JSON
    /// (e.g. `{"full_window": false}`).
    pub fn with_config_json(
        canvas: Option<HtmlCanvasElement>,
        json: &str,
    ) -> Result<EaselCanvas, JsValue> {
        let config = parse_config(json).map_err(|e| js_error(&e))?;
        Self::build(canvas, config)
    }

    /// Size the canvas and, in full-window mode, start following the window.
    /// Calling it again replaces the previous resize listener.
    pub fn initialize(&mut self) -> Result<(), JsValue> {
        if let Some(subscription) = self.easel.initialize(&self.host).map_err(to_js)? {
            if let Some(previous) = self.subscription.replace(subscription) {
                previous.dispose();
            }
        }
        Ok(())
    }

    /// Stop following window resizes.
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.dispose();
        }
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.easel.set_size(width, height);
    }

    pub fn add_point(&mut self, x: f64, y: f64) {
        self.easel.add_point(x, y);
    }

    pub fn stroke(&mut self, closed: Option<bool>) {
        self.easel.stroke(path_options(closed));
    }

    pub fn fill(&mut self, closed: Option<bool>) {
        self.easel.fill(path_options(closed));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: Option<bool>,
        add_to_path: Option<bool>,
    ) {
        self.easel.arc(
            x,
            y,
            radius,
            start_angle,
            end_angle,
            arc_options(anticlockwise, add_to_path),
        );
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.easel.rect(x, y, width, height);
    }

    /// Set the fill style: CSS color string, `CanvasGradient` or `CanvasPattern`.
    pub fn fill_style(&mut self, style: &JsValue) -> Result<(), JsValue> {
        let style = style_from_js(style)?;
        self.easel.fill_style(&style);
        Ok(())
    }

    /// Set the stroke style: CSS color string, `CanvasGradient` or `CanvasPattern`.
    pub fn stroke_style(&mut self, style: &JsValue) -> Result<(), JsValue> {
        let style = style_from_js(style)?;
        self.easel.stroke_style(&style);
        Ok(())
    }

    /// Set the fill style from a serialized `Paint`.
    pub fn fill_paint(&mut self, json: &str) -> Result<(), JsValue> {
        let style = self.paint_style(json)?;
        self.easel.fill_style(&style);
        Ok(())
    }

    /// Set the stroke style from a serialized `Paint`.
    pub fn stroke_paint(&mut self, json: &str) -> Result<(), JsValue> {
        let style = self.paint_style(json)?;
        self.easel.stroke_style(&style);
        Ok(())
    }

    /// Register a pattern for use in serialized paints. Returns its id.
    pub fn register_pattern(&mut self, pattern: CanvasPattern) -> u32 {
        self.easel.surface_mut().register_pattern(pattern).0
    }

    /// Fill the whole canvas, with `style` if given.
    pub fn background(&mut self, style: &JsValue) -> Result<(), JsValue> {
        if style.is_undefined() || style.is_null() {
            self.easel.background(None);
        } else {
            let style = style_from_js(style)?;
            self.easel.background(Some(&style));
        }
        Ok(())
    }

    pub fn save(&mut self) {
        self.easel.save();
    }

    pub fn restore(&mut self) {
        self.easel.restore();
    }

    pub fn clear_all(&mut self) {
        self.easel.clear_all();
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.easel.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.easel.height()
    }

    #[wasm_bindgen(getter)]
    pub fn path_open(&self) -> bool {
        self.easel.is_path_open()
    }

    #[wasm_bindgen(getter)]
    pub fn canvas(&self) -> HtmlCanvasElement {
        self.easel.surface().element().clone()
    }
}

impl EaselCanvas {
    fn build(canvas: Option<HtmlCanvasElement>, config: EaselConfig) -> Result<Self, JsValue> {
        console_error_panic_hook_setup();

        let host = WebHost::new().map_err(to_js)?;
        let surface = canvas.map(WebCanvas::from_element).transpose().map_err(to_js)?;
        let easel = Easel::from_existing(surface, &host, config).map_err(to_js)?;
        Ok(Self {
            easel,
            host,
            subscription: None,
        })
    }

    fn paint_style(&self, json: &str) -> Result<WebStyle, JsValue> {
        let paint = parse_paint(json).map_err(|e| js_error(&e))?;
        Ok(self.easel.surface().style_from_paint(&paint))
    }
}

// ─── Argument helpers ────────────────────────────────────────────────────

fn path_options(closed: Option<bool>) -> PathOptions {
    PathOptions {
        closed: closed.unwrap_or(false),
    }
}

fn arc_options(anticlockwise: Option<bool>, add_to_path: Option<bool>) -> ArcOptions {
    ArcOptions {
        anticlockwise: anticlockwise.unwrap_or(false),
        add_to_path: add_to_path.unwrap_or(false),
    }
}

fn parse_config(json: &str) -> Result<EaselConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("invalid config: {e}"))
}

fn parse_paint(json: &str) -> Result<Paint, String> {
    serde_json::from_str(json).map_err(|e| format!("invalid paint: {e}"))
}

fn style_from_js(value: &JsValue) -> Result<WebStyle, JsValue> {
    WebStyle::from_js(value)
        .ok_or_else(|| js_error("style must be a CSS color string, CanvasGradient or CanvasPattern"))
}

fn to_js(err: EaselError) -> JsValue {
    js_error(&err.to_string())
}

fn js_error(msg: &str) -> JsValue {
    js_sys::Error::new(msg).into()
}

// ─── Logging & panics ────────────────────────────────────────────────────

/// Route `log` records to the browser console at `level`
/// (`error`, `warn`, `info`, `debug`, `trace`; default `info`).
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    console_error_panic_hook_setup();
    let level = level.parse::<log::Level>().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Easel WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::model::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_flags_default_off() {
        assert_eq!(path_options(None), PathOptions::OPEN);
        assert_eq!(path_options(Some(true)), PathOptions::CLOSED);
        assert_eq!(arc_options(None, None), ArcOptions::default());
        assert_eq!(
            arc_options(Some(true), None),
            ArcOptions {
                anticlockwise: true,
                add_to_path: false,
            }
        );
    }

    #[test]
    fn config_json_defaults_to_full_window() {
        assert_eq!(parse_config("{}"), Ok(EaselConfig::default()));
        assert_eq!(
            parse_config(r#"{"full_window":false}"#),
            Ok(EaselConfig::fixed())
        );
        assert!(parse_config("nope").unwrap_err().starts_with("invalid config"));
    }

    #[test]
    fn paint_json_parses_gradients() {
        let paint = parse_paint(
            r#"{"kind":"linear_gradient","start":[0,0],"end":[100,0],
                "stops":[{"offset":0.0,"color":{"r":1,"g":1,"b":1,"a":1}},
                         {"offset":1.0,"color":{"r":0,"g":0,"b":0,"a":1}}]}"#,
        )
        .unwrap();
        assert_eq!(paint.flat_color(), Some(Color::WHITE));
        assert!(parse_paint(r#"{"kind":"sparkles"}"#).is_err());
    }
}
