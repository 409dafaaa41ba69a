//! The `Easel` drawing facade.
//!
//! Forwards drawing calls to a [`Surface`] and keeps the one bit of state
//! that makes point accumulation work: whether a path is currently open.
//!
//! ```text
//!            add_point              add_point
//!   Idle ───────────────▶ Building ◀─────────┐
//!    ▲                       │  └────────────┘
//!    └──── fill / stroke ────┘
//! ```
//!
//! The mutable part lives behind `Rc<RefCell<..>>` so a viewport resize
//! handler can reach it through a weak reference without owning the facade.

use crate::config::{ArcOptions, EaselConfig, PathOptions};
use crate::error::Result;
use crate::model::Size;
use crate::subscription::ResizeSubscription;
use crate::surface::{Host, Surface};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

struct State<S> {
    surface: S,
    path_open: bool,
    size: Size,
}

impl<S: Surface> State<S> {
    fn resize(&mut self, size: Size) {
        self.surface.set_pixel_size(size);
        self.size = size;
    }
}

/// Convenience wrapper around a 2D drawing surface.
pub struct Easel<S: Surface> {
    state: Rc<RefCell<State<S>>>,
    config: EaselConfig,
}

impl<S: Surface + 'static> Easel<S> {
    /// Adopt an existing surface.
    pub fn new(surface: S, config: EaselConfig) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                surface,
                path_open: false,
                size: Size::default(),
            })),
            config,
        }
    }

    /// Have the host create (and attach) a fresh surface.
    pub fn create<H: Host<Surface = S>>(host: &H, config: EaselConfig) -> Result<Self> {
        let surface = host.create_surface()?;
        log::debug!("created surface of {:?}", surface.pixel_size());
        Ok(Self::new(surface, config))
    }

    /// Adopt `surface` if given, otherwise create one through `host`.
    pub fn from_existing<H: Host<Surface = S>>(
        surface: Option<S>,
        host: &H,
        config: EaselConfig,
    ) -> Result<Self> {
        match surface {
            Some(surface) => Ok(Self::new(surface, config)),
            None => Self::create(host, config),
        }
    }

    /// First size sync.
    ///
    /// In full-window mode the surface is sized to the viewport and kept
    /// there by a resize listener; the returned subscription owns that
    /// listener. Otherwise the surface's own size is adopted and `None`
    /// is returned.
    ///
    /// If the host refuses the listener, the error is returned before the
    /// surface is touched.
    pub fn initialize<H: Host<Surface = S>>(
        &mut self,
        host: &H,
    ) -> Result<Option<ResizeSubscription>> {
        if !self.config.full_window {
            let mut state = self.state.borrow_mut();
            let size = state.surface.pixel_size();
            state.size = size;
            log::debug!("initialized at surface size {:?}", state.size);
            return Ok(None);
        }

        // Listener first: a refused registration leaves the surface untouched.
        let weak = Rc::downgrade(&self.state);
        let subscription = host.on_resize(Box::new(move |size: Size| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            log::trace!("viewport resized to {size:?}");
            match state.try_borrow_mut() {
                Ok(mut state) => state.resize(size),
                Err(_) => log::warn!("facade busy, resize to {size:?} dropped"),
            }
        }))?;

        let mut state = self.state.borrow_mut();
        state.surface.show_as_block();
        state.resize(host.viewport_size());
        log::debug!("initialized full-window at {:?}", state.size);
        Ok(Some(subscription))
    }

    /// Resize the backing store and the cached size. No validation.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.state.borrow_mut().resize(Size::new(width, height));
    }

    /// Start a path at the first point, then draw segments to each next one.
    pub fn add_point(&mut self, x: f64, y: f64) {
        let mut state = self.state.borrow_mut();
        if state.path_open {
            state.surface.line_to(x, y);
        } else {
            state.surface.begin_path();
            state.surface.move_to(x, y);
            state.path_open = true;
        }
    }

    /// Stroke the current path and return to idle.
    pub fn stroke(&mut self, opts: PathOptions) {
        self.finish(opts, S::stroke);
    }

    /// Fill the current path and return to idle.
    pub fn fill(&mut self, opts: PathOptions) {
        self.finish(opts, S::fill);
    }

    fn finish(&mut self, opts: PathOptions, paint: fn(&mut S)) {
        let mut state = self.state.borrow_mut();
        if opts.closed {
            state.surface.close_path();
        }
        paint(&mut state.surface);
        state.path_open = false;
    }

    /// Draw an arc, on a fresh path unless `opts.add_to_path`.
    ///
    /// A fresh arc path is not a point path, so it also resets the open flag:
    /// the next `add_point` begins a new path.
    pub fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        opts: ArcOptions,
    ) {
        let mut state = self.state.borrow_mut();
        if !opts.add_to_path {
            state.surface.begin_path();
            state.path_open = false;
        }
        state
            .surface
            .arc(x, y, radius, start_angle, end_angle, opts.anticlockwise);
    }

    /// Fill a rectangle with the current fill style. Leaves the path alone.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.state
            .borrow_mut()
            .surface
            .fill_rect(x, y, width, height);
    }

    pub fn fill_style(&mut self, style: &S::Style) {
        self.state.borrow_mut().surface.set_fill_style(style);
    }

    pub fn stroke_style(&mut self, style: &S::Style) {
        self.state.borrow_mut().surface.set_stroke_style(style);
    }

    /// Fill the whole surface, with `color` if given (the previous fill
    /// style is restored afterwards) or with the current fill style.
    pub fn background(&mut self, color: Option<&S::Style>) {
        let mut state = self.state.borrow_mut();
        let (w, h) = (f64::from(state.size.width), f64::from(state.size.height));
        match color {
            Some(color) => {
                state.surface.save();
                state.surface.set_fill_style(color);
                state.surface.fill_rect(0.0, 0.0, w, h);
                state.surface.restore();
            }
            None => state.surface.fill_rect(0.0, 0.0, w, h),
        }
    }

    pub fn save(&mut self) {
        self.state.borrow_mut().surface.save();
    }

    pub fn restore(&mut self) {
        self.state.borrow_mut().surface.restore();
    }

    /// Clear the whole surface to transparent.
    pub fn clear_all(&mut self) {
        let mut state = self.state.borrow_mut();
        let (w, h) = (f64::from(state.size.width), f64::from(state.size.height));
        state.surface.clear_rect(0.0, 0.0, w, h);
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.state.borrow().size.width
    }

    pub fn height(&self) -> u32 {
        self.state.borrow().size.height
    }

    pub fn size(&self) -> Size {
        self.state.borrow().size
    }

    pub fn is_path_open(&self) -> bool {
        self.state.borrow().path_open
    }

    pub fn config(&self) -> EaselConfig {
        self.config
    }

    pub fn surface(&self) -> Ref<'_, S> {
        Ref::map(self.state.borrow(), |state| &state.surface)
    }

    pub fn surface_mut(&mut self) -> RefMut<'_, S> {
        RefMut::map(self.state.borrow_mut(), |state| &mut state.surface)
    }
}
