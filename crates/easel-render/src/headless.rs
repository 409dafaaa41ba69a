//! A host with no window: the viewport is whatever the caller says it is.
//!
//! Useful for offscreen rendering and for exercising full-window sync.
//! Resize notifications are delivered synchronously from `set_viewport`.

use crate::record::RecordingSurface;
use easel_core::error::Result;
use easel_core::model::Size;
use easel_core::subscription::ResizeSubscription;
use easel_core::surface::{Host, ResizeHandler};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Registered handlers. While a notification is running the handlers are
/// lent out, so detaches in that window are queued in `detached`.
#[derive(Default)]
struct Registry {
    handlers: Vec<(u64, ResizeHandler)>,
    notifying: bool,
    detached: Vec<u64>,
}

impl Registry {
    fn detach(&mut self, id: u64) {
        self.handlers.retain(|(other, _)| *other != id);
        if self.notifying {
            self.detached.push(id);
        }
    }
}

pub struct HeadlessHost {
    viewport: Cell<Size>,
    registry: Rc<RefCell<Registry>>,
    next_id: Cell<u64>,
}

impl HeadlessHost {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport: Cell::new(viewport),
            registry: Rc::new(RefCell::new(Registry::default())),
            next_id: Cell::new(0),
        }
    }

    /// Change the viewport and notify every live listener.
    ///
    /// Handlers may register or dispose subscriptions while being notified.
    /// A handler disposed mid-notification is not called afterwards.
    pub fn set_viewport(&self, size: Size) {
        self.viewport.set(size);
        let mut lent = {
            let mut registry = self.registry.borrow_mut();
            registry.notifying = true;
            std::mem::take(&mut registry.handlers)
        };
        log::debug!("viewport -> {size:?}, notifying {}", lent.len());

        for (id, handler) in lent.iter_mut() {
            if self.registry.borrow().detached.contains(id) {
                continue;
            }
            handler(size);
        }

        let mut registry = self.registry.borrow_mut();
        let detached = std::mem::take(&mut registry.detached);
        lent.retain(|(id, _)| !detached.contains(id));
        lent.append(&mut registry.handlers);
        registry.handlers = lent;
        registry.notifying = false;
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new(Size::new(800, 600))
    }
}

impl Host for HeadlessHost {
    type Surface = RecordingSurface;

    fn create_surface(&self) -> Result<RecordingSurface> {
        Ok(RecordingSurface::default())
    }

    fn viewport_size(&self) -> Size {
        self.viewport.get()
    }

    fn on_resize(&self, handler: ResizeHandler) -> Result<ResizeSubscription> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.registry.borrow_mut().handlers.push((id, handler));

        let registry = Rc::downgrade(&self.registry);
        Ok(ResizeSubscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().detach(id);
            }
        }))
    }
}
