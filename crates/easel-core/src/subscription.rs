//! Handle for a registered viewport-resize listener.

use std::fmt;

/// Keeps a resize listener attached until disposed.
///
/// The host supplies the detach action when it registers the listener.
/// `dispose` runs it; dropping the handle runs it too. Either way it
/// runs at most once.
#[must_use = "dropping a ResizeSubscription detaches the resize listener"]
pub struct ResizeSubscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ResizeSubscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Detach the listener now.
    pub fn dispose(mut self) {
        self.detach_now();
    }

    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            log::debug!("detaching resize listener");
            detach();
        }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}

impl fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting() -> (Rc<Cell<u32>>, ResizeSubscription) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (count, ResizeSubscription::new(move || c.set(c.get() + 1)))
    }

    #[test]
    fn dispose_detaches_once() {
        let (count, sub) = counting();
        assert!(sub.is_active());
        sub.dispose();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn drop_detaches() {
        let (count, sub) = counting();
        drop(sub);
        assert_eq!(count.get(), 1);
    }
}
