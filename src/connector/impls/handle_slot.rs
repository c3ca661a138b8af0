use parking_lot::RwLock;
use crate::connector::structs::handle_slot::HandleSlot;

impl<H: Clone> HandleSlot<H> {
    pub fn new() -> HandleSlot<H> {
        HandleSlot {
            handle: RwLock::new(None),
        }
    }

    /// Returns the handle that was published before, if any.
    pub fn publish(&self, handle: H) -> Option<H> {
        self.handle.write().replace(handle)
    }

    pub fn take(&self) -> Option<H> {
        self.handle.write().take()
    }

    pub fn get(&self) -> Option<H> {
        self.handle.read().clone()
    }

    pub fn is_published(&self) -> bool {
        self.handle.read().is_some()
    }
}

impl<H: Clone> Default for HandleSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}
