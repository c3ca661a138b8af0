use parking_lot::RwLock;

/// Holds the handle consumers may observe. Only verified handles are ever
/// published.
pub struct HandleSlot<H> {
    pub(crate) handle: RwLock<Option<H>>,
}
