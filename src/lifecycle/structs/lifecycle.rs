use std::sync::Arc;
use std::time::Duration;
use parking_lot::Mutex;
use crate::lifecycle::traits::lifecycle_hook::LifecycleHook;

pub struct Lifecycle {
    pub(crate) hooks: Mutex<Vec<Arc<dyn LifecycleHook>>>,
    pub(crate) rollback_grace_period: Duration,
}
