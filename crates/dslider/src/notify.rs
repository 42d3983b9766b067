#![forbid(unsafe_code)]

//! Host notification boundary.
//!
//! Host callbacks receive the literal `(left, right)` pair. They run behind
//! [`std::panic::catch_unwind`]: a panicking callback is logged at `warn`,
//! counted, and dropped, and slider state is never rolled back or left
//! half-updated because of it. Unlike a batch flush there is nothing to
//! re-raise to; the host already owns the failure.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::warn;

pub type ValueCallback = Box<dyn FnMut(f64, f64)>;

/// Which host notification is being delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    SlidingStart,
    ValueChanged,
    SlidingComplete,
}

impl Notification {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SlidingStart => "on_sliding_start",
            Self::ValueChanged => "on_value_changed",
            Self::SlidingComplete => "on_sliding_complete",
        }
    }
}

/// Optional host callbacks.
#[derive(Default)]
pub struct SliderCallbacks {
    on_sliding_start: Option<ValueCallback>,
    on_value_changed: Option<ValueCallback>,
    on_sliding_complete: Option<ValueCallback>,
    suppressed_panics: u64,
}

impl fmt::Debug for SliderCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderCallbacks")
            .field("on_sliding_start", &self.on_sliding_start.is_some())
            .field("on_value_changed", &self.on_value_changed.is_some())
            .field("on_sliding_complete", &self.on_sliding_complete.is_some())
            .field("suppressed_panics", &self.suppressed_panics)
            .finish()
    }
}

impl SliderCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_sliding_start(mut self, f: impl FnMut(f64, f64) + 'static) -> Self {
        self.on_sliding_start = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_value_changed(mut self, f: impl FnMut(f64, f64) + 'static) -> Self {
        self.on_value_changed = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_sliding_complete(mut self, f: impl FnMut(f64, f64) + 'static) -> Self {
        self.on_sliding_complete = Some(Box::new(f));
        self
    }

    /// Number of callback panics caught so far.
    #[inline]
    #[must_use]
    pub fn suppressed_panics(&self) -> u64 {
        self.suppressed_panics
    }

    /// Deliver `kind` with the pair `(left, right)`. Returns `false` if the
    /// callback panicked.
    pub fn emit(&mut self, kind: Notification, left: f64, right: f64) -> bool {
        let slot = match kind {
            Notification::SlidingStart => &mut self.on_sliding_start,
            Notification::ValueChanged => &mut self.on_value_changed,
            Notification::SlidingComplete => &mut self.on_sliding_complete,
        };
        let Some(callback) = slot.as_mut() else {
            return true;
        };
        match catch_unwind(AssertUnwindSafe(|| callback(left, right))) {
            Ok(()) => true,
            Err(payload) => {
                self.suppressed_panics = self.suppressed_panics.saturating_add(1);
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_owned())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_default();
                warn!(
                    callback = kind.as_str(),
                    left,
                    right,
                    panic = %message,
                    "slider callback panicked; notification dropped"
                );
                false
            }
        }
    }
}
