//! Logging support.
//!
//! With the `tracing` feature enabled, graph operations report rejected
//! vertex indices as `warn` events and mutations as `trace` events.  With the
//! feature disabled the same macros expand to nothing.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    pub(crate) use tracing::{trace, warn};

    /// Installs a formatting subscriber that writes through the test harness.
    /// Safe to call any number of times; only the first call has an effect,
    /// and an already-installed global subscriber is left in place.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::TRACE)
                .try_init();
        });
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! noop_event {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use noop_event as trace;
    pub(crate) use noop_event as warn;
}

#[cfg(feature = "tracing")]
pub use enabled::init_tracing;
#[cfg(feature = "tracing")]
pub(crate) use enabled::{trace, warn};

#[cfg(not(feature = "tracing"))]
pub use disabled::init_tracing;
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{trace, warn};
