//! Tracing support for graph mutation and path search.
//!
//! This module re-exports the `tracing` macros used by the crate when the
//! `tracing` feature is enabled, and provides no-op replacements when it's
//! disabled.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing::Level;

    /// Installs a formatting subscriber writing to stderr.  Only the first
    /// call has any effect, and it does nothing if the application already
    /// installed a global subscriber.
    pub fn init_tracing(verbose: bool) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let level = if verbose { Level::TRACE } else { Level::INFO };
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .try_init();
        });
    }

    pub use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing(_verbose: bool) {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __pathgraph_info_span {
        ($($args:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __pathgraph_event {
        ($($args:tt)*) => {{}};
    }

    pub use crate::__pathgraph_event as debug;
    pub use crate::__pathgraph_event as trace;
    pub use crate::__pathgraph_info_span as info_span;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing(true);
        init_tracing(false);
        let _span = info_span!("test_span").entered();
        trace!(value = 1, "inside span");
        debug!("still inside span");
    }
}
