#![forbid(unsafe_code)]

//! Logging facade for layout passes.
//!
//! With the `tracing` feature the `debug!`, `debug_span!` and `trace!` macros
//! are the real `tracing` macros. Without it they expand to nothing, so layout
//! code can log unconditionally.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace};

#[cfg(not(feature = "tracing"))]
mod disabled {
    /// Discards a layout debug event.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Evaluates to a [`NoopSpan`](crate::logging::NoopSpan); the fields are discarded.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// Discards a per-child trace event.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }
}

/// Stand-in for `tracing::Span` so `span.enter()` compiles without tracing.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// Returned by [`NoopSpan::enter`].
#[cfg(not(feature = "tracing"))]
pub struct NoopGuard;

/// Install a JSON `tracing` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json() -> bool {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .is_ok()
}
