//! Logging shims.
//!
//! Graph mutations report through `tracing` when the `tracing` feature is
//! enabled. Without it these expand to nothing and no code is generated.

macro_rules! graph_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

macro_rules! graph_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    };
}
