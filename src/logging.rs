//! Logging shims over the `log` facade.
//!
//! With the `logging` feature disabled the macros still type-check their
//! arguments but emit nothing.

#[cfg(feature = "logging")]
macro_rules! search_debug {
    ($($arg:tt)*) => { log::debug!(target: "connect_four::search", $($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! search_debug {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[cfg(feature = "logging")]
macro_rules! search_trace {
    ($($arg:tt)*) => { log::trace!(target: "connect_four::search", $($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! search_trace {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}
