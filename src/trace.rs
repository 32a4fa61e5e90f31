//! Internal tracing hooks.
//!
//! With the `tracing` feature enabled, [`trace_event!`] forwards to
//! `tracing::trace!`. Without it the macro expands to nothing and the
//! arguments are never evaluated.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        ::tracing::trace!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($argument:tt)*) => {};
}

pub(crate) use trace_event;
