//! Logging macros.
//!
//! With the `defmt` feature these forward to the matching `defmt` macro.
//! Without it they expand to nothing, so host tests need no global logger.
//!
//! `warn` is defined as `warn_` and re-exported under its usual name: a
//! plain `warn` would be ambiguous with the built-in `#[warn]` attribute.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    }};
}

macro_rules! warn_ {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)*);
    }};
}

pub(crate) use debug;
pub(crate) use trace;
pub(crate) use warn_ as warn;
