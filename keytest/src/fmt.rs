//! Logging front-end: `defmt` on firmware builds, the `log` facade everywhere else.
//!
//! The macros carry a trailing underscore and are re-exported under their
//! plain names, since a `warn` macro defined here would clash with the
//! built-in `warn` attribute.

macro_rules! debug_ {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);
        #[cfg(not(feature = "defmt"))]
        ::log::debug!($($arg)*);
    }};
}

macro_rules! info_ {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($($arg)*);
        #[cfg(not(feature = "defmt"))]
        ::log::info!($($arg)*);
    }};
}

macro_rules! warn_ {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);
        #[cfg(not(feature = "defmt"))]
        ::log::warn!($($arg)*);
    }};
}

pub(crate) use debug_ as debug;
pub(crate) use info_ as info;
pub(crate) use warn_ as warn;
