//! Log forwarding to `defmt` (hardware) or `tracing` (desktop).
//!
//! Both backends are optional. With neither enabled the macros only borrow
//! their arguments so call sites compile to nothing.

#![allow(unused_macros)]

macro_rules! emit {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::$level!($s $(, $x)*);
        #[cfg(feature = "tracing")]
        ::tracing::$level!($s $(, $x)*);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        let _ = ($(&$x),*);
    }};
}

macro_rules! trace {
    ($($t:tt)*) => { emit!(trace, $($t)*) };
}

macro_rules! debug {
    ($($t:tt)*) => { emit!(debug, $($t)*) };
}

macro_rules! info {
    ($($t:tt)*) => { emit!(info, $($t)*) };
}

macro_rules! warn {
    ($($t:tt)*) => { emit!(warn, $($t)*) };
}
