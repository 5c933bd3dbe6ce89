//! Logging macros.
//!
//! On the device the macros forward to `defmt` (RTT transport). Host builds
//! have no logger; the arguments still go through `format_args!` so they stay
//! type-checked and count as used.
//!
//! Messages must stick to plain `{}` placeholders, which both `defmt` and
//! `core::fmt` accept.
//!
//! # Usage
//!
//! ```ignore
//! use bike_computer::{log_info, log_warn};
//!
//! log_info!("Distance reset");
//! log_warn!("Display write failed");
//! ```

/// Log a message at Info level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "arm")]
        defmt::info!($($arg)*);
        #[cfg(not(target_arch = "arm"))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log a message at Warn level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "arm")]
        defmt::warn!($($arg)*);
        #[cfg(not(target_arch = "arm"))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log a message at Debug level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "arm")]
        defmt::debug!($($arg)*);
        #[cfg(not(target_arch = "arm"))]
        let _ = format_args!($($arg)*);
    }};
}
