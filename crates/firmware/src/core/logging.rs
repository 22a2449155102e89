//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (`rp2350` feature): defmt over RTT
//! - Host tests: println!/eprintln! for standard test output
//! - Host non-test: No-op (format arguments are still type-checked)
//!
//! The acquisition state machines in wheel_input_core never log; every
//! diagnostic of the pipeline is emitted from this crate. Format strings
//! stick to plain `{}` placeholders, which defmt and core::fmt both accept.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        println!("[INFO] {}", format!($($arg)*));

        #[cfg(all(not(feature = "rp2350"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        println!("[WARN] {}", format!($($arg)*));

        #[cfg(all(not(feature = "rp2350"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));

        #[cfg(all(not(feature = "rp2350"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        println!("[DEBUG] {}", format!($($arg)*));

        #[cfg(all(not(feature = "rp2350"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::trace!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        println!("[TRACE] {}", format!($($arg)*));

        #[cfg(all(not(feature = "rp2350"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}
