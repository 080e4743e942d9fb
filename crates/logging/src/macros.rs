//! crates/logging/src/macros.rs
//! Call-site logging macros.
//!
//! Every macro checks its level against [`ACTIVE_LEVEL`](crate::ACTIVE_LEVEL)
//! inside a `const` item, so a disabled call evaluates none of its arguments
//! and leaves no code behind.

/// Emits a log line at an explicit level.
///
/// The level must be a constant expression. The message is followed by a
/// flattened, even-length `key, value` list: keys are identifiers or
/// literals, values are any expression implementing [`Display`].
///
/// [`Display`]: std::fmt::Display
///
/// # Example
/// ```
/// use logging::{log, Level};
///
/// let peer = "10.0.0.7";
/// log!(Level::Info, "connected", peer, peer, "tls", true);
/// // [src/main.rs:4] connected peer=10.0.0.7 tls=true
/// ```
///
/// A key without a value does not compile:
///
/// ```compile_fail
/// let peer = "10.0.0.7";
/// logging::log!(logging::Level::Info, "connected", peer);
/// ```
///
/// Supplying the value makes the same call compile:
///
/// ```
/// let peer = "10.0.0.7";
/// logging::log!(logging::Level::Info, "connected", peer, peer);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $message:expr $(,)?) => {{
        const ENABLED: bool = $crate::enabled($level);
        if ENABLED {
            $crate::emit(&$crate::Record::new(
                ::core::file!(),
                ::core::line!(),
                $message,
                &[],
            ));
        }
    }};
    ($level:expr, $message:expr, $($fields:tt)+) => {{
        const ENABLED: bool = $crate::enabled($level);
        if ENABLED {
            $crate::emit(&$crate::Record::new(
                ::core::file!(),
                ::core::line!(),
                $message,
                &$crate::__private::for_each2!(
                    [$crate::__log_key], [$crate::__log_value] => [$crate::__log_fields];
                    $($fields)+
                ),
            ));
        }
    }};
}

/// Emits an error line.
///
/// # Example
/// ```
/// logging::log_error!("write failed", path, "/var/lib/db", errno, 28);
/// ```
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

/// Emits an info line.
///
/// # Example
/// ```
/// logging::log_info!("listening", port, 8080);
/// ```
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Emits a debug line.
///
/// # Example
/// ```
/// let batch = [1, 2, 3];
/// logging::log_debug!("flushing batch", size, batch.len());
/// ```
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Renders a key: literals through `concat!` (no quotes), anything else
/// through `stringify!`.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_key {
    ($key:literal) => {
        ::core::concat!($key)
    };
    ($($key:tt)+) => {
        ::core::stringify!($($key)+)
    };
}

/// Borrows a value as a `Display` trait object.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_value {
    ($($value:tt)+) => {
        &($($value)+) as &dyn ::core::fmt::Display
    };
}

/// Collects the alternating key/value applications into a field array.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_fields {
    ($($key:expr, $value:expr,)*) => {
        [$(($key, $value)),*]
    };
}
