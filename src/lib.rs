#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! `diag` bundles the diagnostics core used at call sites:
//!
//! - structured, severity-gated logging to standard error ([`log!`] and its
//!   [`log_error!`], [`log_info!`] and [`log_debug!`] shorthands);
//! - fatal invariant checks ([`check!`], [`check_eq!`]);
//! - compile-time expansion over variadic token lists ([`for_each!`],
//!   [`for_each2!`]).
//!
//! # Configuration
//!
//! Everything is chosen when the crate is built. The `log-none`, `log-error`,
//! `log-info` and `log-debug` features select [`ACTIVE_LEVEL`] (debug when none
//! is selected). `checks-on` and `checks-off` override the default of running
//! checks only in builds with `debug_assertions`.
//!
//! # Examples
//!
//! ```
//! use diag::{check_eq, log_info};
//!
//! let copied = 3;
//! check_eq!(copied, 3);
//! log_info!("copy finished", files, copied);
//! ```

pub use foreach::{for_each, for_each2};
pub use invariants::{Violation, check, check_eq, checks_active, function_name};
pub use logging::{
    ACTIVE_LEVEL, Field, Level, ParseLevelError, Record, RecordSink, emit, enabled, log, log_debug,
    log_error, log_info,
};
