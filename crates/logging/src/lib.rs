#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` emits structured diagnostic lines on standard error. Every call
//! names a [`Level`]; the build fixes a single threshold, [`ACTIVE_LEVEL`],
//! and calls above it compile to nothing.
//!
//! # Design
//!
//! The call-site macros ([`log!`], [`log_error!`], [`log_info!`],
//! [`log_debug!`]) take a message followed by a flattened `key, value` list.
//! The list is unrolled at compile time with [`foreach::for_each2!`]: keys
//! become `&'static str` through `stringify!`/`concat!` and values are borrowed
//! as [`Display`](std::fmt::Display) trait objects. The result is a borrowed
//! [`Record`] that [`emit`] renders into one line:
//!
//! ```text
//! [src/net.rs:42] retrying peer=10.0.0.7 attempt=3
//! ```
//!
//! [`RecordSink`] does the rendering. It formats into a scratch buffer and
//! hands the finished line to the writer in a single `write_all`, then flushes.
//!
//! # Invariants
//!
//! - The threshold is a `const`. There is no runtime-mutable level.
//! - A disabled call evaluates none of its arguments.
//! - Each enabled call produces exactly one `\n`-terminated line, written in
//!   one call on the standard error handle, so lines from concurrent threads
//!   never interleave.
//! - Fields keep call order; repeated keys are kept.
//!
//! # Errors
//!
//! Logging never reports errors to the caller: a failing standard error stream
//! is ignored. A key without a value is rejected at build time. Parsing a level
//! from text fails with [`ParseLevelError`].
//!
//! # Examples
//!
//! ```
//! use logging::{log_debug, log_error, log_info};
//!
//! let port = 8080;
//! log_info!("listening", port, port, "tls", false);
//! log_error!("bind failed", errno, 98);
//! log_debug!("Message.");
//! ```
//!
//! Rendering into memory instead of standard error:
//!
//! ```
//! use logging::{Field, Record, RecordSink};
//!
//! let fields: [Field<'_>; 1] = [("user", &"ada")];
//! let mut sink = RecordSink::new(Vec::new());
//! sink.write(&Record::new("src/auth.rs", 12, "login", &fields))?;
//! assert_eq!(sink.into_inner(), b"[src/auth.rs:12] login user=ada\n");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # See also
//!
//! - [`foreach`] for the expansion engine behind the field lists.

mod levels;
mod macros;
mod record;
mod sink;

pub use levels::{ACTIVE_LEVEL, Level, ParseLevelError, enabled};
pub use record::{Field, Record};
pub use sink::{RecordSink, emit};

/// Paths used by macro expansions. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use foreach::for_each2;
}
