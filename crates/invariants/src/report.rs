//! crates/invariants/src/report.rs
//! Failure paths taken by the check macros.

use std::backtrace::Backtrace;
use std::fmt;
use std::io::{self, Write};
use std::process;

use crate::violation::{Operand, Site, Violation};

/// Reports whether checks are active for a caller built with
/// `debug_assertions` set to the given value.
///
/// `checks-on` forces checks active, `checks-off` disables them, and with
/// neither feature the caller's build profile decides. When both features are
/// unified into one build, `checks-on` wins.
///
/// ```
/// let active = invariants::checks_active(cfg!(debug_assertions));
/// # let _ = active;
/// ```
#[must_use]
pub const fn checks_active(debug_assertions: bool) -> bool {
    cfg!(feature = "checks-on") || (debug_assertions && !cfg!(feature = "checks-off"))
}

/// Failure path of [`check!`](crate::check).
#[cold]
#[inline(never)]
pub fn fail_check(site: Site, message: Option<fmt::Arguments<'_>>) -> ! {
    let violation = Violation::new(site)
        .with_message(message)
        .with_backtrace(Backtrace::force_capture());
    report(&violation)
}

/// Failure path of [`check_eq!`](crate::check_eq).
#[cold]
#[inline(never)]
pub fn fail_eq<L, R>(
    site: Site,
    left: (&'static str, &L),
    right: (&'static str, &R),
    message: Option<fmt::Arguments<'_>>,
) -> !
where
    L: fmt::Debug + ?Sized,
    R: fmt::Debug + ?Sized,
{
    let violation = Violation::new(site)
        .with_operands(Operand::new(left.0, left.1), Operand::new(right.0, right.1))
        .with_message(message)
        .with_backtrace(Backtrace::force_capture());
    report(&violation)
}

/// Writes the rendered violation to standard error and aborts.
///
/// The report is written in one call on the locked handle. Write errors are
/// ignored since the process is about to terminate anyway.
fn report(violation: &Violation<'_>) -> ! {
    let rendered = format!("{violation}\n");
    let mut stderr = io::stderr().lock();
    let _ = stderr.write_all(rendered.as_bytes());
    let _ = stderr.flush();
    process::abort()
}
