#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `invariants` provides fatal runtime checks. A failed [`check!`] or
//! [`check_eq!`] prints a report to standard error and aborts the process.
//! There is no unwinding and no way to intercept the failure.
//!
//! # Design
//!
//! The macros capture the expression text, the enclosing function (via
//! [`function_name!`]) and the source location at the call site. They hand
//! these to a `#[cold]` failure function that builds a [`Violation`], attaches
//! a force-captured backtrace, writes the report and calls
//! [`std::process::abort`]. The report lists:
//!
//! 1. the failing expression, the function and `file:line:column`;
//! 2. for [`check_eq!`], each operand's source text and `Debug` value;
//! 3. the caller's message, or `<no message>`;
//! 4. the backtrace.
//!
//! # Invariants
//!
//! - Checks are active when the `checks-on` feature is enabled, or when the
//!   calling crate is built with `debug_assertions` and `checks-off` is not
//!   enabled. See [`checks_active`].
//! - An inactive check is a branch on a `false` constant. Its operands are
//!   still type-checked but never evaluated, so expressions passed to a check
//!   must not have side effects the program relies on.
//!
//! # Examples
//!
//! ```
//! use invariants::{check, check_eq};
//!
//! fn split(total: u32, parts: u32) -> u32 {
//!     check!(parts > 0, "cannot split {total} into zero parts");
//!     let share = total / parts;
//!     check_eq!(share * parts + total % parts, total);
//!     share
//! }
//!
//! assert_eq!(split(10, 3), 3);
//! ```

mod function_name;
mod report;
mod violation;

pub use report::{checks_active, fail_check, fail_eq};
pub use violation::{Operand, Site, Violation};

/// Paths used by macro expansions. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::function_name::enclosing_function;
}

/// Expands to the path of the enclosing function as a `&'static str`.
///
/// Closures are transparent: inside a closure the surrounding function is
/// named.
///
/// ```
/// fn load_index() -> &'static str {
///     invariants::function_name!()
/// }
///
/// assert!(load_index().ends_with("::load_index"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __function_name_marker() {}
        $crate::__private::enclosing_function(::core::any::type_name_of_val(
            &__function_name_marker,
        ))
    }};
}

/// Aborts with a report when a condition is false.
///
/// An optional `format!`-style message follows the condition.
///
/// ```
/// let queue = vec![1, 2, 3];
/// invariants::check!(!queue.is_empty());
/// invariants::check!(queue.len() < 8, "queue grew to {}", queue.len());
/// ```
#[macro_export]
macro_rules! check {
    ($condition:expr $(,)?) => {{
        const ACTIVE: bool = $crate::checks_active(::core::cfg!(debug_assertions));
        if ACTIVE && !$condition {
            $crate::fail_check(
                $crate::Site::new(
                    ::core::stringify!($condition),
                    $crate::function_name!(),
                    ::core::file!(),
                    ::core::line!(),
                    ::core::column!(),
                ),
                ::core::option::Option::None,
            );
        }
    }};
    ($condition:expr, $($message:tt)+) => {{
        const ACTIVE: bool = $crate::checks_active(::core::cfg!(debug_assertions));
        if ACTIVE && !$condition {
            $crate::fail_check(
                $crate::Site::new(
                    ::core::stringify!($condition),
                    $crate::function_name!(),
                    ::core::file!(),
                    ::core::line!(),
                    ::core::column!(),
                ),
                ::core::option::Option::Some(::core::format_args!($($message)+)),
            );
        }
    }};
}

/// Aborts with a report when two values differ.
///
/// Both operands must implement `Debug`; the report shows each one's source
/// text and value. An optional `format!`-style message follows the operands.
///
/// ```
/// let expected = [1, 2, 3];
/// let actual = vec![1, 2, 3];
/// invariants::check_eq!(actual, expected);
/// invariants::check_eq!(actual.len(), 3, "lost an element");
/// ```
#[macro_export]
macro_rules! check_eq {
    (@compare $left:expr, $right:expr, $message:expr) => {{
        const ACTIVE: bool = $crate::checks_active(::core::cfg!(debug_assertions));
        if ACTIVE {
            match (&$left, &$right) {
                (left, right) => {
                    if !(*left == *right) {
                        $crate::fail_eq(
                            $crate::Site::new(
                                ::core::concat!(
                                    ::core::stringify!($left),
                                    " == ",
                                    ::core::stringify!($right)
                                ),
                                $crate::function_name!(),
                                ::core::file!(),
                                ::core::line!(),
                                ::core::column!(),
                            ),
                            (::core::stringify!($left), left),
                            (::core::stringify!($right), right),
                            $message,
                        );
                    }
                }
            }
        }
    }};
    ($left:expr, $right:expr $(,)?) => {
        $crate::check_eq!(@compare $left, $right, ::core::option::Option::None)
    };
    ($left:expr, $right:expr, $($message:tt)+) => {
        $crate::check_eq!(
            @compare $left, $right,
            ::core::option::Option::Some(::core::format_args!($($message)+))
        )
    };
}
