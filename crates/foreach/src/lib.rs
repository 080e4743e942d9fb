#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/foreach/src/lib.rs
//!
//! # Overview
//!
//! `foreach` applies a macro to every item of a comma-separated argument list
//! at compile time. Nothing is iterated at runtime: the list is unrolled into
//! one invocation per item while the calling crate is being expanded.
//!
//! Two forms are provided:
//!
//! - [`for_each!`] applies a single operation to every item.
//! - [`for_each2!`] alternates between two operations, applying the first to
//!   items at even (0-based) positions and the second to items at odd
//!   positions. It is intended for flattened `key, value, key, value` lists.
//!
//! # Design
//!
//! An operation is either a bare macro name (`stringify`) or a bracketed
//! macro path (`[$crate::helper]`). Each form has two outputs:
//!
//! - `for_each!(op; a, b, c)` produces the tuple `(op!(a), op!(b), op!(c),)`.
//! - `for_each!(op => then; a, b, c)` hands the comma-joined applications to a
//!   consuming macro: `then!(op!(a), op!(b), op!(c),)`.
//!
//! Items are split at top-level commas, so an item may be any token sequence
//! that does not contain a bare comma (`x + 1`, `foo.len()` and `[1, 2]` are
//! all single items).
//!
//! # Invariants
//!
//! - Applications appear in the same order as the items.
//! - An empty list expands to `()` (or `then!()`).
//! - Each expansion step is one nested macro invocation. A step closes four
//!   single-token items, one `key, expression` pair, or one whole expression;
//!   only items that are neither fall back to one step per token. The
//!   longest list a crate can expand is therefore bounded by that crate's
//!   `recursion_limit` (128 by default): roughly 500 single-token items, or
//!   100 pairs or expressions. Raise it with `#![recursion_limit = "512"]`
//!   when longer lists are needed.
//! - Operations receive an item either as its tokens or as an already parsed
//!   expression, so they should match `$item:expr` or `$($item:tt)*`.
//!
//! # Errors
//!
//! Malformed lists never truncate silently; they fail the build.
//!
//! An odd-length list passed to [`for_each2!`]:
//!
//! ```compile_fail
//! let _ = foreach::for_each2!(stringify, stringify; key, value, orphan);
//! ```
//!
//! The same call with the value supplied compiles:
//!
//! ```
//! let _ = foreach::for_each2!(stringify, stringify; key, value, orphan, value);
//! ```
//!
//! An empty item:
//!
//! ```compile_fail
//! let _ = foreach::for_each!(stringify; a, , b);
//! ```
//!
//! ```
//! let _ = foreach::for_each!(stringify; a, b);
//! ```
//!
//! A list longer than the recursion limit allows. Every `-N` item costs one
//! step, so forty of them exceed a limit of 16:
//!
//! ```compile_fail
//! #![recursion_limit = "16"]
//! let _ = foreach::for_each!(stringify;
//!     -1, -2, -3, -4, -5, -6, -7, -8, -9, -10,
//!     -11, -12, -13, -14, -15, -16, -17, -18, -19, -20,
//!     -21, -22, -23, -24, -25, -26, -27, -28, -29, -30,
//!     -31, -32, -33, -34, -35, -36, -37, -38, -39, -40,
//! );
//! ```
//!
//! The identical list fits once the limit is raised:
//!
//! ```
//! #![recursion_limit = "64"]
//! let items = foreach::for_each!(stringify;
//!     -1, -2, -3, -4, -5, -6, -7, -8, -9, -10,
//!     -11, -12, -13, -14, -15, -16, -17, -18, -19, -20,
//!     -21, -22, -23, -24, -25, -26, -27, -28, -29, -30,
//!     -31, -32, -33, -34, -35, -36, -37, -38, -39, -40,
//! );
//! assert_eq!(items.39, "-40");
//! ```
//!
//! # Examples
//!
//! Build a constant string entirely at compile time:
//!
//! ```
//! use foreach::for_each;
//!
//! const NAMES: &str = for_each!(stringify => concat; alpha, beta, gamma);
//! assert_eq!(NAMES, "alphabetagamma");
//! ```
//!
//! Render a flattened key/value list with two different operations:
//!
//! ```
//! use foreach::for_each2;
//!
//! macro_rules! shout {
//!     ($value:expr) => {
//!         $value.to_uppercase()
//!     };
//! }
//!
//! let (k1, v1, k2, v2) = for_each2!(stringify, shout; user, "ada", role, "admin");
//! assert_eq!((k1, v1.as_str()), ("user", "ADA"));
//! assert_eq!((k2, v2.as_str()), ("role", "ADMIN"));
//! ```

mod munch;

/// Applies one macro to every item of a comma-separated list.
///
/// ```
/// let names = foreach::for_each!(stringify; a, bb, ccc);
/// assert_eq!(names, ("a", "bb", "ccc"));
///
/// let () = foreach::for_each!(stringify;);
/// ```
///
/// With a consuming macro after `=>`, the applications become that macro's
/// argument list instead of a tuple:
///
/// ```
/// const JOINED: &str = foreach::for_each!(stringify => concat; left, right);
/// assert_eq!(JOINED, "leftright");
/// ```
#[macro_export]
macro_rules! for_each {
    ($op:tt => $then:tt ; $($items:tt)*) => {
        $crate::__for_each_munch!([$op any] [$op any] $then [] [] $($items)*)
    };
    ($op:tt ; $($items:tt)*) => {
        $crate::__for_each_munch!([$op any] [$op any] () [] [] $($items)*)
    };
}

/// Applies two macros alternately to a flattened, even-length list.
///
/// The first macro receives the items at positions 0, 2, 4, …; the second
/// receives the items at positions 1, 3, 5, …. An odd number of items is a
/// build error.
///
/// ```
/// macro_rules! pairs {
///     ($($key:expr, $value:expr,)*) => {
///         [$(($key, $value)),*]
///     };
/// }
///
/// macro_rules! same {
///     ($value:expr) => {
///         $value
///     };
/// }
///
/// let fields = foreach::for_each2!(stringify, same => pairs; width, 80, height, 24);
/// assert_eq!(fields, [("width", 80), ("height", 24)]);
/// ```
#[macro_export]
macro_rules! for_each2 {
    ($first:tt , $second:tt => $then:tt ; $($items:tt)*) => {
        $crate::__for_each_munch!([$first key] [$second value] $then [] [] $($items)*)
    };
    ($first:tt , $second:tt ; $($items:tt)*) => {
        $crate::__for_each_munch!([$first key] [$second value] () [] [] $($items)*)
    };
}

#[cfg(test)]
mod tests;
