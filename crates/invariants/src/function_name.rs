//! crates/invariants/src/function_name.rs

/// Name of the marker item [`function_name!`](crate::function_name) declares.
const MARKER: &str = "::__function_name_marker";
const CLOSURE: &str = "::{{closure}}";

/// Turns the type name of the marker item into the path of the function
/// that declared it.
///
/// Closure segments are removed, so a check inside a closure reports the
/// function the closure was written in.
#[doc(hidden)]
#[must_use]
pub fn enclosing_function(marker_path: &'static str) -> &'static str {
    let mut path = marker_path.strip_suffix(MARKER).unwrap_or(marker_path);
    while let Some(outer) = path.strip_suffix(CLOSURE) {
        path = outer;
    }
    path
}
