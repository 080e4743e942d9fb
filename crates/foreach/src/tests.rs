macro_rules! one {
    ($($item:tt)*) => {
        1usize
    };
}

macro_rules! sum {
    ($($term:expr,)*) => {
        0usize $(+ $term)*
    };
}

macro_rules! same {
    ($value:expr) => {
        $value
    };
}

macro_rules! negate {
    ($value:expr) => {
        -$value
    };
}

macro_rules! pairs {
    ($($key:expr, $value:expr,)*) => {
        [$(($key, $value)),*]
    };
}

pub(crate) use negate;

#[test]
fn empty_list_expands_to_unit() {
    let () = crate::for_each!(stringify;);
}

#[test]
fn empty_list_with_continuation_passes_no_arguments() {
    assert_eq!(crate::for_each!(one => sum;), 0);
    const EMPTY: &str = crate::for_each!(stringify => concat;);
    assert_eq!(EMPTY, "");
}

#[test]
fn single_item_is_applied_once() {
    let expanded = crate::for_each!(stringify; only);
    assert_eq!(expanded, ("only",));
}

#[test]
fn items_keep_their_order() {
    let expanded = crate::for_each!(stringify; first, second, third);
    assert_eq!(expanded, ("first", "second", "third"));
}

#[test]
fn trailing_comma_is_accepted() {
    assert_eq!(crate::for_each!(one => sum; a, b, c,), 3);
}

#[test]
fn multi_token_items_are_split_on_top_level_commas_only() {
    let values = [4, 5, 6];
    let total = crate::for_each!(same => sum; 1 + 2, values.len(), [7, 8].len(), values[2]);
    assert_eq!(total, 3 + 3 + 2 + 6);
}

#[test]
fn bracketed_path_operations_are_invoked() {
    let expanded = crate::for_each!([crate::tests::negate]; 1, 2 + 3);
    assert_eq!(expanded, (-1, -5));
}

#[test]
fn paired_single_pair_terminates_after_one_application_each() {
    let expanded = crate::for_each2!(stringify, same; answer, 42);
    assert_eq!(expanded, ("answer", 42));
}

#[test]
fn paired_operations_alternate() {
    let fields = crate::for_each2!(stringify, same => pairs; a, 1, b, 2, c, 3);
    assert_eq!(fields, [("a", 1), ("b", 2), ("c", 3)]);
}

#[test]
fn paired_empty_list_expands_to_unit() {
    let () = crate::for_each2!(stringify, same;);
}
