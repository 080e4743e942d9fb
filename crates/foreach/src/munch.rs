//! crates/foreach/src/munch.rs
//! Token muncher shared by `for_each!` and `for_each2!`.
//!
//! State layout, in order:
//!
//! - `[op tag]` slot applied to the next item;
//! - `[op tag]` slot applied to the item after it (the two rotate after every
//!   closed item, which is what alternates operations in paired mode);
//! - the continuation (`()` for a tuple, a macro name, or `[path]`);
//! - `[...]` applications emitted so far;
//! - `[...]` tokens of the item currently being collected;
//! - the unconsumed input.
//!
//! Slot tags are `any` (uniform mode), `key` or `value` (paired mode). Running
//! out of input while the `value` slot is next means the last key is missing
//! its value.
//!
//! Each recursion step closes as much input as it can: four single-token
//! items, one `key, expression` pair, or one whole expression.
//! Only items that are neither a single token nor an expression fall back to
//! collection one token per step.

#[doc(hidden)]
#[macro_export]
macro_rules! __for_each_munch {
    // End of input closes a pending multi-token item.
    ([$op:tt $tag:ident] $next:tt $then:tt [$($acc:tt)*] [$($item:tt)+]) => {
        $crate::__for_each_munch!(
            $next [$op $tag] $then
            [$($acc)* $crate::__for_each_call!($op ($($item)+)),]
            []
        )
    };
    ([$op:tt value] $next:tt $then:tt [$($acc:tt)*] []) => {
        ::core::compile_error!(
            "for_each2! needs an even number of arguments: the last key has no value"
        )
    };
    ($slot:tt $next:tt $then:tt [$($acc:tt)*] []) => {
        $crate::__for_each_call!($then ($($acc)*))
    };
    ($slot:tt $next:tt $then:tt [$($acc:tt)*] [] , $($rest:tt)*) => {
        ::core::compile_error!("empty argument in variadic expansion list")
    };
    // Empty items inside the next four-item window.
    ($slot:tt $next:tt $then:tt [$($acc:tt)*] [] $a:tt , , $($rest:tt)*) => {
        ::core::compile_error!("empty argument in variadic expansion list")
    };
    ($slot:tt $next:tt $then:tt [$($acc:tt)*] [] $a:tt , $b:tt , , $($rest:tt)*) => {
        ::core::compile_error!("empty argument in variadic expansion list")
    };
    ($slot:tt $next:tt $then:tt [$($acc:tt)*] [] $a:tt , $b:tt , $c:tt , , $($rest:tt)*) => {
        ::core::compile_error!("empty argument in variadic expansion list")
    };
    // Four single-token items. An even count leaves the slots in place.
    (
        [$op:tt $tag:ident] [$op2:tt $tag2:ident] $then:tt [$($acc:tt)*] []
        $a:tt , $b:tt , $c:tt , $d:tt , $($rest:tt)*
    ) => {
        $crate::__for_each_munch!(
            [$op $tag] [$op2 $tag2] $then
            [
                $($acc)*
                $crate::__for_each_call!($op ($a)),
                $crate::__for_each_call!($op2 ($b)),
                $crate::__for_each_call!($op ($c)),
                $crate::__for_each_call!($op2 ($d)),
            ]
            []
            $($rest)*
        )
    };
    // A pair whose key is a single token and whose value is an expression.
    (
        [$op:tt key] [$op2:tt value] $then:tt [$($acc:tt)*] []
        $key:tt , $value:expr $(, $($rest:tt)*)?
    ) => {
        $crate::__for_each_munch!(
            [$op key] [$op2 value] $then
            [
                $($acc)*
                $crate::__for_each_call!($op ($key)),
                $crate::__for_each_call!($op2 ($value)),
            ]
            []
            $($($rest)*)?
        )
    };
    // Single-token item.
    ([$op:tt $tag:ident] $next:tt $then:tt [$($acc:tt)*] [] $item:tt $(, $($rest:tt)*)?) => {
        $crate::__for_each_munch!(
            $next [$op $tag] $then
            [$($acc)* $crate::__for_each_call!($op ($item)),]
            []
            $($($rest)*)?
        )
    };
    // Whole expression.
    ([$op:tt $tag:ident] $next:tt $then:tt [$($acc:tt)*] [] $item:expr $(, $($rest:tt)*)?) => {
        $crate::__for_each_munch!(
            $next [$op $tag] $then
            [$($acc)* $crate::__for_each_call!($op ($item)),]
            []
            $($($rest)*)?
        )
    };
    ([$op:tt $tag:ident] $next:tt $then:tt [$($acc:tt)*] [$($item:tt)+] , $($rest:tt)*) => {
        $crate::__for_each_munch!(
            $next [$op $tag] $then
            [$($acc)* $crate::__for_each_call!($op ($($item)+)),]
            []
            $($rest)*
        )
    };
    ($slot:tt $next:tt $then:tt [$($acc:tt)*] [$($item:tt)*] $token:tt $($rest:tt)*) => {
        $crate::__for_each_munch!($slot $next $then [$($acc)*] [$($item)* $token] $($rest)*)
    };
}

/// Invokes an operation or continuation on a parenthesised argument list.
#[doc(hidden)]
#[macro_export]
macro_rules! __for_each_call {
    (() ($($args:tt)*)) => {
        ($($args)*)
    };
    ([$($path:tt)+] ($($args:tt)*)) => {
        $($path)+!($($args)*)
    };
    ($name:ident ($($args:tt)*)) => {
        $name!($($args)*)
    };
}
