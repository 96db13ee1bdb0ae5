//! Macros for ergonomic duck tree construction.

/// Build a duck tree from a nested literal.
///
/// Leaves are any expression convertible into a [`RawNode`](crate::core::RawNode)
/// (usually a [`Duck`](crate::core::Duck)); `{ ... }` opens a nested group.
/// Expands to a [`DuckTreeBuilder`](crate::builder::DuckTreeBuilder) chain and
/// evaluates to `Result<DuckTree, ConfigurationError>`.
///
/// # Example
///
/// ```
/// use ducktree::{create_duck, duck_tree, flatten};
///
/// let tree = duck_tree! {
///     reset: create_duck("RESET", |_: i64, _: i64| 0),
///     counter: {
///         add: create_duck("ADD", |s: i64, p: i64| s + p),
///         sub: create_duck("SUB", |s: i64, p: i64| s - p),
///     },
/// }
/// .unwrap();
///
/// let keys: Vec<String> = flatten(&tree).unwrap().into_keys().collect();
/// assert_eq!(keys, vec!["reset", "counter_add", "counter_sub"]);
/// ```
#[macro_export]
macro_rules! duck_tree {
    ($($body:tt)*) => {
        $crate::__duck_tree_entries!(
            @entries ($crate::builder::DuckTreeBuilder::new()) $($body)*
        )
        .build()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __duck_tree_entries {
    (@entries ($builder:expr)) => {
        $builder
    };

    (@entries ($builder:expr) $key:ident : { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $crate::__duck_tree_entries!(
            @entries ($builder.branch(
                stringify!($key),
                $crate::__duck_tree_entries!(
                    @entries ($crate::builder::DuckTreeBuilder::new()) $($inner)*
                ),
            ))
            $($($rest)*)?
        )
    };

    (@entries ($builder:expr) $key:ident : $leaf:expr $(, $($rest:tt)*)?) => {
        $crate::__duck_tree_entries!(
            @entries ($builder.node(stringify!($key), ::std::convert::Into::into($leaf)))
            $($($rest)*)?
        )
    };
}
