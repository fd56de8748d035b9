//! The `chain!` macro for eager, left-to-right transformer application.
//!
//! This module provides the [`chain!`] macro which runs a source through a
//! series of transformers, whole batch at a time.

/// Runs a source through a series of transformers from left to right.
///
/// `chain!(source, t1, t2, t3)` normalizes `source` into a sequence (absent
/// becomes `[]`, a scalar becomes `[value]`) and then computes
/// `t3(t2(t1(batch)))`.
///
/// Unlike [`Curry`](crate::compose::Curry), the transformers need not share
/// an element type: each step may change it, so a strict step such as
/// [`fold_left`](crate::combinator::fold_left) can sit in the middle of the
/// chain.
///
/// # Relationship with the pipeline
///
/// Every transformer here sees the *whole* output batch of the previous one.
/// A [`Pipeline`](crate::pipeline::Pipeline) instead pulls one source element
/// at a time through its lazy steps.
///
/// # Syntax
///
/// - `chain!(source)` - Returns the normalized sequence
/// - `chain!(source, t1)` - Returns `t1(source)`
/// - `chain!(source, t1, t2, ...)` - Returns `...t2(t1(source))`
///
/// # Examples
///
/// ## Basic chain
///
/// ```
/// use lazyseq::chain;
/// use lazyseq::combinator::{filter, map};
///
/// let result = chain!(
///     vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0],
///     map(|x: i32| x + 1),
///     filter(|x: &i32| x % 2 == 0),
/// );
/// assert_eq!(result, vec![2, 4, 6, 8, 10]);
/// ```
///
/// ## Strict step in the middle
///
/// ```
/// use lazyseq::chain;
/// use lazyseq::combinator::{filter, fold_left, map, unmonad};
///
/// fn add_each(batch: Vec<i32>, amount: &i32) -> Vec<i32> {
///     batch.into_iter().map(|x| x + amount).collect()
/// }
///
/// // 2, 4, 6, 8, 10 -> 5, 7, 9, 11, 13 -> 45 -> 15.0
/// let result = chain!(
///     vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0],
///     map(|x: i32| x + 1),
///     filter(|x: &i32| x % 2 == 0),
///     unmonad(add_each, 3),
///     fold_left(0, |total, x: i32, _| total + x),
///     map(|total: i32| f64::from(total) / 3.0),
/// );
/// assert_eq!(result, vec![15.0]);
/// ```
///
/// ## Scalar source
///
/// ```
/// use lazyseq::chain;
/// use lazyseq::combinator::map;
/// use lazyseq::source::Input;
///
/// let result = chain!(Input::scalar("hello"), map(|text: &str| text.len()));
/// assert_eq!(result, vec![5]);
/// ```
#[macro_export]
macro_rules! chain {
    // Source only: return the normalized sequence
    ($source:expr $(,)?) => {
        $crate::source::Input::from($source).into_sequence()
    };

    // One or more transformers: apply left to right
    ($source:expr, $($transformer:expr),+ $(,)?) => {{
        let batch = $crate::source::Input::from($source).into_sequence();
        $(
            let batch = $crate::combinator::Transformer::apply(&$transformer, batch);
        )+
        batch
    }};
}
