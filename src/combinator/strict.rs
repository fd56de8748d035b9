//! Strict combinators: `accumulate`, `rebox` and `fold_left`.
//!
//! A strict combinator needs the whole remaining sequence before it can
//! produce anything. Inside a [`Pipeline`](crate::pipeline::Pipeline) it
//! forces full materialization first.

use super::Transformer;

/// Builds the raw left fold over a batch.
///
/// `function` is called as `function(accumulator, element, index)`, in the
/// original order, where `index` is the 0-based position inside the batch
/// handed to the fold. The returned function yields the last accumulator as
/// a bare value; see [`fold_left`] for the transformer form.
///
/// # Examples
///
/// ```rust
/// use lazyseq::combinator::accumulate;
///
/// let sum = accumulate(0, |total, x: i32, _| total + x);
/// assert_eq!(sum(vec![1, 2, 3, 4]), 10);
///
/// let weighted = accumulate(0, |total, x: i32, index| total + x * index as i32);
/// assert_eq!(weighted(vec![5, 5, 5]), 15);
/// ```
pub fn accumulate<T, A, F>(seed: A, function: F) -> impl Fn(Vec<T>) -> A
where
    A: Clone,
    F: Fn(A, T, usize) -> A,
{
    move |batch| {
        batch
            .into_iter()
            .enumerate()
            .fold(seed.clone(), |accumulator, (index, element)| {
                function(accumulator, element, index)
            })
    }
}

/// Lifts a scalar-producing batch function into a transformer.
///
/// The result is emitted as a one-element batch, so a strict operator can
/// feed further chaining.
///
/// # Examples
///
/// ```rust
/// use lazyseq::combinator::rebox;
///
/// let count = rebox(|batch: Vec<char>| batch.len());
/// assert_eq!(count.apply(vec!['a', 'b', 'c']), vec![3]);
/// ```
pub fn rebox<T, U, F>(function: F) -> Transformer<T, U>
where
    F: Fn(Vec<T>) -> U + 'static,
{
    Transformer::new(move |batch| vec![function(batch)])
}

/// Folds the whole batch from the left into a one-element batch.
///
/// Equivalent to `rebox(accumulate(seed, function))`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::combinator::fold_left;
///
/// let sum = fold_left(0, |total, x: i32, _| total + x);
/// assert_eq!(sum.apply(vec![1, 2, 3, 4]), vec![10]);
/// assert_eq!(sum.apply(vec![]), vec![0]);
/// ```
pub fn fold_left<T, A, F>(seed: A, function: F) -> Transformer<T, A>
where
    T: 'static,
    A: Clone + 'static,
    F: Fn(A, T, usize) -> A + 'static,
{
    rebox(accumulate(seed, function))
}
