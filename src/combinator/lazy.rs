//! Lazy combinators: `map`, `filter` and `unmonad`.
//!
//! A lazy combinator looks at each element of its batch independently, so a
//! [`Pipeline`](crate::pipeline::Pipeline) can run it one pulled element at
//! a time.

use super::Transformer;

/// Applies `function` to every element, emitting exactly one output per input.
///
/// # Examples
///
/// ```rust
/// use lazyseq::combinator::map;
///
/// let to_length = map(|text: &str| text.len());
/// assert_eq!(to_length.apply(vec!["a", "abc"]), vec![1, 3]);
/// ```
pub fn map<T, U, F>(function: F) -> Transformer<T, U>
where
    F: Fn(T) -> U + 'static,
{
    Transformer::new(move |batch: Vec<T>| batch.into_iter().map(&function).collect())
}

/// Keeps the elements for which `predicate` returns `true`, unchanged.
///
/// # Examples
///
/// ```rust
/// use lazyseq::combinator::filter;
///
/// let evens = filter(|x: &i32| x % 2 == 0);
/// assert_eq!(evens.apply(vec![1, 2, 3, 4]), vec![2, 4]);
/// ```
#[doc(alias = "sieve")]
pub fn filter<T, P>(predicate: P) -> Transformer<T>
where
    P: Fn(&T) -> bool + 'static,
{
    Transformer::new(move |batch: Vec<T>| {
        batch
            .into_iter()
            .filter(|element| predicate(element))
            .collect()
    })
}

/// Embeds a batch-producing host function as a transformer.
///
/// The host function receives the whole incoming batch as its receiver and a
/// reference to `arguments`, which are fixed when the transformer is built.
/// Whatever it returns becomes the output batch, so one element may expand
/// into many.
///
/// # Examples
///
/// ```rust
/// use lazyseq::combinator::unmonad;
///
/// fn repeat_each(batch: Vec<char>, times: &usize) -> Vec<char> {
///     batch
///         .into_iter()
///         .flat_map(|c| std::iter::repeat_n(c, *times))
///         .collect()
/// }
///
/// let triple = unmonad(repeat_each, 3);
/// assert_eq!(triple.apply(vec!['a', 'b']), vec!['a', 'a', 'a', 'b', 'b', 'b']);
/// ```
pub fn unmonad<T, U, A, F>(function: F, arguments: A) -> Transformer<T, U>
where
    F: Fn(Vec<T>, &A) -> Vec<U> + 'static,
    A: 'static,
{
    Transformer::new(move |batch| function(batch, &arguments))
}
