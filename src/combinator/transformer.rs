//! The `Transformer` type: a function from one ordered batch to another.

use std::fmt;

/// A function from an ordered batch of inputs to an ordered batch of outputs.
///
/// Every combinator in this crate produces a `Transformer`. A transformer
/// may return fewer, the same number of, or more elements than it received,
/// and must keep the relative order of whatever it emits.
///
/// # Type Parameters
///
/// * `A` - The element type of the incoming batch
/// * `B` - The element type of the outgoing batch (defaults to `A`)
///
/// # Examples
///
/// ```rust
/// use lazyseq::combinator::Transformer;
///
/// let duplicate = Transformer::new(|batch: Vec<i32>| {
///     batch.into_iter().flat_map(|x| [x, x]).collect()
/// });
/// assert_eq!(duplicate.apply(vec![1, 2]), vec![1, 1, 2, 2]);
/// ```
pub struct Transformer<A, B = A> {
    function: Box<dyn Fn(Vec<A>) -> Vec<B>>,
}

impl<A, B> Transformer<A, B> {
    /// Creates a transformer from a batch function.
    #[inline]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(Vec<A>) -> Vec<B> + 'static,
    {
        Self {
            function: Box::new(function),
        }
    }

    /// Runs the transformer over one batch.
    #[inline]
    pub fn apply(&self, batch: Vec<A>) -> Vec<B> {
        (self.function)(batch)
    }

    /// Composes `self` with `next`, running `self` first.
    ///
    /// `next` receives the whole output batch of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::combinator::{filter, map};
    ///
    /// let composed = map(|x: i32| x + 1).then(filter(|x: &i32| x % 2 == 0));
    /// assert_eq!(composed.apply(vec![1, 2, 3]), vec![2, 4]);
    /// ```
    pub fn then<C>(self, next: Transformer<B, C>) -> Transformer<A, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        Transformer::new(move |batch| next.apply(self.apply(batch)))
    }
}

impl<A: 'static> Transformer<A> {
    /// The identity transformer; returns every batch unchanged.
    ///
    /// This is what an empty composition collapses to.
    #[inline]
    pub fn identity() -> Self {
        Self::new(|batch| batch)
    }
}

impl<A: 'static> Default for Transformer<A> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<A, B> fmt::Debug for Transformer<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Transformer").field(&"<function>").finish()
    }
}
