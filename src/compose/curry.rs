//! Eager composition of homogeneous transformer lists.

use std::fmt;

use crate::combinator::Transformer;
use crate::error::ShapeError;
use crate::source::Input;

/// How the starting value is handed to the first transformer of a [`Curry`].
///
/// Between steps the running value is always a `Vec<T>`, so the modes only
/// differ at the entry point. All three agree when the starting value is a
/// plain sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Invocation {
    /// Spreads a sequence and wraps anything else: absent becomes `[]`, a
    /// scalar becomes `[value]`.
    #[default]
    Spread,
    /// Hands a single value over as it is: a scalar becomes `[value]`, a
    /// sequence is passed through. Absent input is rejected.
    Raw,
    /// Requires an argument sequence. Absent and scalar input are rejected.
    Apply,
}

impl Invocation {
    /// Returns the operation name used in error messages and logs.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spread => "curry",
            Self::Raw => "curry_call",
            Self::Apply => "curry_apply",
        }
    }

    /// Turns a starting value into the first batch.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] when the value's shape is not accepted by
    /// this mode.
    pub fn prepare<T>(self, source: Input<T>) -> Result<Vec<T>, ShapeError> {
        match (self, source) {
            (Self::Spread, source) => Ok(source.into_sequence()),
            (Self::Raw, Input::Absent) => Err(ShapeError {
                operation: self.name(),
                expected: "value",
                found: "absent",
            }),
            (Self::Raw, source) => Ok(source.into_sequence()),
            (Self::Apply, source) => source.require_sequence(self.name()),
        }
    }
}

/// An ordered list of transformers applied one after another.
///
/// Given `[t1, t2, ..., tn]` and a starting value `v`, [`call`](Self::call)
/// computes `tn(...(t2(t1(v))))`. Each transformer consumes the whole output
/// batch of the previous one.
///
/// # Examples
///
/// ```rust
/// use lazyseq::combinator::{filter, map};
/// use lazyseq::compose::curry;
/// use lazyseq::source::Input;
///
/// let composed = curry([map(|x: i32| x * 10), filter(|x: &i32| *x > 15)]);
/// assert_eq!(composed.call(vec![1, 2, 3]), Ok(vec![20, 30]));
/// assert_eq!(composed.call(Input::scalar(5)), Ok(vec![50]));
/// ```
pub struct Curry<T> {
    transformers: Vec<Transformer<T>>,
    invocation: Invocation,
}

impl<T: 'static> Curry<T> {
    /// Creates a composition with the given invocation mode.
    pub fn new(
        invocation: Invocation,
        transformers: impl IntoIterator<Item = Transformer<T>>,
    ) -> Self {
        Self {
            transformers: transformers.into_iter().collect(),
            invocation,
        }
    }

    /// Appends a transformer to the end of the list.
    #[must_use]
    pub fn push(mut self, transformer: Transformer<T>) -> Self {
        self.transformers.push(transformer);
        self
    }

    /// Returns the number of transformers.
    #[inline]
    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    /// Returns `true` if no transformer has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Returns the invocation mode.
    #[inline]
    pub const fn invocation(&self) -> Invocation {
        self.invocation
    }

    /// Applies every transformer in order to `source`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if `source` does not have a shape the
    /// invocation mode accepts.
    pub fn call(&self, source: impl Into<Input<T>>) -> Result<Vec<T>, ShapeError> {
        let batch = self.invocation.prepare(source.into())?;
        tracing::trace!(
            invocation = self.invocation.name(),
            steps = self.transformers.len(),
            "running composition"
        );
        Ok(self
            .transformers
            .iter()
            .fold(batch, |running, transformer| transformer.apply(running)))
    }

    /// Collapses the list into a single transformer.
    ///
    /// An empty list collapses into [`Transformer::identity`].
    pub fn into_transformer(self) -> Transformer<T> {
        if self.transformers.is_empty() {
            return Transformer::identity();
        }
        let transformers = self.transformers;
        Transformer::new(move |batch| {
            transformers
                .iter()
                .fold(batch, |running, transformer| transformer.apply(running))
        })
    }
}

impl<T: 'static> From<Curry<T>> for Transformer<T> {
    fn from(curry: Curry<T>) -> Self {
        curry.into_transformer()
    }
}

impl<T> fmt::Debug for Curry<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curry")
            .field("invocation", &self.invocation)
            .field("steps", &self.transformers.len())
            .finish()
    }
}

/// Composes `transformers`, spreading the starting value.
///
/// See [`Invocation::Spread`].
pub fn curry<T: 'static>(transformers: impl IntoIterator<Item = Transformer<T>>) -> Curry<T> {
    Curry::new(Invocation::Spread, transformers)
}

/// Composes `transformers`, handing the starting value over raw.
///
/// See [`Invocation::Raw`].
///
/// # Examples
///
/// ```rust
/// use lazyseq::combinator::map;
/// use lazyseq::compose::curry_call;
/// use lazyseq::source::Input;
///
/// let composed = curry_call([map(|x: i32| -x)]);
/// assert_eq!(composed.call(Input::scalar(3)), Ok(vec![-3]));
/// assert!(composed.call(Input::absent()).is_err());
/// ```
pub fn curry_call<T: 'static>(
    transformers: impl IntoIterator<Item = Transformer<T>>,
) -> Curry<T> {
    Curry::new(Invocation::Raw, transformers)
}

/// Composes `transformers`, requiring the starting value to be a sequence.
///
/// See [`Invocation::Apply`].
///
/// # Examples
///
/// ```rust
/// use lazyseq::combinator::map;
/// use lazyseq::compose::curry_apply;
/// use lazyseq::source::Input;
///
/// let composed = curry_apply([map(|x: i32| x + 1)]);
/// assert_eq!(composed.call(vec![1, 2]), Ok(vec![2, 3]));
///
/// let error = composed.call(Input::scalar(1)).unwrap_err();
/// assert_eq!(error.to_string(), "curry_apply: expected sequence, found scalar");
/// ```
pub fn curry_apply<T: 'static>(
    transformers: impl IntoIterator<Item = Transformer<T>>,
) -> Curry<T> {
    Curry::new(Invocation::Apply, transformers)
}
