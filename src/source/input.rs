//! The shape of a value handed to a pipeline or composition.

use crate::error::ShapeError;

/// A value of unconstrained shape: absent, a bare scalar, or a sequence.
///
/// `Input` is the only place in the crate where the shape of a value is
/// inspected. Everything downstream works on the canonical `Vec<T>`.
///
/// A scalar is never special-cased: `Input::scalar(Vec::<i32>::new())` is a
/// one-element input whose only element happens to be empty.
///
/// # Serialization
///
/// With the `serde` feature, `null` maps to `Absent`, an array to
/// `Sequence`, and anything else to `Scalar`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::source::Input;
///
/// assert_eq!(Input::from(vec![1, 2, 3]).into_sequence(), vec![1, 2, 3]);
/// assert_eq!(Input::scalar(7).into_sequence(), vec![7]);
/// assert_eq!(Input::<i32>::absent().into_sequence(), Vec::<i32>::new());
/// assert_eq!(Input::from(None::<i32>), Input::Absent);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Input<T> {
    /// No input was supplied.
    Absent,
    /// An ordered sequence, iterated in its original order.
    Sequence(Vec<T>),
    /// A single value.
    Scalar(T),
}

impl<T> Input<T> {
    /// Creates an absent input.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Creates a scalar input.
    #[inline]
    pub const fn scalar(value: T) -> Self {
        Self::Scalar(value)
    }

    /// Creates a sequence input.
    #[inline]
    pub const fn sequence(elements: Vec<T>) -> Self {
        Self::Sequence(elements)
    }

    /// Returns the name of this shape, as used in [`ShapeError`] messages.
    #[inline]
    pub const fn shape_name(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Sequence(_) => "sequence",
            Self::Scalar(_) => "scalar",
        }
    }

    /// Returns `true` if no input was supplied.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the number of elements this input stands for.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Sequence(elements) => elements.len(),
            Self::Scalar(_) => 1,
        }
    }

    /// Returns `true` if this input stands for no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coerces this input into an ordered sequence.
    ///
    /// Never fails: absent becomes `[]` and a scalar becomes `[value]`.
    pub fn into_sequence(self) -> Vec<T> {
        match self {
            Self::Absent => Vec::new(),
            Self::Sequence(elements) => elements,
            Self::Scalar(value) => vec![value],
        }
    }

    /// Returns the sequence if this input is one, and fails otherwise.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] naming `operation` when the input is absent
    /// or a scalar.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::source::Input;
    ///
    /// assert_eq!(Input::from(vec![1]).require_sequence("load"), Ok(vec![1]));
    ///
    /// let error = Input::scalar(1).require_sequence("load").unwrap_err();
    /// assert_eq!(error.found, "scalar");
    /// ```
    pub fn require_sequence(self, operation: &'static str) -> Result<Vec<T>, ShapeError> {
        match self {
            Self::Sequence(elements) => Ok(elements),
            other => Err(ShapeError {
                operation,
                expected: "sequence",
                found: other.shape_name(),
            }),
        }
    }
}

impl<T> Default for Input<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Vec<T>> for Input<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::Sequence(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Input<T> {
    fn from(elements: [T; N]) -> Self {
        Self::Sequence(Vec::from(elements))
    }
}

/// Copies the slice; the caller's data is left untouched.
impl<T: Clone> From<&[T]> for Input<T> {
    fn from(elements: &[T]) -> Self {
        Self::Sequence(elements.to_vec())
    }
}

impl<T> From<Option<T>> for Input<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Scalar)
    }
}

impl<T> FromIterator<T> for Input<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::Sequence(iterable.into_iter().collect())
    }
}
