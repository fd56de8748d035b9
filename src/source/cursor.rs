//! Forward-only cursor over a normalized input.

use std::fmt;
use std::iter::FusedIterator;

use super::Input;

/// A position into a finite ordered sequence.
///
/// The cursor only ever moves forward. Once [`advance`](Self::advance) has
/// returned `None` it keeps returning `None`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::source::{Input, SourceCursor};
///
/// let mut cursor = SourceCursor::new(Input::scalar("only"));
/// assert_eq!(cursor.remaining(), 1);
/// assert_eq!(cursor.advance(), Some("only"));
/// assert!(!cursor.has_more());
/// ```
pub struct SourceCursor<T> {
    elements: std::vec::IntoIter<T>,
}

impl<T> SourceCursor<T> {
    /// Wraps any input into a cursor.
    ///
    /// Absent input yields an empty cursor, a scalar yields a cursor over one
    /// element, and a sequence is iterated in its original order.
    pub fn new(input: impl Into<Input<T>>) -> Self {
        Self {
            elements: input.into().into_sequence().into_iter(),
        }
    }

    /// Returns `true` while unpulled elements remain.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.elements.len() > 0
    }

    /// Takes the next element, or `None` once the source is exhausted.
    #[inline]
    pub fn advance(&mut self) -> Option<T> {
        self.elements.next()
    }

    /// Returns the number of elements not yet pulled.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Iterator for SourceCursor<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.advance()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> ExactSizeIterator for SourceCursor<T> {}

impl<T> FusedIterator for SourceCursor<T> {}

impl<T: fmt::Debug> fmt::Debug for SourceCursor<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SourceCursor")
            .field("remaining", &self.elements.as_slice())
            .finish()
    }
}
