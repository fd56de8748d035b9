//! FIFO queue of pending lazy transformers.

use std::fmt;

use smallvec::SmallVec;

use crate::combinator::Transformer;
use crate::compose::{Curry, Invocation};

/// Number of transformers stored inline before spilling to the heap.
const INLINE_CAPACITY: usize = 4;

/// Lazy transformers waiting for a terminal pull.
///
/// Transformers run in insertion order: the first one pushed is applied
/// first. An empty queue composes to the identity transformer.
///
/// # Note
///
/// This type does NOT implement `Clone`. Each queue has exactly one owner,
/// the [`Pipeline`](super::Pipeline) it belongs to.
pub struct TransformerQueue<T> {
    transformers: SmallVec<[Transformer<T>; INLINE_CAPACITY]>,
}

impl<T: 'static> TransformerQueue<T> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            transformers: SmallVec::new(),
        }
    }

    /// Adds a transformer to the end of the queue.
    #[inline]
    pub fn push(&mut self, transformer: Transformer<T>) {
        self.transformers.push(transformer);
    }

    /// Empties the queue and composes its contents into one transformer.
    pub fn compose(&mut self) -> Transformer<T> {
        Curry::new(Invocation::Spread, self.transformers.drain(..)).into_transformer()
    }
}

impl<T> TransformerQueue<T> {
    /// Returns the number of pending transformers.
    #[inline]
    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    /// Returns `true` if no transformer is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }
}

impl<T: 'static> Default for TransformerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TransformerQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TransformerQueue")
            .field("queued", &self.transformers.len())
            .finish()
    }
}
