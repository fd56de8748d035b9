//! The single-use lazy pipeline.

use std::fmt;

use super::TransformerQueue;
use crate::combinator::{Transformer, accumulate, filter, map, unmonad};
use crate::error::{AlreadyConsumedError, PipelineError};
use crate::source::{Input, SourceCursor};

/// The capacity `take_all` pulls with.
pub const UNBOUNDED: usize = usize::MAX;

/// The internal state of a [`Pipeline`].
///
/// A pipeline starts `Open` and moves to `Consumed` the moment a terminal
/// pull starts. There is no way back.
#[derive(Debug)]
pub enum PipelineState<S, T = S> {
    /// Chaining calls are accepted.
    Open {
        /// The source elements not yet pulled.
        cursor: SourceCursor<S>,
        /// Steps already fused by a type change, from `S` to `T`.
        stem: Transformer<S, T>,
        /// Number of steps fused into `stem`.
        fused: usize,
        /// The lazy transformers not yet run.
        queue: TransformerQueue<T>,
    },
    /// A terminal pull has run. Every further call fails.
    Consumed,
}

/// A single-use, dot-chainable pipeline with deferred evaluation.
///
/// `S` is the element type of the source and `T` the element type the
/// pipeline currently produces. They start out equal.
///
/// Lazy calls ([`map`](Self::map), [`filter`](Self::filter),
/// [`unmonad`](Self::unmonad), [`then`](Self::then)) only enqueue a
/// transformer. A terminal call ([`take`](Self::take),
/// [`take_all`](Self::take_all), or a strict operator) pulls source elements
/// one at a time through the queued transformers and collects the outputs.
///
/// After a terminal call the pipeline is consumed: its cursor and queue are
/// dropped, and every later method call returns
/// [`PipelineError::AlreadyConsumed`]. Strict operators with a `_wrap`
/// suffix (and [`seq`](Self::seq)) return a *new* pipeline over their
/// result.
///
/// The `_into` variants of the lazy calls change the element type without
/// evaluating anything. They move the cursor and queue into a new pipeline
/// over the same source, leaving the old handle consumed.
///
/// # Thread Safety
///
/// `Pipeline` is neither `Send` nor `Sync`. It is meant to be built and
/// drained by a single owner.
///
/// # Examples
///
/// ```rust
/// use lazyseq::pipeline::Pipeline;
///
/// # fn main() -> Result<(), lazyseq::error::PipelineError> {
/// let mut pipeline = Pipeline::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
/// pipeline
///     .map(|x| x + 1)?
///     .filter(|x| x % 2 == 0)?
///     .map(|x| x * 2)?;
///
/// assert_eq!(pipeline.take(3)?, vec![4, 8, 12]);
/// assert!(pipeline.take(3).is_err());
/// # Ok(())
/// # }
/// ```
///
/// ## Bounded pulls never over-produce
///
/// ```rust
/// use lazyseq::pipeline::Pipeline;
///
/// # fn main() -> Result<(), lazyseq::error::PipelineError> {
/// fn repeat_three(batch: Vec<char>, (): &()) -> Vec<char> {
///     batch.into_iter().flat_map(|c| [c, c, c]).collect()
/// }
///
/// let result = Pipeline::new(vec!['a', 'b'])
///     .unmonad(repeat_three, ())?
///     .take(4)?;
/// assert_eq!(result, vec!['a', 'a', 'a', 'b']);
/// # Ok(())
/// # }
/// ```
///
/// ## Changing the element type lazily
///
/// ```rust
/// use lazyseq::pipeline::Pipeline;
///
/// # fn main() -> Result<(), lazyseq::error::PipelineError> {
/// let mut words = Pipeline::new(vec!["lazy", "sequence", "pipeline"]);
/// let lengths = words
///     .filter(|word| word.starts_with('s') || word.starts_with('p'))?
///     .map_into(str::len)?
///     .take(1)?;
/// assert_eq!(lengths, vec![8]);
/// assert!(words.is_consumed());
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<S, T = S> {
    state: PipelineState<S, T>,
}

static_assertions::assert_not_impl_any!(Pipeline<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Pipeline<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Pipeline<i32, String>: Send, Sync);

impl<T: 'static> Pipeline<T> {
    /// Creates an open pipeline over `source`.
    ///
    /// Absent input gives an empty pipeline, a scalar gives a one-element
    /// pipeline, and a sequence is pulled in its original order.
    pub fn new(source: impl Into<Input<T>>) -> Self {
        Self {
            state: PipelineState::Open {
                cursor: SourceCursor::new(source),
                stem: Transformer::identity(),
                fused: 0,
                queue: TransformerQueue::new(),
            },
        }
    }
}

impl<S: 'static, T: 'static> Pipeline<S, T> {
    /// Returns the current state.
    #[inline]
    pub const fn state(&self) -> &PipelineState<S, T> {
        &self.state
    }

    /// Returns `true` once a terminal pull has run.
    #[inline]
    pub const fn is_consumed(&self) -> bool {
        matches!(self.state, PipelineState::Consumed)
    }

    /// Returns the number of lazy transformers waiting to run.
    ///
    /// Steps fused by a type change are counted too. A consumed pipeline
    /// reports `0`.
    pub fn queued(&self) -> usize {
        match &self.state {
            PipelineState::Open { fused, queue, .. } => fused + queue.len(),
            PipelineState::Consumed => 0,
        }
    }

    /// Returns the number of source elements not yet pulled.
    ///
    /// A consumed pipeline reports `0`.
    pub fn remaining(&self) -> usize {
        match &self.state {
            PipelineState::Open { cursor, .. } => cursor.remaining(),
            PipelineState::Consumed => 0,
        }
    }

    // =========================================================================
    // Lazy operators
    // =========================================================================

    /// Enqueues a mapping step.
    ///
    /// See [`map_into`](Self::map_into) for a step that changes the element
    /// type.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    pub fn map<F>(&mut self, function: F) -> Result<&mut Self, PipelineError>
    where
        F: Fn(T) -> T + 'static,
    {
        self.enqueue("map", map(function))
    }

    /// Enqueues a filtering step; elements failing `predicate` are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    #[doc(alias = "sieve")]
    pub fn filter<P>(&mut self, predicate: P) -> Result<&mut Self, PipelineError>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.enqueue("filter", filter(predicate))
    }

    /// Enqueues a host batch function with fixed `arguments`.
    ///
    /// For each pulled element, `function` receives the batch that element
    /// has become so far and may return any number of outputs.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    pub fn unmonad<A, F>(&mut self, function: F, arguments: A) -> Result<&mut Self, PipelineError>
    where
        F: Fn(Vec<T>, &A) -> Vec<T> + 'static,
        A: 'static,
    {
        self.enqueue("unmonad", unmonad(function, arguments))
    }

    /// Enqueues a prebuilt lazy transformer.
    ///
    /// The transformer is run once per pulled element, so it must not depend
    /// on seeing the whole sequence.
    ///
    /// # Strict transformers
    ///
    /// A strict transformer such as [`fold_left`](crate::combinator::fold_left)
    /// is accepted, but it only ever sees the outputs of one source element.
    /// Use [`strict`](Self::strict) to run it over the whole sequence.
    ///
    /// ```rust
    /// use lazyseq::combinator::fold_left;
    /// use lazyseq::pipeline::Pipeline;
    ///
    /// # fn main() -> Result<(), lazyseq::error::PipelineError> {
    /// // One fold per element: every total covers a single value.
    /// let mut per_element = Pipeline::new(vec![1, 2, 3]);
    /// per_element.then(fold_left(0, |total, x: i32, _| total + x))?;
    /// assert_eq!(per_element.take_all()?, vec![1, 2, 3]);
    ///
    /// // One fold over the whole sequence.
    /// let mut whole = Pipeline::new(vec![1, 2, 3]);
    /// assert_eq!(whole.strict(fold_left(0, |total, x: i32, _| total + x))?, vec![6]);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    pub fn then(&mut self, transformer: Transformer<T>) -> Result<&mut Self, PipelineError> {
        self.enqueue("then", transformer)
    }

    fn enqueue(
        &mut self,
        method_name: &'static str,
        transformer: Transformer<T>,
    ) -> Result<&mut Self, PipelineError> {
        let PipelineState::Open { queue, .. } = &mut self.state else {
            return Err(rejected(method_name));
        };
        queue.push(transformer);
        Ok(self)
    }

    // =========================================================================
    // Type-changing lazy operators
    // =========================================================================

    /// Enqueues a mapping step that changes the element type.
    ///
    /// Nothing is evaluated. The returned pipeline pulls from the same source
    /// and runs every step queued so far before `function`; `self` is left
    /// consumed.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::pipeline::Pipeline;
    ///
    /// # fn main() -> Result<(), lazyseq::error::PipelineError> {
    /// let mut numbers = Pipeline::new(vec![5, 10, 15]);
    /// let mut labels = numbers.map(|x| x / 5)?.map_into(|x: i32| format!("#{x}"))?;
    /// assert_eq!(labels.take(2)?, vec!["#1".to_string(), "#2".to_string()]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn map_into<U, F>(&mut self, function: F) -> Result<Pipeline<S, U>, PipelineError>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        self.retype("map_into", map(function))
    }

    /// Like [`unmonad`](Self::unmonad), but the host function may return a
    /// different element type.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    pub fn unmonad_into<U, A, F>(
        &mut self,
        function: F,
        arguments: A,
    ) -> Result<Pipeline<S, U>, PipelineError>
    where
        U: 'static,
        F: Fn(Vec<T>, &A) -> Vec<U> + 'static,
        A: 'static,
    {
        self.retype("unmonad_into", unmonad(function, arguments))
    }

    /// Like [`then`](Self::then), but the transformer may change the element
    /// type.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    pub fn then_into<U: 'static>(
        &mut self,
        transformer: Transformer<T, U>,
    ) -> Result<Pipeline<S, U>, PipelineError> {
        self.retype("then_into", transformer)
    }

    /// Fuses the queue and `transformer` onto the stem and moves the open
    /// state into a pipeline of the new element type.
    fn retype<U: 'static>(
        &mut self,
        method_name: &'static str,
        transformer: Transformer<T, U>,
    ) -> Result<Pipeline<S, U>, PipelineError> {
        let PipelineState::Open {
            cursor,
            stem,
            fused,
            mut queue,
        } = std::mem::replace(&mut self.state, PipelineState::Consumed)
        else {
            return Err(rejected(method_name));
        };
        let fused = fused + queue.len() + 1;
        let stem = stem.then(queue.compose()).then(transformer);

        Ok(Pipeline {
            state: PipelineState::Open {
                cursor,
                stem,
                fused,
                queue: TransformerQueue::new(),
            },
        })
    }

    // =========================================================================
    // Terminal pulls
    // =========================================================================

    /// Pulls at most `count` results and consumes the pipeline.
    ///
    /// Source elements are pulled one at a time. If a single element expands
    /// into more outputs than there is room left for, the batch is truncated
    /// at the bound. The result is shorter than `count` when the source runs
    /// out first.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    pub fn take(&mut self, count: usize) -> Result<Vec<T>, PipelineError> {
        self.drain("take", count)
    }

    /// Pulls every remaining result and consumes the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    pub fn take_all(&mut self) -> Result<Vec<T>, PipelineError> {
        self.drain("take_all", UNBOUNDED)
    }

    /// Materializes every result and starts a new pipeline over them.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    pub fn seq(&mut self) -> Result<Pipeline<T>, PipelineError> {
        let results = self.drain("seq", UNBOUNDED)?;
        Ok(Pipeline::new(results))
    }

    // =========================================================================
    // Strict operators
    // =========================================================================

    /// Materializes every result and runs `transformer` over the whole batch.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    pub fn strict<U>(&mut self, transformer: Transformer<T, U>) -> Result<Vec<U>, PipelineError> {
        let results = self.drain("strict", UNBOUNDED)?;
        Ok(transformer.apply(results))
    }

    /// Like [`strict`](Self::strict), but returns a new pipeline over the
    /// output.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    pub fn strict_wrap<U: 'static>(
        &mut self,
        transformer: Transformer<T, U>,
    ) -> Result<Pipeline<U>, PipelineError> {
        let results = self.drain("strict_wrap", UNBOUNDED)?;
        Ok(Pipeline::new(transformer.apply(results)))
    }

    /// Folds every result from the left and returns the accumulator.
    ///
    /// `function` is called as `function(accumulator, element, index)`,
    /// where `index` counts the results reaching the fold, not the source
    /// elements.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::pipeline::Pipeline;
    ///
    /// let mut pipeline = Pipeline::new(vec![1, 2, 3, 4]);
    /// assert_eq!(pipeline.fold_left(0, |total, x, _| total + x), Ok(10));
    /// ```
    pub fn fold_left<A, F>(&mut self, seed: A, function: F) -> Result<A, PipelineError>
    where
        A: Clone,
        F: Fn(A, T, usize) -> A,
    {
        let results = self.drain("fold_left", UNBOUNDED)?;
        Ok(accumulate(seed, function)(results))
    }

    /// Like [`fold_left`](Self::fold_left), but returns a new one-element
    /// pipeline over the accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::pipeline::Pipeline;
    ///
    /// # fn main() -> Result<(), lazyseq::error::PipelineError> {
    /// let result = Pipeline::new(vec![1, 2, 3, 4])
    ///     .fold_left_wrap(0, |total, x, _| total + x)?
    ///     .map(|total| total * 2)?
    ///     .take_all()?;
    /// assert_eq!(result, vec![20]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn fold_left_wrap<A, F>(
        &mut self,
        seed: A,
        function: F,
    ) -> Result<Pipeline<A>, PipelineError>
    where
        A: Clone + 'static,
        F: Fn(A, T, usize) -> A,
    {
        let results = self.drain("fold_left_wrap", UNBOUNDED)?;
        Ok(Pipeline::new(Input::scalar(accumulate(seed, function)(results))))
    }

    /// Materializes every result and hands the whole batch to a host
    /// function with fixed `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    pub fn seq_unmonad<U, A, F>(
        &mut self,
        function: F,
        arguments: A,
    ) -> Result<Vec<U>, PipelineError>
    where
        F: Fn(Vec<T>, &A) -> Vec<U> + 'static,
        A: 'static,
    {
        let results = self.drain("seq_unmonad", UNBOUNDED)?;
        Ok(unmonad(function, arguments).apply(results))
    }

    /// Like [`seq_unmonad`](Self::seq_unmonad), but returns a new pipeline
    /// over the output.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::AlreadyConsumed`] if the pipeline has been
    /// consumed.
    pub fn seq_unmonad_wrap<U, A, F>(
        &mut self,
        function: F,
        arguments: A,
    ) -> Result<Pipeline<U>, PipelineError>
    where
        U: 'static,
        F: Fn(Vec<T>, &A) -> Vec<U> + 'static,
        A: 'static,
    {
        let results = self.drain("seq_unmonad_wrap", UNBOUNDED)?;
        Ok(Pipeline::new(unmonad(function, arguments).apply(results)))
    }

    /// Runs the bounded pull shared by every terminal operation.
    ///
    /// The state is switched to `Consumed` before any user code runs, so a
    /// panicking transformer also leaves the pipeline consumed.
    fn drain(&mut self, method_name: &'static str, count: usize) -> Result<Vec<T>, PipelineError> {
        let PipelineState::Open {
            mut cursor,
            stem,
            mut queue,
            ..
        } = std::mem::replace(&mut self.state, PipelineState::Consumed)
        else {
            return Err(rejected(method_name));
        };
        let transformer = stem.then(queue.compose());
        drop(queue);

        let mut results = Vec::with_capacity(count.min(cursor.remaining()));
        let mut pulled = 0_usize;
        while results.len() < count {
            let Some(element) = cursor.advance() else {
                break;
            };
            pulled += 1;

            let batch = transformer.apply(vec![element]);
            let capacity = count - results.len();
            if batch.len() > capacity {
                tracing::trace!(
                    method = method_name,
                    dropped = batch.len() - capacity,
                    "truncating expansion at bound"
                );
            }
            results.extend(batch.into_iter().take(capacity));
        }

        tracing::debug!(
            method = method_name,
            bound = (count != UNBOUNDED).then_some(count),
            pulled,
            produced = results.len(),
            "pipeline drained"
        );
        Ok(results)
    }
}

fn rejected(method_name: &'static str) -> PipelineError {
    tracing::debug!(method = method_name, "rejected call on consumed pipeline");
    AlreadyConsumedError { method_name }.into()
}

impl<T: 'static> FromIterator<T> for Pipeline<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::new(iterable.into_iter().collect::<Input<T>>())
    }
}

impl<S, T> fmt::Debug for Pipeline<S, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            PipelineState::Open {
                cursor,
                fused,
                queue,
                ..
            } => formatter
                .debug_struct("Pipeline")
                .field("remaining", &cursor.remaining())
                .field("queued", &(fused + queue.len()))
                .finish(),
            PipelineState::Consumed => formatter
                .debug_tuple("Pipeline")
                .field(&"<consumed>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::fold_left;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn test_new_pipeline_is_open() {
        let pipeline = Pipeline::new(vec![1, 2, 3]);
        assert!(!pipeline.is_consumed());
        assert_eq!(pipeline.remaining(), 3);
        assert_eq!(pipeline.queued(), 0);
    }

    #[rstest]
    fn test_lazy_calls_do_not_evaluate() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut pipeline = Pipeline::new(vec![1, 2, 3]);
        pipeline
            .map(move |x| {
                counter.set(counter.get() + 1);
                x
            })
            .unwrap();

        assert_eq!(calls.get(), 0);
        assert_eq!(pipeline.queued(), 1);
        assert_eq!(pipeline.take_all().unwrap(), vec![1, 2, 3]);
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn test_take_pulls_only_what_it_needs() {
        let pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulls);
        let mut pipeline = Pipeline::new((0..100).collect::<Vec<_>>());
        pipeline
            .map(move |x| {
                counter.set(counter.get() + 1);
                x
            })
            .unwrap();

        assert_eq!(pipeline.take(5).unwrap(), vec![0, 1, 2, 3, 4]);
        assert_eq!(pulls.get(), 5);
    }

    #[rstest]
    fn test_take_zero_pulls_nothing() {
        let mut pipeline = Pipeline::new(vec![1]);
        assert_eq!(pipeline.take(0).unwrap(), Vec::<i32>::new());
        assert!(pipeline.is_consumed());
    }

    #[rstest]
    fn test_take_truncates_expansion() {
        let mut pipeline = Pipeline::new(vec![1, 2]);
        pipeline
            .unmonad(
                |batch: Vec<i32>, times: &usize| {
                    batch
                        .into_iter()
                        .flat_map(|x| std::iter::repeat_n(x, *times))
                        .collect()
                },
                5,
            )
            .unwrap();
        assert_eq!(pipeline.take(7).unwrap(), vec![1, 1, 1, 1, 1, 2, 2]);
    }

    #[rstest]
    #[case("take")]
    #[case("take_all")]
    #[case("map")]
    #[case("filter")]
    #[case("unmonad")]
    #[case("then")]
    #[case("seq")]
    #[case("strict")]
    #[case("fold_left")]
    #[case("fold_left_wrap")]
    #[case("seq_unmonad")]
    #[case("seq_unmonad_wrap")]
    #[case("map_into")]
    #[case("unmonad_into")]
    #[case("then_into")]
    fn test_every_method_fails_after_consumption(#[case] method_name: &'static str) {
        let mut pipeline = Pipeline::new(vec![1, 2, 3]);
        pipeline.take(1).unwrap();

        let error = match method_name {
            "take" => pipeline.take(1).unwrap_err(),
            "take_all" => pipeline.take_all().unwrap_err(),
            "map" => pipeline.map(|x| x).unwrap_err(),
            "filter" => pipeline.filter(|_| true).unwrap_err(),
            "unmonad" => pipeline.unmonad(|batch, (): &()| batch, ()).unwrap_err(),
            "then" => pipeline.then(Transformer::identity()).unwrap_err(),
            "seq" => pipeline.seq().unwrap_err(),
            "strict" => pipeline
                .strict(fold_left(0, |total, x: i32, _| total + x))
                .unwrap_err(),
            "fold_left" => pipeline.fold_left(0, |total, x, _| total + x).unwrap_err(),
            "fold_left_wrap" => pipeline
                .fold_left_wrap(0, |total, x, _| total + x)
                .unwrap_err(),
            "seq_unmonad" => pipeline
                .seq_unmonad(|batch, (): &()| batch, ())
                .unwrap_err(),
            "seq_unmonad_wrap" => pipeline
                .seq_unmonad_wrap(|batch, (): &()| batch, ())
                .unwrap_err(),
            "map_into" => pipeline.map_into(i64::from).unwrap_err(),
            "unmonad_into" => pipeline
                .unmonad_into(|batch: Vec<i32>, (): &()| vec![batch.len()], ())
                .unwrap_err(),
            "then_into" => pipeline
                .then_into(crate::combinator::map(|x: i32| x.to_string()))
                .unwrap_err(),
            other => unreachable!("unexpected method {other}"),
        };

        assert_eq!(
            error,
            PipelineError::AlreadyConsumed(AlreadyConsumedError { method_name })
        );
    }

    #[rstest]
    fn test_seq_starts_fresh_pipeline() {
        let mut pipeline = Pipeline::new(vec![3, 1, 2]);
        pipeline.map(|x| x * 10).unwrap();

        let mut next = pipeline.seq().unwrap();
        assert!(pipeline.is_consumed());
        assert_eq!(next.queued(), 0);
        assert_eq!(next.remaining(), 3);
        assert_eq!(next.take(2).unwrap(), vec![30, 10]);
    }

    #[rstest]
    fn test_fold_left_wrap_chains_on_one_element() {
        let mut pipeline = Pipeline::new(vec![1, 2, 3, 4]);
        let mut folded = pipeline.fold_left_wrap(0, |total, x, _| total + x).unwrap();
        assert!(pipeline.is_consumed());
        assert_eq!(folded.remaining(), 1);
        assert_eq!(
            folded.map(|total| total + 1).unwrap().take_all().unwrap(),
            vec![11]
        );
    }

    #[rstest]
    fn test_strict_sees_materialized_results() {
        let mut pipeline = Pipeline::new(vec![5, 6, 7]);
        pipeline.filter(|x| x % 2 == 1).unwrap();
        let lengths = pipeline
            .strict(Transformer::new(|batch: Vec<i32>| vec![batch.len()]))
            .unwrap();
        assert_eq!(lengths, vec![2]);
    }

    #[rstest]
    fn test_strict_wrap_changes_element_type() {
        let mut pipeline = Pipeline::new(vec![1, 22, 333]);
        let mut strings = pipeline
            .strict_wrap(crate::combinator::map(|x: i32| x.to_string()))
            .unwrap();
        strings.filter(|text| text.len() > 1).unwrap();
        assert_eq!(strings.take_all().unwrap(), vec!["22", "333"]);
    }

    #[rstest]
    fn test_seq_unmonad_receives_whole_sequence() {
        let mut pipeline = Pipeline::new(vec![1, 2, 3]);
        pipeline.map(|x| x * 2).unwrap();
        let result = pipeline
            .seq_unmonad(
                |batch: Vec<i32>, (): &()| {
                    let total: i32 = batch.iter().sum();
                    vec![batch.len(), total as usize]
                },
                (),
            )
            .unwrap();
        assert_eq!(result, vec![3, 12]);
    }

    #[rstest]
    fn test_debug_reports_state() {
        let mut pipeline = Pipeline::new(vec![1, 2]);
        pipeline.map(|x| x).unwrap();
        assert_eq!(format!("{pipeline:?}"), "Pipeline { remaining: 2, queued: 1 }");
        pipeline.take_all().unwrap();
        assert_eq!(format!("{pipeline:?}"), "Pipeline(\"<consumed>\")");
    }

    #[rstest]
    fn test_panicking_transformer_leaves_pipeline_consumed() {
        let mut pipeline = Pipeline::new(vec![1, 2, 3]);
        pipeline
            .map(|x| {
                assert!(x < 2, "boom");
                x
            })
            .unwrap();

        let outcome =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| pipeline.take_all()));
        assert!(outcome.is_err());
        assert!(pipeline.is_consumed());
    }

    #[rstest]
    fn test_map_into_is_lazy_and_keeps_bound() {
        let pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulls);
        let mut numbers = Pipeline::new((0..1000).collect::<Vec<i32>>());
        numbers
            .map(move |x| {
                counter.set(counter.get() + 1);
                x
            })
            .unwrap();

        let mut labels = numbers.map_into(|x| x.to_string()).unwrap();
        assert_eq!(pulls.get(), 0);
        assert!(numbers.is_consumed());
        assert_eq!(labels.remaining(), 1000);

        assert_eq!(labels.take(1).unwrap(), vec!["0".to_string()]);
        assert_eq!(pulls.get(), 1);
    }

    #[rstest]
    fn test_steps_before_type_change_run_first() {
        let mut pipeline = Pipeline::new(vec![1, 2, 3, 4]);
        pipeline.filter(|x| x % 2 == 0).unwrap();
        let mut halves = pipeline.map_into(|x| f64::from(x) / 4.0).unwrap();
        halves.map(|x| x * 10.0).unwrap();

        assert_eq!(halves.queued(), 3);
        assert_eq!(halves.take_all().unwrap(), vec![5.0, 10.0]);
    }

    #[rstest]
    fn test_unmonad_into_expansion_is_truncated() {
        let mut pipeline = Pipeline::new(vec!['a', 'b']);
        let mut codes = pipeline
            .unmonad_into(
                |batch: Vec<char>, times: &usize| {
                    batch
                        .into_iter()
                        .flat_map(|c| std::iter::repeat_n(u32::from(c), *times))
                        .collect()
                },
                3,
            )
            .unwrap();
        assert_eq!(codes.take(4).unwrap(), vec![97, 97, 97, 98]);
    }

    #[rstest]
    fn test_then_with_strict_transformer_runs_per_element() {
        let mut per_element = Pipeline::new(vec![1, 2, 3]);
        per_element
            .then(fold_left(0, |total, x: i32, _| total + x))
            .unwrap();
        assert_eq!(per_element.take_all().unwrap(), vec![1, 2, 3]);

        let mut whole = Pipeline::new(vec![1, 2, 3]);
        assert_eq!(
            whole.strict(fold_left(0, |total, x: i32, _| total + x)).unwrap(),
            vec![6]
        );
    }

    #[rstest]
    fn test_from_iterator() {
        let mut pipeline: Pipeline<u8> = (1..=3).collect();
        assert_eq!(pipeline.take_all().unwrap(), vec![1, 2, 3]);
    }
}
