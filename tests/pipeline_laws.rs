#![cfg(feature = "pipeline")]
//! Property-based tests for Pipeline laws.
//!
//! This module verifies that bounded pulls satisfy:
//!
//! - **Identity**: `take(n)` with `n >= len` over an empty queue returns the source
//! - **Prefix**: `take(n)` returns exactly the first `n` outputs of the chain
//! - **Single Use**: a second terminal pull always fails
//! - **Equivalence**: `map(f).filter(p).take(n)` equals the eager computation
//! - **Bounded Expansion**: an expanding step never pushes past the bound
//! - **Lazy Type Change**: `map_into` keeps `take(n)` from pulling past `n`

use lazyseq::error::PipelineError;
use lazyseq::pipeline::Pipeline;
use proptest::prelude::*;

/// Runs `steps` over each element on its own, in source order, the way the
/// pipeline pulls, and returns every output.
fn simulate<F>(source: &[i32], steps: F) -> Vec<i32>
where
    F: Fn(i32) -> Vec<i32>,
{
    source.iter().flat_map(|&element| steps(element)).collect()
}

fn expand(batch: Vec<i32>, times: &usize) -> Vec<i32> {
    batch
        .into_iter()
        .flat_map(|x| (0..*times).map(move |offset| x * 10 + offset as i32))
        .collect()
}

// =============================================================================
// Identity Law
// =============================================================================

proptest! {
    /// Identity: an empty queue returns the source unchanged
    #[test]
    fn prop_identity_take_returns_source(
        source in prop::collection::vec(any::<i32>(), 0..50),
        extra in 0_usize..10,
    ) {
        let mut pipeline = Pipeline::new(source.clone());
        prop_assert_eq!(pipeline.take(source.len() + extra).unwrap(), source);
    }
}

proptest! {
    /// Identity for take_all
    #[test]
    fn prop_identity_take_all_returns_source(source in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut pipeline = Pipeline::new(source.clone());
        prop_assert_eq!(pipeline.take_all().unwrap(), source);
    }
}

// =============================================================================
// Prefix Law and Single Use
// =============================================================================

proptest! {
    /// Prefix: take(n) with n < len returns the first n elements, then fails
    #[test]
    fn prop_take_prefix_then_consumed(
        source in prop::collection::vec(any::<i32>(), 1..50),
        cut in any::<prop::sample::Index>(),
    ) {
        let count = cut.index(source.len());
        let mut pipeline = Pipeline::new(source.clone());

        prop_assert_eq!(pipeline.take(count).unwrap(), source[..count].to_vec());
        prop_assert!(pipeline.is_consumed());
        prop_assert!(matches!(pipeline.take(count), Err(PipelineError::AlreadyConsumed(_))));
    }
}

// =============================================================================
// Equivalence with Eager Computation
// =============================================================================

proptest! {
    /// map(f).filter(p).take(n) == eager map, then filter, then truncate
    #[test]
    fn prop_map_filter_take_equivalence(
        source in prop::collection::vec(-1000_i32..1000, 0..60),
        count in 0_usize..70,
    ) {
        let mut pipeline = Pipeline::new(source.clone());
        pipeline
            .map(|x| x.wrapping_mul(3))
            .unwrap()
            .filter(|x| x % 2 == 0)
            .unwrap();

        let expected: Vec<i32> = source
            .iter()
            .map(|x| x.wrapping_mul(3))
            .filter(|x| x % 2 == 0)
            .take(count)
            .collect();

        prop_assert_eq!(pipeline.take(count).unwrap(), expected);
    }
}

proptest! {
    /// Lazy steps keep their enqueue order
    #[test]
    fn prop_steps_run_in_enqueue_order(source in prop::collection::vec(-1000_i32..1000, 0..40)) {
        let mut pipeline = Pipeline::new(source.clone());
        pipeline.map(|x| x + 1).unwrap().map(|x| x * 2).unwrap();

        let expected = simulate(&source, |x| vec![(x + 1) * 2]);
        prop_assert_eq!(pipeline.take_all().unwrap(), expected);
    }
}

// =============================================================================
// Bounded Expansion
// =============================================================================

proptest! {
    /// An expanding step is cut at the bound, never overflowing it
    #[test]
    fn prop_expansion_truncated_at_bound(
        source in prop::collection::vec(-100_i32..100, 0..20),
        times in 1_usize..6,
        count in 0_usize..80,
    ) {
        let mut pipeline = Pipeline::new(source.clone());
        pipeline.unmonad(expand, times).unwrap();

        let all = simulate(&source, |x| expand(vec![x], &times));
        let expected: Vec<i32> = all.iter().copied().take(count).collect();

        let result = pipeline.take(count).unwrap();
        prop_assert!(result.len() <= count);
        prop_assert_eq!(result, expected);
    }
}

proptest! {
    /// A type change is lazy: take(n) after map_into pulls at most n elements
    #[test]
    fn prop_map_into_pulls_only_the_prefix(
        source in prop::collection::vec(any::<i32>(), 0..60),
        count in 0_usize..70,
    ) {
        let pulls = std::rc::Rc::new(std::cell::Cell::new(0_usize));
        let counter = std::rc::Rc::clone(&pulls);

        let mut pipeline = Pipeline::new(source.clone());
        pipeline
            .map(move |x| {
                counter.set(counter.get() + 1);
                x
            })
            .unwrap();
        let mut labels = pipeline.map_into(|x| x.to_string()).unwrap();

        let expected: Vec<String> = source.iter().take(count).map(ToString::to_string).collect();
        prop_assert_eq!(labels.take(count).unwrap(), expected);
        prop_assert_eq!(pulls.get(), count.min(source.len()));
    }
}

// =============================================================================
// Strict Operators
// =============================================================================

proptest! {
    /// fold_left over the pipeline equals the eager fold of its outputs
    #[test]
    fn prop_fold_left_matches_eager_fold(source in prop::collection::vec(-1000_i64..1000, 0..50)) {
        let mut pipeline = Pipeline::new(source.clone());
        pipeline.filter(|x| *x > 0).unwrap();

        let expected: i64 = source.iter().filter(|x| **x > 0).sum();
        prop_assert_eq!(pipeline.fold_left(0, |total, x, _| total + x).unwrap(), expected);
    }
}

proptest! {
    /// seq() preserves every output and their order
    #[test]
    fn prop_seq_preserves_outputs(source in prop::collection::vec(any::<u8>(), 0..50)) {
        let mut pipeline = Pipeline::new(source.clone());
        pipeline.map(u8::reverse_bits).unwrap();

        let mut next = pipeline.seq().unwrap();
        let expected: Vec<u8> = source.iter().map(|x| x.reverse_bits()).collect();
        prop_assert_eq!(next.take_all().unwrap(), expected);
    }
}
