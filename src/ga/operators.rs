//! Permutation crossover and mutation operators.
//!
//! Tours are encoded as `&[usize]` index vectors over `0..n`, so placed-city
//! bookkeeping is a `Vec<bool>` indexed by city rather than a name lookup.
//!
//! # Crossover
//!
//! - [`ordered_crossover`]: ordered crossover variant (Davis, 1985) with a
//!   left-to-right fill that skips the copied segment
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two random positions with a given
//!   probability — O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Ordered crossover producing a single child.
///
/// # Algorithm
///
/// 1. Draw two positions and order them into a segment `[start, end]`;
///    both ends may coincide
/// 2. Copy `parent1[start..=end]` to the child at the same positions
/// 3. Walk `parent2` from the front and place every city not yet in the
///    child into the next free slot, left to right, jumping over the
///    copied segment
///
/// The child keeps the segment order of `parent1` and the relative order of
/// the remaining cities from `parent2`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn ordered_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let (start, end) = random_segment(n, rng);
    ordered_crossover_with_segment(parent1, parent2, start, end)
}

/// Deterministic core of [`ordered_crossover`] for a given segment.
///
/// # Panics
/// Panics if `start > end`, `end` is out of bounds, or the parents are not
/// permutations of the same index set.
pub fn ordered_crossover_with_segment(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start <= end && end < n, "segment [{start}, {end}] out of bounds for {n}");

    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for i in start..=end {
        child[i] = parent1[i];
        placed[parent1[i]] = true;
    }

    let mut cursor = 0;
    for &city in parent2 {
        if placed[city] {
            continue;
        }
        if cursor == start {
            cursor = end + 1;
        }
        child[cursor] = city;
        placed[city] = true;
        cursor += 1;
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: with probability `probability`, exchange two random
/// positions.
///
/// Both positions are drawn before the probability test, and they may
/// coincide (a no-op swap). Returns `true` if the swap was applied.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], probability: f64, rng: &mut R) -> bool {
    let n = perm.len();
    if n == 0 {
        return false;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    let p: f64 = rng.random();
    if probability > 0.0 && p <= probability {
        perm.swap(i, j);
        true
    } else {
        false
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    /// Check that a slice is a valid permutation of 0..n.
    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        if perm.len() != n {
            return false;
        }
        let set: HashSet<usize> = perm.iter().copied().collect();
        set.len() == n && perm.iter().all(|&v| v < n)
    }

    // ---- Ordered crossover ----

    #[test]
    fn test_ox_known_child() {
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![7, 6, 5, 4, 3, 2, 1, 0];
        let child = ordered_crossover_with_segment(&p1, &p2, 2, 4);
        // Segment [2, 3, 4] stays; 7, 6, 5, 1, 0 fill 0, 1, 5, 6, 7.
        assert_eq!(child, vec![7, 6, 2, 3, 4, 5, 1, 0]);
    }

    #[test]
    fn test_ox_segment_at_front() {
        let p1 = vec![0, 1, 2, 3, 4];
        let p2 = vec![4, 3, 2, 1, 0];
        let child = ordered_crossover_with_segment(&p1, &p2, 0, 1);
        assert_eq!(child, vec![0, 1, 4, 3, 2]);
    }

    #[test]
    fn test_ox_segment_at_back() {
        let p1 = vec![0, 1, 2, 3, 4];
        let p2 = vec![4, 3, 2, 1, 0];
        let child = ordered_crossover_with_segment(&p1, &p2, 3, 4);
        assert_eq!(child, vec![2, 1, 0, 3, 4]);
    }

    #[test]
    fn test_ox_whole_segment_copies_parent1() {
        let p1 = vec![3, 0, 2, 1];
        let p2 = vec![0, 1, 2, 3];
        assert_eq!(ordered_crossover_with_segment(&p1, &p2, 0, 3), p1);
    }

    #[test]
    fn test_ox_single_city_segment() {
        let p1 = vec![0, 1, 2, 3, 4];
        let p2 = vec![2, 4, 0, 3, 1];
        let child = ordered_crossover_with_segment(&p1, &p2, 2, 2);
        assert_eq!(child, vec![4, 0, 2, 3, 1]);
    }

    #[test]
    fn test_ox_all_segments_valid() {
        let p1 = vec![5, 2, 7, 0, 1, 6, 3, 4];
        let p2 = vec![3, 7, 5, 1, 6, 0, 2, 4];
        for start in 0..8 {
            for end in start..8 {
                let child = ordered_crossover_with_segment(&p1, &p2, start, end);
                assert!(is_valid_permutation(&child, 8), "invalid child {child:?}");
                assert_eq!(child[start..=end], p1[start..=end]);
            }
        }
    }

    #[test]
    fn test_ox_random_produces_valid_permutations() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1: Vec<usize> = (0..20).collect();
        let p2: Vec<usize> = (0..20).rev().collect();
        for _ in 0..200 {
            let child = ordered_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&child, 20), "invalid child {child:?}");
        }
    }

    #[test]
    fn test_ox_single_element() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(ordered_crossover(&[0], &[0], &mut rng), vec![0]);
    }

    #[test]
    fn test_ox_identical_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = vec![4, 2, 0, 3, 1];
        for _ in 0..20 {
            assert_eq!(ordered_crossover(&p, &p, &mut rng), p);
        }
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_ox_length_mismatch_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        ordered_crossover(&[0, 1], &[0], &mut rng);
    }

    // ---- Swap mutation ----

    #[test]
    fn test_swap_always_with_probability_one() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut replay = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let mut perm: Vec<usize> = (0..10).collect();
            let i = replay.random_range(0..10);
            let j = replay.random_range(0..10);
            let _: f64 = replay.random();

            assert!(swap_mutation(&mut perm, 1.0, &mut rng));
            let mut expected: Vec<usize> = (0..10).collect();
            expected.swap(i, j);
            assert_eq!(perm, expected);
        }
    }

    #[test]
    fn test_swap_never_with_probability_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<usize> = (0..10).collect();
        for _ in 0..1000 {
            let mut perm = original.clone();
            assert!(!swap_mutation(&mut perm, 0.0, &mut rng));
            assert_eq!(perm, original);
        }
    }

    #[test]
    fn test_swap_preserves_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut perm: Vec<usize> = (0..10).collect();
        for _ in 0..100 {
            swap_mutation(&mut perm, 0.5, &mut rng);
            assert!(is_valid_permutation(&perm, 10));
        }
    }

    #[test]
    fn test_swap_single_and_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut perm = vec![0];
        swap_mutation(&mut perm, 1.0, &mut rng);
        assert_eq!(perm, vec![0]);

        let mut empty: Vec<usize> = vec![];
        assert!(!swap_mutation(&mut empty, 1.0, &mut rng));
    }

    // ---- Random segment helper ----

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end);
            assert!(end < 10);
        }
    }
}
