//! Shuffled number pool and the append-only list of called numbers.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

/// Highest bingo number. Pools always hold `1..=BINGO_MAX`.
pub const BINGO_MAX: u8 = 75;

/// Numbers still to be drawn plus the numbers already called this round.
///
/// # Invariants
///
/// `remaining` and `called` are disjoint and together hold exactly
/// `1..=BINGO_MAX`. `called` only ever grows by appending, until the next
/// round replaces the whole pool.
#[derive(Debug, Clone)]
pub struct DrawPool {
    remaining: VecDeque<u8>,
    called: Vec<u8>,
}

impl DrawPool {
    /// Builds a pool with every number still to draw, in a uniformly random
    /// order (Fisher–Yates via [`SliceRandom::shuffle`]).
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut numbers: Vec<u8> = (1..=BINGO_MAX).collect();
        numbers.shuffle(rng);
        Self {
            remaining: numbers.into(),
            called: Vec::with_capacity(usize::from(BINGO_MAX)),
        }
    }

    /// Draws the next number, appending it to the called list.
    ///
    /// Returns `None` once the pool is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if, after the draw, remaining and called numbers no longer
    /// partition `1..=BINGO_MAX` (see [`DrawPool::ensure_consistent`]).
    pub fn draw(&mut self) -> Option<u8> {
        let number = self.remaining.pop_front()?;
        self.called.push(number);
        self.ensure_consistent();
        Some(number)
    }

    /// Numbers drawn so far, in draw order.
    #[must_use]
    pub fn called(&self) -> &[u8] {
        &self.called
    }

    /// Count of numbers not yet drawn.
    #[must_use]
    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }

    /// Returns `true` once every number has been drawn.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Checks that remaining and called numbers partition `1..=BINGO_MAX`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = [false; BINGO_MAX as usize + 1];
        for &n in self.remaining.iter().chain(self.called.iter()) {
            match seen.get_mut(usize::from(n)) {
                Some(slot) if n != 0 && !*slot => *slot = true,
                _ => return false,
            }
        }
        self.remaining.len() + self.called.len() == usize::from(BINGO_MAX)
    }

    /// Treats a broken partition as fatal.
    ///
    /// A duplicate or missing number is a defect in the pool itself and the
    /// round cannot continue fairly, so nothing tries to repair it.
    ///
    /// # Panics
    ///
    /// Panics if [`DrawPool::is_consistent`] is `false`.
    #[allow(clippy::panic)]
    pub fn ensure_consistent(&self) {
        if !self.is_consistent() {
            tracing::error!(
                called = self.called.len(),
                remaining = self.remaining.len(),
                "draw pool invariant broken"
            );
            panic!(
                "draw pool invariant broken: {} called, {} remaining",
                self.called.len(),
                self.remaining.len()
            );
        }
    }
}

impl Default for DrawPool {
    /// An empty pool with nothing called, as held before the first round.
    fn default() -> Self {
        Self {
            remaining: VecDeque::new(),
            called: Vec::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffled_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = DrawPool::shuffled(&mut rng);
        assert_eq!(pool.remaining_len(), 75);
        assert!(pool.called().is_empty());
        assert!(pool.is_consistent());
    }

    #[test]
    fn shuffle_actually_reorders() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = DrawPool::shuffled(&mut rng);
        let ordered: Vec<u8> = (1..=BINGO_MAX).collect();
        let drawn: Vec<u8> = pool.remaining.iter().copied().collect();
        assert_ne!(drawn, ordered);
    }

    #[test]
    fn draws_follow_pool_order_and_append() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = DrawPool::shuffled(&mut rng);
        let expected: Vec<u8> = pool.remaining.iter().take(3).copied().collect();

        for i in 0..3 {
            let Some(n) = pool.draw() else {
                panic!("pool should not be empty");
            };
            assert_eq!(n, expected[i]);
            assert_eq!(pool.called().len(), i + 1);
            assert_eq!(pool.called().len() + pool.remaining_len(), 75);
        }
        assert_eq!(pool.called(), expected.as_slice());
    }

    #[test]
    fn exhausts_after_every_number() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut pool = DrawPool::shuffled(&mut rng);
        let mut count = 0;
        while pool.draw().is_some() {
            count += 1;
            assert!(pool.is_consistent());
        }
        assert_eq!(count, 75);
        assert!(pool.is_exhausted());
        assert_eq!(pool.draw(), None);

        let mut called = pool.called().to_vec();
        called.sort_unstable();
        let all: Vec<u8> = (1..=BINGO_MAX).collect();
        assert_eq!(called, all);
    }

    #[test]
    fn default_pool_is_empty() {
        let mut pool = DrawPool::default();
        assert!(pool.is_exhausted());
        assert_eq!(pool.draw(), None);
        assert!(!pool.is_consistent());
    }

    #[test]
    #[should_panic(expected = "draw pool invariant broken")]
    fn drawing_a_duplicate_is_fatal() {
        let mut pool = DrawPool {
            remaining: VecDeque::from(vec![5, 5]),
            called: Vec::new(),
        };
        let _ = pool.draw();
    }

    #[test]
    #[should_panic(expected = "draw pool invariant broken")]
    fn ensure_consistent_rejects_missing_number() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut pool = DrawPool::shuffled(&mut rng);
        pool.remaining.pop_back();
        pool.ensure_consistent();
    }

    #[test]
    fn fresh_pool_passes_ensure_consistent() {
        let mut rng = StdRng::seed_from_u64(12);
        DrawPool::shuffled(&mut rng).ensure_consistent();
    }

    #[test]
    fn duplicate_is_detected() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = DrawPool::shuffled(&mut rng);
        let Some(first) = pool.remaining.front().copied() else {
            panic!("pool should not be empty");
        };
        pool.called.push(first);
        pool.remaining.pop_back();
        assert!(!pool.is_consistent());
    }
}
