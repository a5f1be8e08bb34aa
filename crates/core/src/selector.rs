use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::model::ContentKind;
use crate::random::RandomSource;

/// Indices of catalog items not yet served in this session.
///
/// Items are drawn without replacement. The pool is refilled to the full
/// catalog range only once it runs dry, so nothing repeats until every item
/// has been served once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pool(Vec<usize>);

impl Pool {
    /// A pool holding every index in `0..size`.
    #[must_use]
    pub fn full(size: usize) -> Self {
        Self((0..size).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Remove and return a uniformly chosen index, refilling first if empty.
    ///
    /// Indices at or beyond `catalog_size` (left over from a restored session
    /// whose catalog shrank) and repeated indices are dropped before the draw.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::ContentUnavailable` if `catalog_size` is zero.
    pub fn pick_next(
        &mut self,
        catalog_size: usize,
        content: ContentKind,
        random: &RandomSource,
    ) -> Result<usize, ContentError> {
        if catalog_size == 0 {
            return Err(ContentError::ContentUnavailable { content });
        }

        let mut seen = vec![false; catalog_size];
        self.0.retain(|&index| {
            index < catalog_size && !std::mem::replace(&mut seen[index], true)
        });
        if self.0.is_empty() {
            *self = Self::full(catalog_size);
        }

        let slot = random.index(self.0.len());
        Ok(self.0.remove(slot))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_catalog_is_unavailable() {
        let mut pool = Pool::default();
        let err = pool
            .pick_next(0, ContentKind::Tip, &RandomSource::seeded(1))
            .unwrap_err();
        assert!(matches!(
            err,
            ContentError::ContentUnavailable {
                content: ContentKind::Tip
            }
        ));
    }

    #[test]
    fn empty_pool_refills_before_picking() {
        let mut pool = Pool::default();
        let index = pool
            .pick_next(4, ContentKind::QuizQuestion, &RandomSource::seeded(3))
            .unwrap();

        assert!(index < 4);
        assert_eq!(pool.len(), 3);
        assert!(!pool.contains(index));
    }

    #[test]
    fn stale_indices_are_dropped() {
        let mut pool = Pool(vec![7, 9]);
        let index = pool
            .pick_next(3, ContentKind::Tip, &RandomSource::seeded(5))
            .unwrap();

        assert!(index < 3);
        assert_eq!(pool.len(), 2);
        assert!(pool.as_slice().iter().all(|&i| i < 3));
    }

    #[test]
    fn repeated_indices_are_served_once() {
        let random = RandomSource::seeded(11);
        let mut pool = Pool(vec![1, 1, 2, 1]);

        let mut served = vec![
            pool.pick_next(3, ContentKind::Tip, &random).unwrap(),
            pool.pick_next(3, ContentKind::Tip, &random).unwrap(),
        ];
        assert!(pool.is_empty());
        served.sort_unstable();
        assert_eq!(served, vec![1, 2]);
    }

    proptest! {
        #[test]
        fn every_item_served_once_before_any_repeat(size in 1usize..40, seed in any::<u64>()) {
            let random = RandomSource::seeded(seed);
            let mut pool = Pool::full(size);
            let mut seen = HashSet::new();

            for _ in 0..size {
                let index = pool.pick_next(size, ContentKind::Tip, &random).unwrap();
                prop_assert!(index < size);
                prop_assert!(seen.insert(index));
                prop_assert!(pool.len() <= size);
            }
            prop_assert!(pool.is_empty());

            let repeat = pool.pick_next(size, ContentKind::Tip, &random).unwrap();
            prop_assert!(seen.contains(&repeat));
            prop_assert_eq!(pool.len(), size - 1);
        }
    }
}
