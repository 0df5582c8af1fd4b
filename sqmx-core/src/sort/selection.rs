//! Selection sort and partial selection over a [`Sequence`]

use core::cmp::Ordering;

use crate::error::{MatrixError, Result};
use crate::traits::Sequence;

#[cfg(feature = "alloc")]
use crate::bitset::BitSet;
#[cfg(feature = "alloc")]
use alloc::collections::BTreeMap;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Selection sorter driven by a caller-supplied total order
///
/// The "extremum" is the key that orders first under the comparator; on
/// ties the first one found wins.
pub struct SelectionSorter<C> {
    comparator: C,
}

impl<C> SelectionSorter<C> {
    pub fn new(comparator: C) -> Self {
        Self { comparator }
    }

    /// Sort the whole sequence
    pub fn sort<S>(&self, sequence: &mut S) -> Result<()>
    where
        S: Sequence + ?Sized,
        C: Fn(&S::Key, &S::Key) -> Ordering,
    {
        let size = sequence.size();
        self.sort_head(sequence, size)
    }

    /// Sort the first `limit` slots by swapping each slot with the
    /// extremum of the remaining suffix
    pub fn sort_head<S>(&self, sequence: &mut S, limit: usize) -> Result<()>
    where
        S: Sequence + ?Sized,
        C: Fn(&S::Key, &S::Key) -> Ordering,
    {
        let steps = Self::steps(sequence.size(), limit)?;
        for index in 0..steps {
            let extremum = self.find_extremum(sequence.cursor(index))?;
            sequence.swap(index, extremum);
        }
        Ok(())
    }

    /// Locate the first `limit` extremums without moving anything, then
    /// place them at the head in selection order
    ///
    /// Each search runs over the not-yet-selected indices only; placement
    /// costs exactly one swap per selected element (fewer when an element
    /// is already in its slot).
    #[cfg(feature = "alloc")]
    pub fn select_then_place<S>(&self, sequence: &mut S, limit: usize) -> Result<()>
    where
        S: Sequence + ?Sized,
        C: Fn(&S::Key, &S::Key) -> Ordering,
    {
        let steps = Self::steps(sequence.size(), limit)?;

        let mut chosen = BitSet::new(sequence.size());
        let mut selected = Vec::with_capacity(steps);
        for _ in 0..steps {
            let extremum = {
                let chosen = &chosen;
                self.find_extremum(sequence.cursor_skipping(|i| chosen.contains(i)))?
            };
            chosen.insert(extremum);
            selected.push(extremum);
        }

        // original index -> current slot, and current slot -> original index,
        // recorded only for elements displaced by an earlier swap
        let mut location: BTreeMap<usize, usize> = BTreeMap::new();
        let mut occupant: BTreeMap<usize, usize> = BTreeMap::new();
        for (slot, original) in selected.into_iter().enumerate() {
            let current = location.get(&original).copied().unwrap_or(original);
            if current == slot {
                continue;
            }
            let displaced = occupant.get(&slot).copied().unwrap_or(slot);
            sequence.swap(slot, current);
            location.insert(original, slot);
            occupant.insert(slot, original);
            location.insert(displaced, current);
            occupant.insert(current, displaced);
        }
        Ok(())
    }

    fn steps(size: usize, limit: usize) -> Result<usize> {
        if size < 1 {
            return Err(MatrixError::EmptySequence);
        }
        if limit == 0 {
            return Err(MatrixError::InvalidLimit);
        }
        Ok(limit.min(size - 1))
    }

    fn find_extremum<K, I>(&self, mut cursor: I) -> Result<usize>
    where
        I: Iterator<Item = (usize, K)>,
        C: Fn(&K, &K) -> Ordering,
    {
        let (mut index, mut extremum) = cursor.next().ok_or(MatrixError::EmptySequence)?;
        for (k, key) in cursor {
            if (self.comparator)(&key, &extremum) == Ordering::Less {
                extremum = key;
                index = k;
            }
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn test_selection_sort_full() {
        let mut data = [5i64, -1, 0, 7, 2];
        SelectionSorter::new(ascending).sort(&mut data[..]).unwrap();
        assert_eq!(data, [-1, 0, 2, 5, 7]);
    }

    #[test]
    fn test_selection_sort_head_only() {
        let mut data = [9i64, 8, 7, 6, 5];
        SelectionSorter::new(ascending)
            .sort_head(&mut data[..], 2)
            .unwrap();
        assert_eq!(&data[..2], &[5, 6]);
    }

    #[test]
    fn test_selection_preconditions() {
        let mut empty: [i64; 0] = [];
        assert_eq!(
            SelectionSorter::new(ascending).sort(&mut empty[..]),
            Err(MatrixError::EmptySequence)
        );

        let mut data = [1i64, 2];
        assert_eq!(
            SelectionSorter::new(ascending).sort_head(&mut data[..], 0),
            Err(MatrixError::InvalidLimit)
        );
        #[cfg(feature = "alloc")]
        assert_eq!(
            SelectionSorter::new(ascending).select_then_place(&mut data[..], 0),
            Err(MatrixError::InvalidLimit)
        );
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_select_then_place_collision() {
        // second extremum sits in the first head slot
        let mut data = [1i64, 0, 5];
        SelectionSorter::new(ascending)
            .select_then_place(&mut data[..], 2)
            .unwrap();
        assert_eq!(&data[..2], &[0, 1]);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_select_then_place_matches_full_sort() {
        let original = [4i64, -2, 9, 0, -2, 7, 3, 1];
        let mut sorted = original;
        sorted.sort_unstable();

        for limit in 1..=original.len() {
            let mut data = original;
            SelectionSorter::new(ascending)
                .select_then_place(&mut data[..], limit)
                .unwrap();
            let head = limit.min(original.len() - 1);
            assert_eq!(&data[..head], &sorted[..head], "limit {limit}");

            let mut rest = data;
            rest.sort_unstable();
            assert_eq!(rest, sorted, "limit {limit} must permute");
        }
    }

    #[test]
    fn test_ties_pick_first_found() {
        // keys compare by the first component only
        let mut data = [(1i64, 'a'), (0, 'b'), (0, 'c')];
        SelectionSorter::new(|a: &(i64, char), b: &(i64, char)| a.0.cmp(&b.0))
            .sort_head(&mut data[..], 1)
            .unwrap();
        assert_eq!(data[0], (0, 'b'));
    }
}
