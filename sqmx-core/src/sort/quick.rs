//! Partition-exchange sort over a [`Sequence`]

use core::cmp::Ordering;

use crate::traits::Sequence;

/// Quicksort driven by a caller-supplied total order
///
/// Partitions around the middle slot (Lomuto scheme), recurses into the
/// smaller side and loops over the larger one, so auxiliary depth stays
/// logarithmic in the sequence size.
pub struct QuickSorter<C> {
    comparator: C,
}

impl<C> QuickSorter<C> {
    pub fn new(comparator: C) -> Self {
        Self { comparator }
    }

    /// Sort the whole sequence in place
    pub fn sort<S>(&self, sequence: &mut S)
    where
        S: Sequence + ?Sized,
        C: Fn(&S::Key, &S::Key) -> Ordering,
    {
        let size = sequence.size();
        if size > 1 {
            self.sort_range(sequence, 0, size - 1);
        }
    }

    fn sort_range<S>(&self, sequence: &mut S, mut low: usize, mut high: usize)
    where
        S: Sequence + ?Sized,
        C: Fn(&S::Key, &S::Key) -> Ordering,
    {
        while low < high {
            let pivot = self.partition(sequence, low, high);
            if pivot - low < high - pivot {
                if pivot > low {
                    self.sort_range(sequence, low, pivot - 1);
                }
                low = pivot + 1;
            } else {
                if pivot < high {
                    self.sort_range(sequence, pivot + 1, high);
                }
                if pivot == low {
                    break;
                }
                high = pivot - 1;
            }
        }
    }

    /// Place the pivot at its final slot and return that slot
    fn partition<S>(&self, sequence: &mut S, low: usize, high: usize) -> usize
    where
        S: Sequence + ?Sized,
        C: Fn(&S::Key, &S::Key) -> Ordering,
    {
        let middle = low + (high - low) / 2;
        if middle != high {
            sequence.swap(middle, high);
        }
        let pivot = sequence.key(high);

        let mut store = low;
        for index in low..high {
            if (self.comparator)(&sequence.key(index), &pivot) == Ordering::Less {
                if index != store {
                    sequence.swap(store, index);
                }
                store += 1;
            }
        }
        if store != high {
            sequence.swap(store, high);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn test_quicksort_basic() {
        let mut data = [5i64, -1, 0, 7, 2, 7, -3];
        QuickSorter::new(ascending).sort(&mut data[..]);
        assert_eq!(data, [-3, -1, 0, 2, 5, 7, 7]);
    }

    #[test]
    fn test_quicksort_reverse_comparator() {
        let mut data = [1i64, 4, 2, 3];
        QuickSorter::new(|a: &i64, b: &i64| b.cmp(a)).sort(&mut data[..]);
        assert_eq!(data, [4, 3, 2, 1]);
    }

    #[test]
    fn test_quicksort_trivial_sizes() {
        let mut empty: [i64; 0] = [];
        QuickSorter::new(ascending).sort(&mut empty[..]);

        let mut single = [9i64];
        QuickSorter::new(ascending).sort(&mut single[..]);
        assert_eq!(single, [9]);

        let mut pair = [2i64, 1];
        QuickSorter::new(ascending).sort(&mut pair[..]);
        assert_eq!(pair, [1, 2]);
    }

    #[test]
    fn test_quicksort_all_equal() {
        let mut data = [3i64; 9];
        QuickSorter::new(ascending).sort(&mut data[..]);
        assert_eq!(data, [3; 9]);
    }
}
