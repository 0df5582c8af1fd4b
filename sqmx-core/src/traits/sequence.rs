//! Indexed, swappable sequence contract
//!
//! Sorters in [`crate::sort`] only ever talk to a [`Sequence`], so the same
//! engine can order a plain slice, one row of a matrix, whole columns keyed
//! by a row, or a diagonal walk over every cell.

/// Access to an ordered, swappable collection of keyed values
///
/// Implementations never own the values; they describe how a logical
/// index maps onto some storage and how two logical slots exchange their
/// contents.
pub trait Sequence {
    /// Key the sorters compare on
    type Key;

    /// Number of slots in the sequence
    fn size(&self) -> usize;

    /// Key stored at `index`
    fn key(&self, index: usize) -> Self::Key;

    /// Exchange the contents of two slots
    fn swap(&mut self, from: usize, to: usize);

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Walk `(index, key)` pairs from `from` to the end
    fn cursor(&self, from: usize) -> Cursor<'_, Self> {
        Cursor {
            sequence: self,
            front: from.min(self.size()),
            back: self.size(),
        }
    }

    /// Walk `(index, key)` pairs, treating every index for which `skip`
    /// returns `true` as absent
    ///
    /// Remaining indices are produced in their original relative order.
    fn cursor_skipping<F>(&self, skip: F) -> SkippingCursor<'_, Self, F>
    where
        F: Fn(usize) -> bool,
    {
        SkippingCursor {
            sequence: self,
            skip,
            front: 0,
            back: self.size(),
        }
    }
}

/// Double-ended cursor over a [`Sequence`]
pub struct Cursor<'a, S: ?Sized> {
    sequence: &'a S,
    front: usize,
    back: usize,
}

impl<S: Sequence + ?Sized> Iterator for Cursor<'_, S> {
    type Item = (usize, S::Key);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        Some((index, self.sequence.key(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for Cursor<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some((self.back, self.sequence.key(self.back)))
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Cursor<'_, S> {}

/// Cursor that steps over "virtually removed" indices
pub struct SkippingCursor<'a, S: ?Sized, F> {
    sequence: &'a S,
    skip: F,
    front: usize,
    back: usize,
}

impl<S, F> Iterator for SkippingCursor<'_, S, F>
where
    S: Sequence + ?Sized,
    F: Fn(usize) -> bool,
{
    type Item = (usize, S::Key);

    fn next(&mut self) -> Option<Self::Item> {
        while self.front < self.back {
            let index = self.front;
            self.front += 1;
            if !(self.skip)(index) {
                return Some((index, self.sequence.key(index)));
            }
        }
        None
    }
}

impl<S, F> DoubleEndedIterator for SkippingCursor<'_, S, F>
where
    S: Sequence + ?Sized,
    F: Fn(usize) -> bool,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.front < self.back {
            self.back -= 1;
            if !(self.skip)(self.back) {
                return Some((self.back, self.sequence.key(self.back)));
            }
        }
        None
    }
}

impl<K: Clone> Sequence for [K] {
    type Key = K;

    fn size(&self) -> usize {
        self.len()
    }

    fn key(&self, index: usize) -> K {
        self[index].clone()
    }

    fn swap(&mut self, from: usize, to: usize) {
        <[K]>::swap(self, from, to);
    }
}
