use std::rc::Rc;

use smallvec::SmallVec;

use crate::runtime::fatal::{Fault, check};
use crate::runtime::leak_detector;

/// Inline capacity of the small representation.
pub const SMALL_LEN: usize = 6;

/// Append-immutable sequence with two backing representations.
///
/// A vector holding at most [`SMALL_LEN`] elements embeds them inline and is
/// deep-copied whenever the vector itself is cloned. A larger vector shares
/// one exactly-sized heap buffer through `Rc`, so cloning is O(1) and never
/// copies elements. Every constructor computes the total element count up
/// front and selects the representation from it; growing past the threshold
/// (via [`copy_append`](PersistentVec::copy_append)) switches to the shared
/// representation permanently, and a shared buffer is never mutated in
/// place, so other holders of the old vector observe no change.
///
/// Sharing a large vector across threads is unsupported; the `Rc` count is
/// non-atomic, and the compiler enforces this (`Rc` is `!Send + !Sync`).
#[derive(Debug, Clone)]
pub struct PersistentVec<T> {
    repr: Repr<T>,
}

#[derive(Debug, Clone)]
enum Repr<T> {
    Small(SmallVec<[T; SMALL_LEN]>),
    Large(Rc<Vec<T>>),
}

/// Push capability handed to [`PersistentVec::build`] callbacks.
pub struct Pusher<'a, T> {
    dst: Dst<'a, T>,
}

enum Dst<'a, T> {
    Small(&'a mut SmallVec<[T; SMALL_LEN]>),
    Large(&'a mut Vec<T>),
}

impl<T: Clone> Pusher<'_, T> {
    pub fn push(&mut self, item: T) {
        match &mut self.dst {
            Dst::Small(buf) => buf.push(item),
            Dst::Large(buf) => buf.push(item),
        }
    }

    /// Pushes every element of `src`, in order.
    pub fn splice(&mut self, src: &PersistentVec<T>) {
        for item in src.iter() {
            self.push(item.clone());
        }
    }
}

impl<T> PersistentVec<T> {
    /// The empty vector, in the small representation.
    pub fn new() -> Self {
        Self {
            repr: Repr::Small(SmallVec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn capacity(&self) -> usize {
        match &self.repr {
            Repr::Small(buf) => buf.capacity(),
            Repr::Large(buf) => buf.capacity(),
        }
    }

    /// Bounds-checked element access.
    pub fn get(&self, index: usize) -> &T {
        check(index < self.len(), Fault::IndexOutOfBounds, || {
            format!(
                "index {} is out of bounds for a sequence of length {}",
                index,
                self.len()
            )
        });
        &self.as_slice()[index]
    }

    pub fn as_slice(&self) -> &[T] {
        match &self.repr {
            Repr::Small(buf) => buf,
            Repr::Large(buf) => buf,
        }
    }

    /// Restartable forward iteration over the backing storage.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Representation probe: true while the elements live inline.
    pub fn is_small(&self) -> bool {
        matches!(self.repr, Repr::Small(_))
    }
}

impl<T: Clone> PersistentVec<T> {
    pub fn from_slice(items: &[T]) -> Self {
        Self::build(items.len(), |pusher| {
            for item in items {
                pusher.push(item.clone());
            }
        })
    }

    /// Constructs a vector by handing a [`Pusher`] to `populate`.
    ///
    /// `count` must be the exact number of elements the callback pushes; the
    /// representation is selected from it before the callback runs, and the
    /// large buffer is sized to it exactly.
    pub fn build(count: usize, populate: impl FnOnce(&mut Pusher<'_, T>)) -> Self {
        if count > SMALL_LEN {
            let mut buf = Vec::with_capacity(count);
            populate(&mut Pusher {
                dst: Dst::Large(&mut buf),
            });
            debug_assert_eq!(buf.len(), count);
            leak_detector::record_large_buffer();
            Self {
                repr: Repr::Large(Rc::new(buf)),
            }
        } else {
            let mut buf = SmallVec::new();
            populate(&mut Pusher {
                dst: Dst::Small(&mut buf),
            });
            debug_assert_eq!(buf.len(), count);
            Self {
                repr: Repr::Small(buf),
            }
        }
    }

    /// Returns a new vector holding the receiver's elements followed by
    /// `extra`. The receiver is left unchanged and remains independently
    /// usable.
    pub fn copy_append(&self, extra: &[T]) -> Self {
        Self::build(self.len() + extra.len(), |pusher| {
            pusher.splice(self);
            for item in extra {
                pusher.push(item.clone());
            }
        })
    }
}

impl<T> Default for PersistentVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a PersistentVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_small() {
        let v: PersistentVec<i32> = PersistentVec::new();
        assert_eq!(v.len(), 0);
        assert!(v.is_empty());
        assert!(v.is_small());
    }

    #[test]
    fn test_representation_threshold() {
        let small = PersistentVec::from_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(small.len(), 6);
        assert!(small.is_small());

        let large = PersistentVec::from_slice(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(large.len(), 7);
        assert!(!large.is_small());
    }

    #[test]
    fn test_iteration_is_ordered_and_restartable() {
        for items in [&[1, 2, 3][..], &[1, 2, 3, 4, 5, 6, 7][..]] {
            let v = PersistentVec::from_slice(items);
            let collected: Vec<i32> = v.iter().copied().collect();
            assert_eq!(collected, items);
            let again: Vec<i32> = v.iter().copied().collect();
            assert_eq!(again, items);
        }
    }

    #[test]
    fn test_copy_append_leaves_receiver_unchanged() {
        let v = PersistentVec::from_slice(&[1, 2, 3]);

        let v2 = v.copy_append(&[4, 5, 6]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v2.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert!(v2.is_small());

        let v3 = v2.copy_append(&[7]);
        assert_eq!(v2.len(), 6);
        assert_eq!(v3.as_slice(), &[1, 2, 3, 4, 5, 6, 7]);
        assert!(!v3.is_small());

        let v4 = v3.copy_append(&[8]);
        assert_eq!(v3.len(), 7);
        assert_eq!(v4.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(!v4.is_small());
    }

    #[test]
    fn test_small_clone_copies_large_clone_aliases() {
        let small = PersistentVec::from_slice(&[1, 2, 3]);
        let small_clone = small.clone();
        assert_ne!(small.as_slice().as_ptr(), small_clone.as_slice().as_ptr());
        assert_eq!(small_clone.as_slice(), &[1, 2, 3]);

        let large = PersistentVec::from_slice(&[1, 2, 3, 4, 5, 6, 7]);
        let large_clone = large.clone();
        assert_eq!(large.as_slice().as_ptr(), large_clone.as_slice().as_ptr());
        assert_eq!(large_clone.as_slice(), &[1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_build_with_splice() {
        let base = PersistentVec::from_slice(&[10, 20]);
        let v = PersistentVec::build(4, |pusher| {
            pusher.push(1);
            pusher.splice(&base);
            pusher.push(2);
        });
        assert_eq!(v.as_slice(), &[1, 10, 20, 2]);
        assert!(v.is_small());
    }

    #[test]
    fn test_large_buffer_sized_exactly() {
        let v = PersistentVec::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    #[should_panic(expected = "fatal (index out of bounds)")]
    fn test_out_of_range_access_is_fatal() {
        let v = PersistentVec::from_slice(&[1, 2, 3]);
        v.get(3);
    }
}
