use crate::runtime::fatal::{Fault, check};
use crate::runtime::object::Object;
use crate::runtime::vec::PersistentVec;

/// Persistent value-level list.
///
/// Mutation-shaped operations return a new Array; the receiver is never
/// changed. Whether two Arrays share backing storage depends on the
/// underlying vector's representation (see
/// [`PersistentVec`](crate::runtime::vec::PersistentVec)).
#[derive(Debug, Clone, Default)]
pub struct Array {
    // Boxed to break the `Object -> Array -> PersistentVec<Object>` layout
    // cycle: the inline `Small` arm embeds `Object` by value, so without
    // indirection here `Object` would be infinitely sized. Boxing keeps the
    // backing vector's Small/Large clone semantics unchanged.
    data: Box<PersistentVec<Object>>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies a bounded element range.
    pub fn from_slice(items: &[Object]) -> Self {
        Self {
            data: Box::new(PersistentVec::from_slice(items)),
        }
    }

    /// A run of consecutive integers walked from `start` toward `end`, with
    /// `end` excluded: ascending when `start < end`, descending when
    /// `start > end`, empty when equal.
    pub fn make_from_range(start: i64, end: i64) -> Self {
        let count = start.abs_diff(end) as usize;
        Self {
            data: Box::new(PersistentVec::build(count, |pusher| {
                let mut current = start;
                if start > end {
                    while current > end {
                        pusher.push(Object::make_int(current));
                        current -= 1;
                    }
                } else {
                    while current < end {
                        pusher.push(Object::make_int(current));
                        current += 1;
                    }
                }
            })),
        }
    }

    /// Returns a new Array equal to the receiver plus one trailing element.
    pub fn push(&self, value: Object) -> Array {
        Self {
            data: Box::new(self.data.copy_append(std::slice::from_ref(&value))),
        }
    }

    /// Bounds-checked element access.
    pub fn get(&self, index: usize) -> &Object {
        check(index < self.len(), Fault::IndexOutOfBounds, || {
            format!(
                "out of bounds access to array: index {} but length is {}",
                index,
                self.len()
            )
        });
        self.data.get(index)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[Object] {
        self.data.as_slice()
    }

    /// Representation probe for the backing vector.
    pub fn is_small(&self) -> bool {
        self.data.is_small()
    }
}
