use crate::runtime::fatal::{Fault, check};
use crate::runtime::object::Object;
use crate::runtime::vec::PersistentVec;

/// Flattened per-invocation argument list.
///
/// Built once per call, before arity checking: every VarArgs-valued caller
/// argument is spliced element-by-element at the position it appears, one
/// level deep only (elements that are themselves VarArgs pass through as
/// values). Order is preserved across all inputs.
#[derive(Debug, Clone)]
pub struct FnArgs {
    args: PersistentVec<Object>,
}

impl FnArgs {
    pub fn new(args: &[Object]) -> Self {
        let count: usize = args
            .iter()
            .map(|arg| match arg {
                Object::VarArgs(inner) => inner.len(),
                _ => 1,
            })
            .sum();

        Self {
            args: PersistentVec::build(count, |pusher| {
                for arg in args {
                    match arg {
                        Object::VarArgs(inner) => {
                            for item in inner.iter() {
                                pusher.push(item.clone());
                            }
                        }
                        other => pusher.push(other.clone()),
                    }
                }
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn get(&self, index: usize) -> &Object {
        check(index < self.args.len(), Fault::IndexOutOfBounds, || {
            format!(
                "out of bounds index {} into an argument list of length {}",
                index,
                self.args.len()
            )
        });
        self.args.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.args.iter()
    }

    pub fn as_slice(&self) -> &[Object] {
        self.args.as_slice()
    }
}
