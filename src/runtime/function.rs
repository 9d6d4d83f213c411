use std::fmt;
use std::rc::Rc;

use crate::runtime::NativeFn;
use crate::runtime::fatal::{Fault, check};
use crate::runtime::fn_args::FnArgs;
use crate::runtime::leak_detector;
use crate::runtime::object::Object;
use crate::runtime::var_args::VarArgs;

/// Callable runtime value.
///
/// Arity and the variadic flag are fixed at construction, together with the
/// native closure, and never change. The closure is held behind a shared
/// type-erased handle, so cloning a function is O(1). Every call is fully
/// applied in one step; there is no currying or partial application.
#[derive(Clone)]
pub struct Function {
    arity: usize,
    variadic: bool,
    callable: Rc<NativeFn>,
}

impl Function {
    pub fn new(
        arity: usize,
        variadic: bool,
        callable: impl Fn(&[Object]) -> Object + 'static,
    ) -> Self {
        leak_detector::record_function();
        Self {
            arity,
            variadic,
            callable: Rc::new(callable),
        }
    }

    /// Number of positionally-bound parameters, excluding any trailing
    /// variadic parameter.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// Dispatches a flattened argument list to the native closure.
    ///
    /// A non-variadic function requires exactly `arity` arguments and the
    /// closure observes them as-is. A variadic function requires at least
    /// `arity` arguments; the closure observes the first `arity` positionals
    /// plus one trailing VarArgs value capturing the remainder in order
    /// (possibly empty).
    pub fn call(&self, args: &FnArgs) -> Object {
        if self.variadic {
            check(args.len() >= self.arity, Fault::ArityMismatch, || {
                format!(
                    "callable takes at least {} arguments, but only {} were given",
                    self.arity,
                    args.len()
                )
            });
            let (positional, tail) = args.as_slice().split_at(self.arity);
            let mut bound = Vec::with_capacity(self.arity + 1);
            bound.extend_from_slice(positional);
            bound.push(Object::make_varargs(VarArgs::from_slice(tail)));
            (self.callable)(&bound)
        } else {
            check(args.len() == self.arity, Fault::ArityMismatch, || {
                format!(
                    "callable takes {} arguments, but {} were given",
                    self.arity,
                    args.len()
                )
            });
            (self.callable)(args.as_slice())
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("arity", &self.arity)
            .field("variadic", &self.variadic)
            .finish_non_exhaustive()
    }
}
