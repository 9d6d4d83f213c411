use std::fmt;

/// Categories of unrecoverable runtime faults.
///
/// The transpiler's own checks are expected to keep generated call sites
/// type- and arity-correct; these faults are the last-resort safety net, not
/// a control-flow mechanism. There is no catchable error channel anywhere in
/// the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Wrong-variant unwrap, or an operator/builtin applied to an
    /// unsupported variant combination.
    TypeMismatch,
    /// Call argument count does not satisfy a function's fixed or minimum
    /// arity.
    ArityMismatch,
    /// Sequence access past its length.
    IndexOutOfBounds,
    /// Hashing or equality on a reference-typed value, or indexing a
    /// non-indexable variant.
    UnsupportedOperation,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Fault::TypeMismatch => "type mismatch",
            Fault::ArityMismatch => "arity mismatch",
            Fault::IndexOutOfBounds => "index out of bounds",
            Fault::UnsupportedOperation => "unsupported operation",
        };
        f.write_str(label)
    }
}

/// Aborts the running program with a categorized diagnostic.
///
/// Every validation failure in the runtime funnels through here. Generated
/// programs are linked with `panic = "abort"`, so a fault terminates the
/// process with a non-zero status and no unwinding; tests intercept the same
/// path with `#[should_panic]`.
#[cold]
pub fn fatal(fault: Fault, message: &str) -> ! {
    panic!("fatal ({}): {}", fault, message);
}

/// Aborts with `fault` unless `condition` holds.
///
/// The message is only rendered on the failure path.
pub fn check(condition: bool, fault: Fault, message: impl FnOnce() -> String) {
    if !condition {
        fatal(fault, &message());
    }
}
