//! Value representation and memory management for transpiler-generated code.
//!
//! Generated call sites construct [`object::Object`] values through the
//! factory operations, invoke Function-valued objects (packaging caller
//! arguments into [`fn_args::FnArgs`]), index them, and compare them. Every
//! operation either succeeds with well-defined semantics or aborts through
//! [`fatal::fatal`]; there is no catchable error channel.
//!
//! # Ownership model
//! There is no tracing garbage collector. Heap-backed payloads are shared
//! through non-atomic `Rc` handles and freed deterministically when the last
//! owning handle is destroyed; no explicit close/finalize step exists.
//!
//! # No-cycle invariant
//! Runtime values form immutable DAGs, never cyclic graphs. `Rc` cannot
//! reclaim cycles, and no operation in this runtime can create a back-edge
//! into an already-reachable value.
//!
//! # Single-threaded
//! Reference counts are intentionally not atomic. Sharing any Object whose
//! active variant holds an `Rc` payload, or any large-representation
//! [`vec::PersistentVec`], across threads is unsupported; `Rc` being
//! `!Send + !Sync` makes this a compile-time guarantee.
use crate::runtime::object::Object;

pub mod array;
pub mod builtins;
pub mod fatal;
pub mod fn_args;
pub mod function;
pub mod hash_map;
pub mod leak_detector;
pub mod object;
pub mod var_args;
pub mod vec;

#[cfg(test)]
mod builtins_test;

/// Interface of the native closures wrapped by [`function::Function`].
pub type NativeFn = dyn Fn(&[Object]) -> Object;
