use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Not, Sub};
use std::rc::Rc;

use crate::runtime::array::Array;
use crate::runtime::fatal::{Fault, fatal};
use crate::runtime::fn_args::FnArgs;
use crate::runtime::function::Function;
use crate::runtime::hash_map::HashMap;
use crate::runtime::leak_detector;
use crate::runtime::var_args::VarArgs;

/// Runtime value observed by transpiler-generated code.
///
/// Exactly one variant is active at a time; every accessor validates the
/// active variant before extracting a payload. String and Array payloads are
/// owned by the value (cloning copies the Array handle, which deep-copies
/// only in the small representation); Function, VarArgs and HashMap payloads
/// are shared through `Rc`, so cloning such a value is O(1).
///
/// Values are semantically immutable after construction and must form
/// acyclic graphs: the `Rc`-managed payloads leak under reference counting
/// if a back-edge is ever introduced, and no operation here can create one.
#[derive(Debug, Clone, Default)]
pub enum Object {
    #[default]
    Nil,
    Integer(i64),
    Boolean(bool),
    String(String),
    Function(Function),
    Array(Array),
    VarArgs(Rc<VarArgs>),
    HashMap(Rc<HashMap>),
}

impl Object {
    /// The immutable Nil sentinel.
    pub fn nil() -> Object {
        Object::Nil
    }

    pub fn make_int(value: i64) -> Object {
        Object::Integer(value)
    }

    pub fn make_bool(value: bool) -> Object {
        Object::Boolean(value)
    }

    pub fn make_string(text: impl Into<String>) -> Object {
        Object::String(text.into())
    }

    pub fn make_function(function: Function) -> Object {
        Object::Function(function)
    }

    pub fn make_array(array: Array) -> Object {
        Object::Array(array)
    }

    pub fn make_varargs(args: VarArgs) -> Object {
        leak_detector::record_var_args();
        Object::VarArgs(Rc::new(args))
    }

    pub fn make_hash_map(map: HashMap) -> Object {
        leak_detector::record_hash_map();
        Object::HashMap(Rc::new(map))
    }

    /// Canonical type label used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Nil => "nil",
            Object::Integer(_) => "integer",
            Object::Boolean(_) => "boolean",
            Object::String(_) => "string",
            Object::Function(_) => "function",
            Object::Array(_) => "array",
            Object::VarArgs(_) => "varargs",
            Object::HashMap(_) => "map",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Object::Nil)
    }

    pub fn is_varargs(&self) -> bool {
        matches!(self, Object::VarArgs(_))
    }

    pub fn get_integer(&self) -> i64 {
        match self {
            Object::Integer(v) => *v,
            other => fatal(
                Fault::TypeMismatch,
                &format!(
                    "attempted to unwrap integer but object type was `{}`",
                    other.type_name()
                ),
            ),
        }
    }

    pub fn get_bool(&self) -> bool {
        match self {
            Object::Boolean(v) => *v,
            other => fatal(
                Fault::TypeMismatch,
                &format!(
                    "attempted to unwrap bool but object type was `{}`",
                    other.type_name()
                ),
            ),
        }
    }

    pub fn get_string(&self) -> &str {
        match self {
            Object::String(v) => v,
            other => fatal(
                Fault::TypeMismatch,
                &format!(
                    "attempted to unwrap string but object type was `{}`",
                    other.type_name()
                ),
            ),
        }
    }

    pub fn get_array(&self) -> &Array {
        match self {
            Object::Array(v) => v,
            other => fatal(
                Fault::TypeMismatch,
                &format!(
                    "attempted to unwrap array but object type was `{}`",
                    other.type_name()
                ),
            ),
        }
    }

    pub fn get_var_args(&self) -> &VarArgs {
        match self {
            Object::VarArgs(v) => v,
            other => fatal(
                Fault::TypeMismatch,
                &format!(
                    "attempted to unwrap varargs but object type was `{}`",
                    other.type_name()
                ),
            ),
        }
    }

    pub fn get_hash_map(&self) -> &HashMap {
        match self {
            Object::HashMap(v) => v,
            other => fatal(
                Fault::TypeMismatch,
                &format!(
                    "attempted to unwrap map but object type was `{}`",
                    other.type_name()
                ),
            ),
        }
    }

    /// Human-readable rendering. Strings render as their raw text; Arrays,
    /// VarArgs and maps render recursively.
    pub fn inspect(&self) -> String {
        match self {
            Object::Nil => "nil".to_string(),
            Object::Integer(v) => v.to_string(),
            Object::Boolean(v) => v.to_string(),
            Object::String(v) => v.clone(),
            Object::Function(_) => "<Function>".to_string(),
            Object::Array(elements) => {
                let items: Vec<String> = elements.iter().map(|e| e.inspect()).collect();
                format!("[{}]", items.join(", "))
            }
            Object::VarArgs(args) => {
                let items: Vec<String> = args.iter().map(|e| e.inspect()).collect();
                format!("VarArgs[{}]", items.join(", "))
            }
            Object::HashMap(map) => {
                let items: Vec<String> = map
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k.inspect(), v.inspect()))
                    .collect();
                format!("{{{}}}", items.join(", "))
            }
        }
    }

    /// Value equality as used by map keying.
    ///
    /// Defined across same-variant Nil/Integer/Boolean/String operands.
    /// Function, Array, VarArgs and HashMap values are never equal to
    /// anything, including themselves.
    pub fn equals(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::Nil, Object::Nil) => true,
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::String(a), Object::String(b)) => a == b,
            _ => false,
        }
    }

    /// Hash as used by map keying. Fatal for reference-typed variants.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        std::mem::discriminant(self).hash(&mut hasher);
        match self {
            Object::Nil => {}
            Object::Integer(v) => v.hash(&mut hasher),
            Object::Boolean(v) => v.hash(&mut hasher),
            Object::String(v) => v.hash(&mut hasher),
            other => fatal(
                Fault::UnsupportedOperation,
                &format!("cannot hash type: `{}`", other.type_name()),
            ),
        }
        hasher.finish()
    }

    /// The `[]` operator: Array with an Integer index, or HashMap with any
    /// key (Nil sentinel when absent).
    pub fn index(&self, index: &Object) -> Object {
        match self {
            Object::Array(arr) => {
                let idx = match index {
                    Object::Integer(v) => *v,
                    other => fatal(
                        Fault::TypeMismatch,
                        &format!(
                            "index into array is not an integer: `{}`",
                            other.type_name()
                        ),
                    ),
                };
                let idx = usize::try_from(idx).unwrap_or_else(|_| {
                    fatal(
                        Fault::IndexOutOfBounds,
                        &format!(
                            "out of bounds access to array: index {} but length is {}",
                            idx,
                            arr.len()
                        ),
                    )
                });
                arr.get(idx).clone()
            }
            Object::HashMap(map) => map.get(index),
            other => fatal(
                Fault::UnsupportedOperation,
                &format!(
                    "attempted to use index operator on an unsupported object: `{}`",
                    other.type_name()
                ),
            ),
        }
    }

    /// Invokes a Function value with the literal caller argument list.
    ///
    /// The list is flattened into [`FnArgs`] (splicing any VarArgs
    /// arguments) before arity checking.
    pub fn call(&self, args: &[Object]) -> Object {
        match self {
            Object::Function(f) => f.call(&FnArgs::new(args)),
            other => fatal(
                Fault::TypeMismatch,
                &format!(
                    "attempted to call a non-function object: `{}`",
                    other.type_name()
                ),
            ),
        }
    }

    pub fn cmp_eq(&self, other: &Object) -> Object {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => Object::Boolean(a == b),
            (Object::Boolean(a), Object::Boolean(b)) => Object::Boolean(a == b),
            _ => binary_op_fatal("==", self, other),
        }
    }

    pub fn cmp_ne(&self, other: &Object) -> Object {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => Object::Boolean(a != b),
            (Object::Boolean(a), Object::Boolean(b)) => Object::Boolean(a != b),
            _ => binary_op_fatal("!=", self, other),
        }
    }

    pub fn cmp_lt(&self, other: &Object) -> Object {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => Object::Boolean(a < b),
            _ => binary_op_fatal("<", self, other),
        }
    }

    pub fn cmp_gt(&self, other: &Object) -> Object {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => Object::Boolean(a > b),
            _ => binary_op_fatal(">", self, other),
        }
    }
}

fn binary_op_fatal(op: &str, lhs: &Object, rhs: &Object) -> ! {
    fatal(
        Fault::TypeMismatch,
        &format!(
            "operator `{}` is undefined for operands `{}` and `{}`",
            op,
            lhs.type_name(),
            rhs.type_name()
        ),
    )
}

impl Add for Object {
    type Output = Object;

    fn add(self, rhs: Object) -> Object {
        match (&self, &rhs) {
            (Object::Integer(a), Object::Integer(b)) => Object::Integer(a + b),
            (Object::String(a), Object::String(b)) => Object::String(format!("{}{}", a, b)),
            _ => binary_op_fatal("+", &self, &rhs),
        }
    }
}

impl Sub for Object {
    type Output = Object;

    fn sub(self, rhs: Object) -> Object {
        match (&self, &rhs) {
            (Object::Integer(a), Object::Integer(b)) => Object::Integer(a - b),
            _ => binary_op_fatal("-", &self, &rhs),
        }
    }
}

impl Mul for Object {
    type Output = Object;

    fn mul(self, rhs: Object) -> Object {
        match (&self, &rhs) {
            (Object::Integer(a), Object::Integer(b)) => Object::Integer(a * b),
            _ => binary_op_fatal("*", &self, &rhs),
        }
    }
}

impl Div for Object {
    type Output = Object;

    fn div(self, rhs: Object) -> Object {
        match (&self, &rhs) {
            (Object::Integer(a), Object::Integer(b)) => Object::Integer(a / b),
            _ => binary_op_fatal("/", &self, &rhs),
        }
    }
}

impl Neg for Object {
    type Output = Object;

    fn neg(self) -> Object {
        match self {
            Object::Integer(v) => Object::Integer(-v),
            other => fatal(
                Fault::TypeMismatch,
                &format!(
                    "attempted to execute prefix operator `-` on a `{}`",
                    other.type_name()
                ),
            ),
        }
    }
}

impl Not for Object {
    type Output = Object;

    fn not(self) -> Object {
        match self {
            Object::Boolean(v) => Object::Boolean(!v),
            other => fatal(
                Fault::TypeMismatch,
                &format!(
                    "attempted to execute prefix operator `!` on a `{}`",
                    other.type_name()
                ),
            ),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}
