//! Language-level standard library surface over the core value contracts.

use crate::runtime::array::Array;
use crate::runtime::fatal::{Fault, check, fatal};
use crate::runtime::object::Object;

fn expect_array<'a>(object: &'a Object, name: &str) -> &'a Array {
    match object {
        Object::Array(arr) => arr,
        other => fatal(
            Fault::TypeMismatch,
            &format!(
                "unsupported object passed to {}: `{}`",
                name,
                other.type_name()
            ),
        ),
    }
}

pub fn len(object: &Object) -> Object {
    let arr = expect_array(object, "len");
    Object::make_int(arr.len() as i64)
}

pub fn first(object: &Object) -> Object {
    let arr = expect_array(object, "first");
    check(!arr.is_empty(), Fault::IndexOutOfBounds, || {
        "array does not have any items, first may not be called".to_string()
    });
    arr.get(0).clone()
}

pub fn last(object: &Object) -> Object {
    let arr = expect_array(object, "last");
    check(!arr.is_empty(), Fault::IndexOutOfBounds, || {
        "array does not have any items, last may not be called".to_string()
    });
    arr.get(arr.len() - 1).clone()
}

/// All but the first element, order preserved.
pub fn rest(object: &Object) -> Object {
    let arr = expect_array(object, "rest");
    check(!arr.is_empty(), Fault::IndexOutOfBounds, || {
        "array does not have any items, rest may not be called".to_string()
    });
    Object::make_array(Array::from_slice(&arr.as_slice()[1..]))
}

/// Returns a new array with `value` appended; the original is unchanged.
pub fn push(object: &Object, value: &Object) -> Object {
    let arr = expect_array(object, "push");
    Object::make_array(arr.push(value.clone()))
}

pub fn to_array(object: &Object) -> Object {
    match object {
        Object::VarArgs(args) => Object::make_array(Array::from_slice(args.as_slice())),
        other => fatal(
            Fault::TypeMismatch,
            &format!(
                "unsupported object passed to to_array: `{}`",
                other.type_name()
            ),
        ),
    }
}

/// Prints each argument's rendered form, expanding VarArgs arguments
/// element-by-element, followed by one newline.
pub fn puts(args: &[Object]) -> Object {
    println!("{}", rendered_line(args));
    Object::nil()
}

pub(crate) fn rendered_line(args: &[Object]) -> String {
    let mut out = String::new();
    for arg in args {
        match arg {
            Object::VarArgs(inner) => {
                for item in inner.iter() {
                    out.push_str(&item.inspect());
                }
            }
            other => out.push_str(&other.inspect()),
        }
    }
    out
}

/// Realizes the source language's range-expression syntax.
pub fn range_expr_to_array(start: &Object, end: &Object) -> Object {
    match (start, end) {
        (Object::Integer(s), Object::Integer(e)) => {
            Object::make_array(Array::make_from_range(*s, *e))
        }
        _ => fatal(
            Fault::TypeMismatch,
            &format!(
                "cannot construct range expression from arguments of type `{}` and `{}`",
                start.type_name(),
                end.type_name()
            ),
        ),
    }
}
