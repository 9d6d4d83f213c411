use crate::runtime::array::Array;
use crate::runtime::builtins;
use crate::runtime::object::Object;
use crate::runtime::var_args::VarArgs;

fn int_array(values: &[i64]) -> Object {
    let items: Vec<Object> = values.iter().map(|v| Object::make_int(*v)).collect();
    Object::make_array(Array::from_slice(&items))
}

fn ints(object: &Object) -> Vec<i64> {
    object.get_array().iter().map(|o| o.get_integer()).collect()
}

#[test]
fn test_len() {
    assert_eq!(builtins::len(&int_array(&[])).get_integer(), 0);
    assert_eq!(builtins::len(&int_array(&[1, 2, 3])).get_integer(), 3);
}

#[test]
#[should_panic(expected = "fatal (type mismatch): unsupported object passed to len: `integer`")]
fn test_len_rejects_non_array() {
    builtins::len(&Object::make_int(1));
}

#[test]
fn test_first_last_rest() {
    let arr = int_array(&[1, 2, 3]);
    assert_eq!(builtins::first(&arr).get_integer(), 1);
    assert_eq!(builtins::last(&arr).get_integer(), 3);
    assert_eq!(ints(&builtins::rest(&arr)), vec![2, 3]);
}

#[test]
fn test_rest_of_single_element_array_is_empty() {
    let arr = int_array(&[7]);
    assert_eq!(ints(&builtins::rest(&arr)), Vec::<i64>::new());
}

#[test]
#[should_panic(expected = "fatal (index out of bounds): array does not have any items")]
fn test_first_of_empty_array_is_fatal() {
    builtins::first(&int_array(&[]));
}

#[test]
#[should_panic(expected = "fatal (index out of bounds): array does not have any items")]
fn test_last_of_empty_array_is_fatal() {
    builtins::last(&int_array(&[]));
}

#[test]
#[should_panic(expected = "fatal (index out of bounds): array does not have any items")]
fn test_rest_of_empty_array_is_fatal() {
    builtins::rest(&int_array(&[]));
}

#[test]
fn test_push_returns_new_array() {
    let arr = int_array(&[1, 2]);
    let pushed = builtins::push(&arr, &Object::make_int(3));

    assert_eq!(ints(&pushed), vec![1, 2, 3]);
    assert_eq!(ints(&arr), vec![1, 2]);
}

#[test]
fn test_to_array_copies_the_snapshot() {
    let va = Object::make_varargs(VarArgs::from_slice(&[
        Object::make_int(4),
        Object::make_int(5),
    ]));
    assert_eq!(ints(&builtins::to_array(&va)), vec![4, 5]);
}

#[test]
#[should_panic(expected = "fatal (type mismatch): unsupported object passed to to_array")]
fn test_to_array_rejects_non_varargs() {
    builtins::to_array(&int_array(&[1]));
}

#[test]
fn test_rendered_line_concatenates_without_separators() {
    let line = builtins::rendered_line(&[
        Object::make_string("a"),
        Object::make_int(1),
        Object::make_bool(true),
    ]);
    assert_eq!(line, "a1true");
}

#[test]
fn test_rendered_line_expands_varargs_elementwise() {
    let va = Object::make_varargs(VarArgs::from_slice(&[
        Object::make_string("x"),
        Object::make_string("y"),
    ]));
    let line = builtins::rendered_line(&[Object::make_string("a"), va, Object::make_string("b")]);
    assert_eq!(line, "axyb");
}

#[test]
fn test_puts_returns_nil() {
    assert!(builtins::puts(&[Object::make_int(1), Object::make_string("x")]).is_nil());
}

#[test]
fn test_range_expr_to_array() {
    let arr = builtins::range_expr_to_array(&Object::make_int(1), &Object::make_int(4));
    assert_eq!(ints(&arr), vec![1, 2, 3]);

    let reversed = builtins::range_expr_to_array(&Object::make_int(3), &Object::make_int(0));
    assert_eq!(ints(&reversed), vec![3, 2, 1]);
}

#[test]
#[should_panic(expected = "fatal (type mismatch): cannot construct range expression")]
fn test_range_expr_rejects_non_integers() {
    builtins::range_expr_to_array(&Object::make_int(1), &Object::make_string("end"));
}
