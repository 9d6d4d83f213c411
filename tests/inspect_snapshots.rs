use ember::runtime::array::Array;
use ember::runtime::function::Function;
use ember::runtime::hash_map::HashMap;
use ember::runtime::object::Object;
use ember::runtime::var_args::VarArgs;
use insta::assert_snapshot;

#[test]
fn test_scalar_rendering() {
    assert_snapshot!(Object::nil().inspect(), @"nil");
    assert_snapshot!(Object::make_int(-42).inspect(), @"-42");
    assert_snapshot!(Object::make_bool(true).inspect(), @"true");
    assert_snapshot!(Object::make_bool(false).inspect(), @"false");
    assert_snapshot!(Object::make_string("plain text, unquoted").inspect(), @"plain text, unquoted");
}

#[test]
fn test_function_renders_as_placeholder() {
    let f = Object::make_function(Function::new(2, true, |_| Object::nil()));
    assert_snapshot!(f.inspect(), @"<Function>");
}

#[test]
fn test_array_rendering_is_recursive() {
    let arr = Object::make_array(Array::from_slice(&[
        Object::make_int(1),
        Object::make_string("two"),
        Object::make_array(Array::from_slice(&[
            Object::make_bool(true),
            Object::nil(),
        ])),
    ]));
    assert_snapshot!(arr.inspect(), @"[1, two, [true, nil]]");
}

#[test]
fn test_empty_array_rendering() {
    assert_snapshot!(Object::make_array(Array::new()).inspect(), @"[]");
}

#[test]
fn test_varargs_rendering_is_tagged() {
    let va = Object::make_varargs(VarArgs::from_slice(&[
        Object::make_int(1),
        Object::make_int(2),
    ]));
    assert_snapshot!(va.inspect(), @"VarArgs[1, 2]");
}

#[test]
fn test_single_pair_map_rendering() {
    // One pair only: iteration order over larger tables is unspecified.
    let map = Object::make_hash_map(HashMap::from_pairs(&[(
        Object::make_string("key"),
        Object::make_int(7),
    )]));
    assert_snapshot!(map.inspect(), @"{key: 7}");
}

#[test]
fn test_range_rendering() {
    let arr = ember::runtime::builtins::range_expr_to_array(
        &Object::make_int(1),
        &Object::make_int(6),
    );
    assert_snapshot!(arr.inspect(), @"[1, 2, 3, 4, 5]");
}
