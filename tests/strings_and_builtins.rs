use monkey_lang::object::Object;

fn eval(input: &str) -> Object {
    monkey_lang::run(input).expect("program should parse cleanly")
}

#[test]
fn string_literals_and_concatenation() {
    assert_eq!(eval(r#""hello world!""#), Object::String("hello world!".into()));
    assert_eq!(
        eval(r#""Hello" + " " + "World!""#),
        Object::String("Hello World!".into())
    );
}

#[test]
fn len_of_string_and_array() {
    assert_eq!(eval(r#"len("")"#), Object::Integer(0));
    assert_eq!(eval(r#"len("four")"#), Object::Integer(4));
    assert_eq!(eval(r#"len("hello world")"#), Object::Integer(11));
    assert_eq!(eval("len([1, 2, 3])"), Object::Integer(3));
}

#[test]
fn puts_returns_null_and_accepts_any_arity() {
    assert_eq!(eval(r#"puts("hello", "world")"#), Object::Null);
    assert_eq!(eval("puts()"), Object::Null);
}

#[test]
fn builtin_arity_errors() {
    assert_eq!(
        eval("len(1, 2)"),
        Object::Error("wrong number of arguments. got=2, want=1".into())
    );
    assert_eq!(
        eval("first([1,2,3], [4])"),
        Object::Error("wrong number of arguments. got=2, want=1".into())
    );
}
