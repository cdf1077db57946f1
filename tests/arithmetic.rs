use monkey_lang::object::Object;

fn eval(input: &str) -> Object {
    monkey_lang::run(input).expect("program should parse cleanly")
}

#[test]
fn operator_precedence_matches_ordinary_math() {
    let cases = [
        ("5", 5),
        ("10", 10),
        ("-5", -5),
        ("-10", -10),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
    ];

    for (input, expected) in cases {
        assert_eq!(eval(input), Object::Integer(expected), "input: {input}");
    }
}

#[test]
fn boolean_and_comparison_expressions() {
    let cases = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("true == true", true),
        ("true == false", false),
        ("(1 < 2) == true", true),
        ("(1 > 2) == false", true),
    ];

    for (input, expected) in cases {
        assert_eq!(eval(input), Object::Boolean(expected), "input: {input}");
    }
}

#[test]
fn bang_negates_truthiness() {
    let cases = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!!true", true),
        ("!!false", false),
        ("!!5", true),
    ];

    for (input, expected) in cases {
        assert_eq!(eval(input), Object::Boolean(expected), "input: {input}");
    }
}

#[test]
fn if_else_falls_back_to_null_with_no_alternative() {
    assert_eq!(eval("if (false) { 10 }"), Object::Null);
    assert_eq!(eval("if (1 > 2) { 10 }"), Object::Null);
    assert_eq!(eval("if (true) { 10 }"), Object::Integer(10));
    assert_eq!(eval("if (1 > 2) { 10 } else { 20 }"), Object::Integer(20));
}
