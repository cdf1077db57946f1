use monkey_lang::object::Object;

fn eval(input: &str) -> Object {
    monkey_lang::run(input).expect("program should parse cleanly")
}

#[test]
fn closures_over_outer_parameters() {
    let input = "
        let newAdder = fn(x) {
            fn(y) { x + y };
        };
        let addTwo = newAdder(2);
        addTwo(2);
    ";
    assert_eq!(eval(input), Object::Integer(4));
}

#[test]
fn let_bound_function_sees_itself_for_recursion() {
    let input = "
        let counter = fn(x) {
            if (x > 10) {
                return x;
            } else {
                counter(x + 1);
            }
        };
        counter(0);
    ";
    assert_eq!(eval(input), Object::Integer(11));
}

#[test]
fn mutual_closures_do_not_see_each_other_through_shadowing() {
    let input = "
        let make = fn(seed) {
            let add = fn(n) { seed + n };
            add
        };
        let a = make(10);
        let b = make(100);
        a(1) + b(1);
    ";
    assert_eq!(eval(input), Object::Integer(10 + 1 + 100 + 1));
}

#[test]
fn fibonacci_via_recursion() {
    let input = "
        let fib = fn(n) {
            if (n < 2) {
                n
            } else {
                fib(n - 1) + fib(n - 2)
            }
        };
        fib(10);
    ";
    assert_eq!(eval(input), Object::Integer(55));
}
