//! End-to-end lowering tests using insta snapshots: drive a session through
//! one or more declarations and snapshot the assembled C source.

use fl_driver::Driver;
use fl_lower::lower_program;
use insta::assert_snapshot;

fn lower(sources: &[&str]) -> String {
    let mut driver = Driver::new(false);
    for source in sources {
        driver.compile(source).expect("fixture source compiles");
    }
    lower_program(driver.code(), driver.main()).expect("fixture program lowers")
}

#[test]
fn const_int_main_prints_a_literal() {
    assert_snapshot!(lower(&["main = lambda -> print(42)"]));
}

#[test]
fn add_and_print() {
    assert_snapshot!(lower(&[
        "add = lambda x y -> x + y",
        "main = lambda -> print(add(2, 3))",
    ]));
}

#[test]
fn if_expression_in_main() {
    assert_snapshot!(lower(&["main = lambda -> print(if true then 1 else 0)"]));
}

#[test]
fn a_redefined_declaration_lowers_using_its_latest_body() {
    assert_snapshot!(lower(&[
        "f = lambda x -> x + 1",
        "f = lambda x -> x + 2",
        "main = lambda -> print(f(1))",
    ]));
}
