use std::fs;

use assignlang::{
    ERROR_LINE, Outcome,
    error::ErrorKind,
    execute,
    io::{FileSource, ReaderSource},
    run,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn program_corpus_matches_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "al"))
    {
        let path = entry.path();
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        let mut lines = Vec::new();
        run(&mut FileSource::new(path), &mut lines).unwrap_or_else(|e| {
                                                       panic!("Failed to run {path:?}: {e}")
                                                   });

        count += 1;
        assert_eq!(expected.lines().collect::<Vec<_>>(),
                   lines,
                   "output of {path:?} differs");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn output_of(src: &str) -> Vec<String> {
    let mut lines = Vec::new();
    run(&mut ReaderSource::new(src.as_bytes()), &mut lines).expect("in-memory I/O cannot fail");
    lines
}

fn assert_output(src: &str, expected: &[&str]) {
    assert_eq!(output_of(src), expected, "unexpected output for {src:?}");
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match execute(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail: {src:?}"),
        Err(e) => assert_eq!(e.kind(), kind, "wrong error kind for {src:?}: {e}"),
    }
    assert_eq!(output_of(src), vec![ERROR_LINE]);
}

#[test]
fn single_assignment() {
    assert_output("x = 5;", &["x = 5"]);
}

#[test]
fn multiplication_binds_tighter() {
    assert_output("x = 2 + 3 * 4;", &["x = 14"]);
    assert_output("x = 2 * 3 + 4;", &["x = 10"]);
    assert_output("x = (2 + 3) * 4;", &["x = 20"]);
}

#[test]
fn subtraction_is_left_associative() {
    assert_output("x = 1 - 2 - 3;", &["x = -4"]);
    assert_output("x = 1 - (2 - 3);", &["x = 2"]);
}

#[test]
fn unary_operators() {
    assert_output("x = -(3 - 5);", &["x = 2"]);
    assert_output("x = --5;", &["x = 5"]);
    assert_output("x = +-5;", &["x = -5"]);
    assert_output("x = -2 * -3;", &["x = 6"]);
    assert_output("x = 4 - -4;", &["x = 8"]);
}

#[test]
fn negative_values_are_printed_with_sign() {
    assert_output("x = 0 - 42;", &["x = -42"]);
}

#[test]
fn zero_literal() {
    assert_output("x = 0;", &["x = 0"]);
    assert_output("x = 0 * 7 + 10;", &["x = 10"]);
}

#[test]
fn reassignment_keeps_only_latest_value() {
    assert_output("x = 1; x = x + 1;", &["x = 2"]);
    assert_output("x = 1; y = x; x = 7;", &["x = 7", "y = 1"]);
}

#[test]
fn output_follows_first_assignment_order() {
    assert_output("zeta = 1; alpha = 2; mid = 3; zeta = 4;",
                  &["zeta = 4", "alpha = 2", "mid = 3"]);
}

#[test]
fn whitespace_is_insignificant() {
    assert_output("x=1;y\t=\tx*2 ;", &["x = 1", "y = 2"]);
    assert_output("  \n ", &[]);
}

#[test]
fn identifiers_may_contain_underscores_and_digits() {
    assert_output("_a1 = 1; b_2_c = _a1 + 1;", &["_a1 = 1", "b_2_c = 2"]);
}

#[test]
fn empty_program_prints_nothing() {
    assert_output("", &[]);
}

#[test]
fn leading_zero_is_rejected() {
    assert_failure("x = 01;", ErrorKind::Syntax);
    assert_failure("x = 00;", ErrorKind::Syntax);
}

#[test]
fn uninitialized_read_prints_only_error() {
    assert_failure("y = x;", ErrorKind::Uninitialized);
    assert_failure("a = 1; b = 2; c = a + nope;", ErrorKind::Uninitialized);
    assert_failure("x = x + 1;", ErrorKind::Uninitialized);
}

#[test]
fn malformed_expressions_are_rejected() {
    assert_failure("x = 1 + ;", ErrorKind::Syntax);
    assert_failure("x = ;", ErrorKind::Syntax);
    assert_failure("x = (1 + 2;", ErrorKind::Syntax);
    assert_failure("x = 1 + 2);", ErrorKind::Syntax);
    assert_failure("x = 1 2;", ErrorKind::Syntax);
    assert_failure("x 1;", ErrorKind::Syntax);
    assert_failure("= 1;", ErrorKind::Syntax);
    assert_failure("x = 1", ErrorKind::Syntax);
    assert_failure("5 = x;", ErrorKind::Syntax);
    assert_failure(";", ErrorKind::Syntax);
}

#[test]
fn invalid_characters_are_rejected() {
    assert_failure("x = 1 / 2;", ErrorKind::Syntax);
    assert_failure("x = 1; $", ErrorKind::Syntax);
    assert_failure("é = 1;", ErrorKind::Syntax);
}

#[test]
fn overflow_is_fatal() {
    assert_failure("x = 9223372036854775807 + 1;", ErrorKind::Overflow);
    assert_failure("x = 0 - 9223372036854775807 - 2;", ErrorKind::Overflow);
    assert_failure("x = 4294967296 * 4294967296;", ErrorKind::Overflow);
    assert_failure("x = 9223372036854775808;", ErrorKind::Overflow);
    assert_output("x = 9223372036854775807;", &["x = 9223372036854775807"]);
    assert_output("x = -9223372036854775807 - 1;", &["x = -9223372036854775808"]);
}

#[test]
fn failed_run_reports_outcome() {
    let mut lines = Vec::new();
    let outcome = run(&mut ReaderSource::new("a = 1;\nb = c;\n".as_bytes()), &mut lines).unwrap();
    assert_eq!(outcome, Outcome::Failed(ErrorKind::Uninitialized));
    assert_eq!(lines, vec![ERROR_LINE]);
}

#[test]
fn input_stops_at_first_blank_line() {
    assert_output("a = 1;\nb = 2;\n\nc = ;\n", &["a = 1", "b = 2"]);
}

#[test]
fn lines_are_joined_with_spaces() {
    assert_output("a\n=\n1\n;\n", &["a = 1"]);
    // Joined without a separator, `a` and `b` would merge into `ab`.
    assert_output("ab = 1;\nc = a\nb;\n", &[ERROR_LINE]);
}

#[test]
fn independent_runs_do_not_share_variables() {
    assert!(execute("x = 1;").is_ok());
    assert_failure("y = x;", ErrorKind::Uninitialized);
}

#[test]
fn error_offsets_point_at_the_problem() {
    assert_eq!(execute("x = 1 + $;").unwrap_err().offset(), 8);
    assert_eq!(execute("abc = 1; d = q;").unwrap_err().offset(), 13);
}

#[test]
fn missing_file_is_an_io_error() {
    let mut lines = Vec::new();
    let result = run(&mut FileSource::new("tests/programs/does_not_exist.al"), &mut lines);
    assert!(result.is_err());
    assert!(lines.is_empty());
}

#[test]
fn invalid_utf8_input_is_a_program_error() {
    let mut lines = Vec::new();
    let outcome = run(&mut ReaderSource::new(&b"x = 1;\ny = \xff;\n"[..]), &mut lines).unwrap();
    assert_eq!(outcome, Outcome::Failed(ErrorKind::Syntax));
    assert_eq!(lines, vec![ERROR_LINE]);
}

#[test]
fn deeply_nested_prefix_operators_are_rejected() {
    assert_failure(&format!("x = {}1;", "-".repeat(100_000)), ErrorKind::Syntax);
    assert_failure(&format!("x = {}1;", "-(".repeat(50_000)), ErrorKind::Syntax);
}

#[test]
fn deeply_nested_parentheses_are_rejected() {
    let src = format!("x = {}1{};", "(".repeat(100_000), ")".repeat(100_000));
    assert_failure(&src, ErrorKind::Syntax);
}

#[test]
fn moderate_nesting_is_accepted() {
    assert_output(&format!("x = {}1{};", "(".repeat(100), ")".repeat(100)), &["x = 1"]);
    assert_output(&format!("x = {}7;", "- ".repeat(100)), &["x = 7"]);
}

#[test]
fn long_operator_chains_evaluate() {
    let src = format!("x = 1{};", " + 1".repeat(99_999));
    assert_output(&src, &["x = 100000"]);

    let src = format!("y = 1{};", " * 1".repeat(99_999));
    assert_output(&src, &["y = 1"]);
}
