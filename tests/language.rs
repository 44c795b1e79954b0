use std::{fs, path::Path};

use erl::{
    ast::Position,
    error::{ErlError, ErrorKind},
    interpreter::{console::BufferConsole, evaluator::core::Context},
    repl::{Feed, Session},
    run_source,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "erl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = read_expected(path);

        count += 1;
        match run(&source) {
            Ok(output) => assert_eq!(output, expected, "Output of {path:?} differs"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn read_expected(program: &Path) -> Vec<String> {
    let path = program.with_extension("out");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
                             .lines()
                             .map(str::to_string)
                             .collect()
}

fn run(src: &str) -> Result<Vec<String>, ErlError> {
    let mut console = BufferConsole::new();
    run_source(src, &mut console)?;
    Ok(console.output().to_vec())
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn assert_error_kind(src: &str, kind: ErrorKind) -> ErlError {
    match run(src) {
        Ok(output) => panic!("Script succeeded with {output:?} but was expected to fail with a {kind} error"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "Unexpected error: {e}");
            e
        },
    }
}

fn assert_output(src: &str, expected: &[&str]) {
    match run(src) {
        Ok(output) => assert_eq!(output, expected, "Script:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

#[test]
fn integer_arithmetic_stays_integer() {
    assert_output("print(1 + 2)\nprint(8 - 5)\nprint(7 * 9)\nprint(-4 * 3)",
                  &["3", "3", "63", "-12"]);
    assert_output("print(10 / 2)\nprint(7 / 2)", &["5", "3.5"]);
    assert_output("print(2 ^ 10)\nprint(2 ^ -1)", &["1024", "0.5"]);
}

#[test]
fn float_operand_promotes_result() {
    assert_output("print(1 + 2.0)\nprint(3.0 * 2)\nprint(2.5 - 0.5)", &["3.0", "6.0", "2.0"]);
    assert_output("print(4 ^ 0.5)", &["2.0"]);
    assert_output("print(1 == 1.0)", &["True"]);
}

#[test]
fn precedence_and_associativity() {
    assert_output("print(2 + 3 * 4)", &["14"]);
    assert_output("print((2 + 3) * 4)", &["20"]);
    assert_output("print(10 - 4 - 3)", &["3"]);
    assert_output("print(2 ^ 3 ^ 2)", &["64"]);
    assert_output("print(2 * 3 ^ 2)", &["18"]);
    assert_output("print(1 + 2 < 4 AND 3 > 2)", &["True"]);
}

#[test]
fn integer_division_and_modulus() {
    assert_output("print(7 DIV 2)\nprint(-7 DIV 2)\nprint(7 MOD 3)\nprint(-7 MOD 2)",
                  &["3", "-4", "1", "-1"]);
    assert_output("print(7.5 DIV 2)", &["3.0"]);
}

#[test]
fn division_by_zero_is_evaluation_error() {
    for src in ["x = 1 / 0", "x = 1 MOD 0", "x = 1 DIV 0", "x = 1.5 / 0", "x = 2 / 0.0"] {
        assert_error_kind(src, ErrorKind::Evaluation);
    }
}

#[test]
fn failed_assignment_leaves_table_untouched() {
    let mut context = Context::with_console(BufferConsole::new());
    assert!(context.run(&["x = 1", "x = 1 / 0"]).is_err());
    assert_eq!(context.globals().lookup("x").map(ToString::to_string), Some("1".to_string()));
}

#[test]
fn integer_overflow_is_evaluation_error() {
    assert_error_kind("x = 9223372036854775807 + 1", ErrorKind::Evaluation);
    assert_error_kind("x = 2 ^ 64", ErrorKind::Evaluation);
    assert_error_kind("x = 2 ^ 5000000000", ErrorKind::Evaluation);
}

#[test]
fn huge_exponents_of_unit_bases_do_not_overflow() {
    assert_output("print(1 ^ 5000000000)\nprint(0 ^ 5000000000)", &["1", "0"]);
    assert_output("print((-1) ^ 5000000000)\nprint((-1) ^ 5000000001)", &["1", "-1"]);
}

#[test]
fn deeply_nested_expressions_do_not_exhaust_the_stack() {
    let depth = 2000;
    let nested = format!("print({}1{})", "(".repeat(depth), ")".repeat(depth));
    assert_output(&nested, &["1"]);

    let sum = format!("print({})", vec!["1"; 10_000].join(" + "));
    assert_output(&sum, &["10000"]);

    let negated = format!("print({}5)", "-".repeat(1001));
    assert_output(&negated, &["-5"]);

    let inverted = format!("print({}True)", "NOT ".repeat(1000));
    assert_output(&inverted, &["True"]);
}

#[test]
fn strings_concatenate_and_compare() {
    assert_output("print(\"ab\" + 'cd')", &["abcd"]);
    assert_output("print(\"apple\" < \"banana\")\nprint('a' == \"a\")", &["True", "True"]);
    assert_error_kind("x = \"a\" + 1", ErrorKind::Type);
    assert_error_kind("x = \"a\" * 2", ErrorKind::Type);
}

#[test]
fn comparisons_and_logic() {
    assert_output("print(2 < 3)\nprint(3 >= 3)\nprint(2 != 2)\nprint(True == False)",
                  &["True", "True", "False", "False"]);
    assert_output("print(NOT 1 > 2)\nprint(True AND False)\nprint(True OR False)",
                  &["True", "False", "True"]);
    assert_error_kind("x = 1 AND True", ErrorKind::Type);
    assert_error_kind("x = NOT 1", ErrorKind::Type);
    assert_error_kind("x = True < False", ErrorKind::Type);
    assert_error_kind("x = 1 < \"a\"", ErrorKind::Type);
}

#[test]
fn const_cannot_be_reassigned() {
    let e = assert_error_kind("const limit = 1\nlimit = 2", ErrorKind::Identifier);
    assert_eq!(e.position(), Position::new(1, 0));
    assert_error_kind("const limit = 1\nconst limit = 2", ErrorKind::Identifier);
    assert_output("x = 1\nx = 2\nx = 3\nprint(x)", &["3"]);
    assert_output("x = 1\nconst x = 2\nprint(x)", &["2"]);
}

#[test]
fn unknown_variable_is_identifier_error() {
    let e = assert_error_kind("print(foo)", ErrorKind::Identifier);
    assert!(matches!(e, ErlError::Identifier { ref name, .. } if name == "foo"));
}

#[test]
fn unbound_name_in_if_condition_is_identifier_error() {
    let e = assert_error_kind("if x > 3 then\n  y = 1\nelse\n  y = 2\nendif",
                              ErrorKind::Identifier);
    assert_eq!(e.position(), Position::new(0, 3));
}

#[test]
fn if_elseif_else_picks_first_true_case() {
    let src = "x = 5
if x > 10 then
  print(\"big\")
elseif x > 3 then
  print(\"medium\")
elseif x > 1 then
  print(\"small\")
else
  print(\"tiny\")
endif";
    assert_output(src, &["medium"]);
    assert_output("if False then\n  print(1)\nendif\nprint(2)", &["2"]);
    assert_error_kind("if 1 then\n  print(1)\nendif", ErrorKind::Type);
}

#[test]
fn while_false_never_runs_body() {
    assert_output("while False\n  print(\"body\")\nendwhile\nprint(\"done\")", &["done"]);
    assert_output("i = 0\nwhile i < 3\n  print(i)\n  i = i + 1\nendwhile", &["0", "1", "2"]);
    assert_error_kind("while 0\nendwhile", ErrorKind::Type);
}

#[test]
fn do_until_true_runs_body_once() {
    assert_output("do\n  print(\"body\")\nuntil True", &["body"]);
    assert_output("i = 0\ndo\n  i = i + 1\nuntil i >= 3\nprint(i)", &["3"]);
}

#[test]
fn for_loop_counts_up_with_default_step() {
    assert_output("for i = 1 to 5\n  print(i)\nnext i", &["1", "2", "3", "4", "5"]);
    assert_output("for i = 1 to 10 step 4\n  print(i)\nnext i\nprint(i)", &["1", "5", "9", "9"]);
    assert_output("for i = 3 to 3\n  print(i)\nnext i", &["3"]);
}

#[test]
fn for_loop_counts_down_with_negative_step() {
    assert_output("for i = 5 to 1 step -1\n  print(i)\nnext i", &["5", "4", "3", "2", "1"]);
}

#[test]
fn for_loop_with_unreachable_bound_fails_before_first_pass() {
    let mut console = BufferConsole::new();
    let e = run_source("for i = 1 to 5 step -1\n  print(i)\nnext i", &mut console).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Evaluation);
    assert!(console.output().is_empty());

    assert_error_kind("for i = 1 to 5 step 0\nnext i", ErrorKind::Evaluation);
    assert_error_kind("for i = 1.0 to 5\nnext i", ErrorKind::Type);
}

#[test]
fn function_call_returns_value() {
    assert_output("function f(a, b)\n return a + b\nendfunction\nprint(str(f(2,3)))", &["5"]);
}

#[test]
fn procedure_runs_for_side_effects() {
    assert_output("procedure greet(name)\n  print(\"Hello \" + name)\nendprocedure\ngreet(\"Ada\")",
                  &["Hello Ada"]);
    assert_error_kind("procedure p()\nendprocedure\nx = p()", ErrorKind::Evaluation);
    assert_error_kind("function f()\n  y = 1\nendfunction\nx = f() + 1",
                      ErrorKind::Evaluation);
}

#[test]
fn early_return_from_loop() {
    let src = "function first_multiple(n, k)
  for i = 1 to 100
    if i MOD k == 0 AND i > n then
      return i
    endif
  next i
  return 0
endfunction
print(first_multiple(10, 7))";
    assert_output(src, &["14"]);
}

#[test]
fn wrong_function_arity_is_evaluation_error() {
    assert_error_kind("function f(x, y)\n  return x + y\nendfunction\nf(3)", ErrorKind::Evaluation);
    assert_error_kind("print(1, 2)", ErrorKind::Evaluation);
}

#[test]
fn calling_a_non_subroutine_is_type_error() {
    assert_error_kind("x = 3\nx(1)", ErrorKind::Type);
}

#[test]
fn call_scope_is_isolated_from_globals() {
    let src = "x = 1
procedure p()
  x = 99
  print(x)
endprocedure
p()
print(x)";
    assert_output(src, &["99", "1"]);
}

#[test]
fn subroutine_locals_stay_out_of_globals() {
    let mut context = Context::with_console(BufferConsole::new());
    context.run(&["procedure p(n)", "  local = n * 2", "endprocedure", "p(4)"])
           .unwrap();

    assert!(context.globals().contains("p"));
    assert!(!context.globals().contains("local"));
    assert!(!context.globals().contains("n"));
}

#[test]
fn global_qualifier_writes_global_table() {
    let src = "count = 0
procedure bump()
  global count = count + 1
endprocedure
bump()
bump()
print(count)";
    assert_output(src, &["2"]);
}

#[test]
fn subroutine_reads_globals() {
    assert_output("rate = 3\nfunction scale(n)\n  return n * rate\nendfunction\nprint(scale(4))",
                  &["12"]);
}

#[test]
fn recursion_beyond_call_depth_limit_fails_cleanly() {
    let src = "depth = 0
procedure dive(n)
  global depth = n
  dive(n + 1)
endprocedure
dive(1)";
    let mut context = Context::with_console(BufferConsole::new());
    let lines: Vec<&str> = src.lines().collect();

    let e = context.run(&lines).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Evaluation);
    assert_eq!(context.depth(), 0);
    assert_eq!(context.globals().lookup("depth").map(ToString::to_string),
               Some("1500".to_string()));
}

#[test]
fn deep_recursion_within_limit_succeeds() {
    let src = "function sum(n)
  if n == 0 then
    return 0
  endif
  return n + sum(n - 1)
endfunction
print(sum(1400))";
    assert_output(src, &["980700"]);
}

#[test]
fn literals_keep_their_kind_when_displayed() {
    assert_output("print(3)\nprint(3.0)\nprint(0.25)\nprint(2.)", &["3", "3.0", "0.25", "2.0"]);
    assert_output("print(True)\nprint('text')", &["True", "text"]);
}

#[test]
fn natives_convert_values() {
    assert_output("print(int(3.9))\nprint(int(\"42\"))\nprint(float(2))\nprint(str(1.5) + \"!\")",
                  &["3", "42", "2.0", "1.5!"]);
    assert_output("print(bool(0))\nprint(bool(\"True\"))", &["False", "True"]);
    assert_output("print(asc(\"A\"))\nprint(chr(98))", &["65", "b"]);
    assert_error_kind("x = int(\"abc\")", ErrorKind::Evaluation);
    assert_error_kind("x = bool(\"maybe\")", ErrorKind::Evaluation);
    assert_error_kind("x = chr(\"a\")", ErrorKind::Type);
}

#[test]
fn float_rejects_non_finite_text() {
    assert_output("print(float(\" 1e3 \"))", &["1000.0"]);
    for src in ["x = float(\"inf\")", "x = float(\"-infinity\")", "x = float(\"nan\")"] {
        assert_error_kind(src, ErrorKind::Evaluation);
    }
}

#[test]
fn random_stays_in_range() {
    assert_success("for i = 1 to 50\n  r = random(1, 3)\n  if r < 1 OR r > 3 then\n    x = 1 / 0\n  endif\nnext i");
    assert_failure("x = random(3, 1)");
}

#[test]
fn natives_can_be_shadowed() {
    assert_output("function str(x)\n  return \"custom\"\nendfunction\nprint(str(1))", &["custom"]);
}

#[test]
fn input_reads_from_console() {
    let mut console = BufferConsole::with_input(["7"]);
    run_source("n = int(input(\"n? \"))\nprint(n * 6)", &mut console).unwrap();
    assert_eq!(console.prompts(), ["n? "]);
    assert_eq!(console.output(), ["42"]);

    let mut empty = BufferConsole::new();
    let e = run_source("x = input()", &mut empty).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Evaluation);

    let mut unused = BufferConsole::with_input(["ignored"]);
    let e = run_source("x = input(1)", &mut unused).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Type);
    assert!(unused.prompts().is_empty());
}

#[test]
fn echo_prints_expression_statements() {
    let mut context = Context::with_console(BufferConsole::new()).with_echo(true);
    context.run(&["x = 4", "x * 2", "print(1)"]).unwrap();
    assert_eq!(context.console().output(), ["8", "1"]);
}

#[test]
fn execution_stops_at_first_error() {
    let mut console = BufferConsole::new();
    assert!(run_source("print(1)\nprint(1 / 0)\nprint(2)", &mut console).is_err());
    assert_eq!(console.output(), ["1"]);
}

#[test]
fn lexical_errors() {
    assert_error_kind("x = 1.2.3", ErrorKind::Lexical);
    assert_error_kind("x = \"open", ErrorKind::Lexical);
    assert_error_kind("x = 1 $ 2", ErrorKind::Lexical);
    assert_error_kind("x = 99999999999999999999", ErrorKind::Lexical);
}

#[test]
fn lexical_error_stops_before_anything_runs() {
    let mut console = BufferConsole::new();
    assert!(run_source("print(1)\nx = @", &mut console).is_err());
    assert!(console.output().is_empty());
}

#[test]
fn syntax_errors() {
    for src in ["x = ",
                "x = (1 + 2",
                "print(1,)",
                "x = 1 +",
                "endif",
                "* 3",
                "if True\n  x = 1\nendif",
                "if True then\n  x = 1\nelse\n  x = 2\nelseif False then\n  x = 3\nendif",
                "for i = 1 to 3\nnext j",
                "return 1",
                "function f(a, a)\nendfunction",
                "function f()\nendprocedure",
                "procedure p()\n  return 1\nendprocedure",
                "function f()\n  function g()\n  endfunction\nendfunction",
                "const const x = 1",
                "x = 1 2"]
    {
        assert_error_kind(src, ErrorKind::Syntax);
    }
}

#[test]
fn unterminated_block_is_reported_at_opener() {
    let e = assert_error_kind("x = 1\nwhile x < 3\n  x = x + 1", ErrorKind::Syntax);
    assert!(e.is_at_end_of_input());
    assert_eq!(e.position().line, 1);

    let e = assert_error_kind("x = (1 +\n2)", ErrorKind::Syntax);
    assert!(!e.is_at_end_of_input());
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_output("// header\n\nx = 1 // trailing\n\nprint(x)", &["1"]);
}

#[test]
fn error_report_points_at_column() {
    let lines = ["x = 1", "y = x / 0"];
    let e = Context::with_console(BufferConsole::new()).run(&lines).unwrap_err();
    let report = e.report(&lines);

    assert!(report.starts_with(" ! ERROR\nEvaluation Error: "));
    assert!(report.ends_with("y = x / 0\n      ^"));
}

#[test]
fn error_caret_follows_tab_indentation() {
    let lines = ["if True then", "\ty = 1 / 0", "endif"];
    let e = Context::with_console(BufferConsole::new()).run(&lines).unwrap_err();

    assert_eq!(e.position(), Position::new(1, 7));
    assert!(e.report(&lines).ends_with("\ty = 1 / 0\n\t      ^"));
}

#[test]
fn repl_session_keeps_state_between_entries() {
    let mut session = Session::new(BufferConsole::new());

    assert_eq!(session.feed("function double(n)"), Feed::Continue);
    assert_eq!(session.prompt(), erl::repl::CONTINUATION_PROMPT);
    assert_eq!(session.feed("  return n * 2"), Feed::Continue);
    assert_eq!(session.feed("endfunction"), Feed::Ran);
    assert_eq!(session.prompt(), erl::repl::PROMPT);

    assert_eq!(session.feed("double(21)"), Feed::Ran);
    assert!(matches!(session.feed("double(x)"), Feed::Failed(_)));
    assert_eq!(session.feed("double(1.5)"), Feed::Ran);
    assert_eq!(session.feed("QUIT()"), Feed::Quit);

    assert_eq!(session.context().console().output(), ["42", "3.0"]);
}

#[test]
fn repl_reports_syntax_errors_without_waiting() {
    let mut session = Session::new(BufferConsole::new());

    let Feed::Failed(report) = session.feed("x = (1 +") else {
        panic!("expected the entry to fail");
    };
    assert!(report.contains("Syntax Error"));
    assert_eq!(session.prompt(), erl::repl::PROMPT);
}
