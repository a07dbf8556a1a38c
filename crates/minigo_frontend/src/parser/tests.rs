use super::SyntaxError;
use crate::ast::*;
use crate::recognize;

const HELLO: &str = "package main;
import \"fmt\";
func main() {
fmt.Println(\"hello\")
}
";

fn test_recognizes(source: &str, should_recognize: bool) {
    let recognized = recognize(source);

    match (recognized, should_recognize) {
        (Err(err), true) => panic!("failed to recognize: {source:?}, error: {err}"),
        (Ok(program), false) => panic!("unexpectedly recognized: {source:?} as {program:?}"),
        _ => {}
    }
}

#[test]
fn hello() {
    assert_eq!(
        recognize(HELLO),
        Ok(Program {
            package_name: "main",
            import: ImportDecl { path: "\"fmt\"" },
            function: FuncDecl {
                name: "main",
                body: Statement {
                    argument: "\"hello\"",
                },
            },
        })
    );
}

#[test]
fn no_newlines() {
    test_recognizes(
        "package main;import \"fmt\";func main(){fmt.Println(\"hi\")}",
        true,
    );
}

#[test]
fn spaces() {
    test_recognizes(
        "  package  main ;  import  \"fmt\"  ;  func  main  (  )  {  fmt . Println  (  \"hi\"  )  }  ",
        true,
    );
}

#[test]
fn other_names() {
    let program = recognize(
        "package demo; import \"os\"; func run() { fmt.Println(\"a \\\"b\\\"\") }",
    )
    .unwrap();

    assert_eq!(program.package_name, "demo");
    assert_eq!(program.import.path, "\"os\"");
    assert_eq!(program.function.name, "run");
    assert_eq!(program.function.body.argument, "\"a \\\"b\\\"\"");
}

#[test]
fn illegal_characters_are_skipped() {
    test_recognizes(
        "package main; @ import \"fmt\"; func main() { fmt.Println(\"x\") } #",
        true,
    );
}

#[test]
fn missing_import_semicolon() {
    let source = HELLO.replacen("\"fmt\";", "\"fmt\"", 1);

    assert_eq!(
        recognize(&source),
        Err(SyntaxError::Unexpected {
            expected: "`;`",
            found: "func".to_owned(),
            line: 3,
            span: (27..31).into(),
        })
    );

    let message = recognize(&source).unwrap_err().to_string();
    assert_eq!(message, "syntax error at 'func' on line 3: expected `;`");
}

#[test]
fn incomplete_input() {
    let err = recognize("package main;\nimport \"fmt\";\nfunc main() {").unwrap_err();

    assert_eq!(
        err,
        SyntaxError::IncompleteInput {
            expected: "keyword `fmt`",
            span: (41..41).into(),
        }
    );
    assert_eq!(err.line(), None);
    assert_eq!(
        err.to_string(),
        "syntax error: incomplete input, expected keyword `fmt`"
    );
}

#[test]
fn empty_input() {
    let err = recognize("").unwrap_err();
    assert_eq!(err.expected(), "keyword `package`");
    assert!(matches!(err, SyntaxError::IncompleteInput { .. }));
}

#[test]
fn number_reports_parsed_value() {
    let err = recognize("package 007;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error at '7' on line 1: expected an identifier"
    );
}

#[test]
fn trailing_tokens() {
    let source = format!("{HELLO}fmt");
    let err = recognize(&source).unwrap_err();

    assert_eq!(err.expected(), "end of input");
    assert_eq!(err.line(), Some(6));
}

#[test]
fn first_mismatch_wins() {
    let err = recognize("package 1; import 2; func 3").unwrap_err();
    assert_eq!(err.line(), Some(1));
    assert_eq!(err.span(), (8..9).into());
}

#[test]
fn missing_paren() {
    test_recognizes("package main; import \"fmt\"; func main( { fmt.Println(\"x\") }", false);
}

#[test]
fn arithmetic_is_not_a_statement() {
    test_recognizes("package main; import \"fmt\"; func main() { 1 + 2 }", false);
}

#[test]
fn println_needs_string() {
    test_recognizes("package main; import \"fmt\"; func main() { fmt.Println(42) }", false);
    test_recognizes("package main; import \"fmt\"; func main() { fmt.Println(x) }", false);
}

#[test]
fn import_needs_string() {
    test_recognizes("package main; import fmt; func main() { fmt.Println(\"x\") }", false);
}

#[test]
fn no_statement_lists() {
    test_recognizes(
        "package main; import \"fmt\"; func main() { fmt.Println(\"a\") fmt.Println(\"b\") }",
        false,
    );
}

#[test]
fn wrong_case() {
    test_recognizes("PACKAGE main; import \"fmt\"; func main() { fmt.Println(\"x\") }", false);
    test_recognizes("package main; import \"fmt\"; func main() { fmt.println(\"x\") }", false);
}

#[test]
fn unterminated_string() {
    test_recognizes("package main; import \"fmt; func main() { fmt.Println(\"x\") }", false);
}
