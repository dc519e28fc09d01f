use astgen_emit::{emit, DiagnosticSink, EmissionRequest, Emitter, Section, TracingSink};
use proptest::prelude::*;

#[test]
fn test_single_field_variant() {
    let request = EmissionRequest::new("Expr").variant("Grouping -> expression: Expr");
    let result = emit(&request);

    assert!(result.text.contains("pub struct GroupingValue {\n\tpub expression: Expr,\n}"));
    assert!(result.text.contains("\tGrouping(GroupingValue),\n"));
}

#[test]
fn test_two_variants_in_order() {
    let request = EmissionRequest::new("Stmt")
        .variants(["Break -> keyword: Token", "Continue -> keyword: Token"]);
    let result = emit(&request);

    assert!(result.text.ends_with(
        "pub enum Stmt {\n\tBreak(BreakValue),\n\tContinue(ContinueValue),\n}\n"
    ));
}

#[test]
fn test_unit_variant() {
    let result = emit(&EmissionRequest::new("Expr").variant("Literal"));

    assert!(!result.text.contains("LiteralValue"));
    assert!(result.text.contains("\tLiteral,\n"));
}

#[test]
fn test_malformed_variant_only() {
    let result = emit(&EmissionRequest::new("Expr").variant("A -> x -> y"));

    assert_eq!(result.diagnostics.len(), 1);
    assert!(result.text.contains("pub enum Expr {\n}\n"));
    assert!(!result.text.contains("\tA"));
}

#[test]
fn test_literal_enum() {
    let request = EmissionRequest::new("Expr")
        .literals("LiteralValue", ["Number -> f64", "Nil"])
        .variant("Grouping -> expression: Box<Expr>");
    let result = emit(&request);

    assert!(result
        .text
        .contains("pub enum LiteralValue {\n\tNumber(f64),\n\tNil,\n}\n"));
    assert!(result.text.find("LiteralValue").unwrap() < result.text.find("GroupingValue").unwrap());
}

#[test]
fn test_literal_path_types_verbatim() {
    let request = EmissionRequest::new("Expr")
        .literals("LiteralValue", ["String -> std::rc::Rc<str>", "List -> Vec<std::string::String>"])
        .variant("Path -> std::rc::Rc<str>");
    let result = emit(&request);

    assert!(result.text.contains(
        "pub enum LiteralValue {\n\tString(std::rc::Rc<str>),\n\tList(Vec<std::string::String>),\n}\n"
    ));
    assert!(result.text.contains("pub struct PathValue {\n\tpub std::rc::Rc<str>,\n}\n"));
}

#[test]
fn test_empty_request() {
    let result = emit(&EmissionRequest::new("Empty"));

    assert_eq!(result.text, "\npub enum Empty {\n}\n");
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_duplicate_names_pass_through() {
    let request = EmissionRequest::new("Expr").variants(["This -> blame: Token", "This -> blame: Token"]);
    let result = emit(&request);

    assert_eq!(result.text.matches("pub struct ThisValue").count(), 2);
    assert_eq!(result.text.matches("\tThis(ThisValue),\n").count(), 2);
}

#[test]
fn test_imports_not_deduplicated() {
    let request = EmissionRequest::new("Stmt").imports(["crate::token::Token", "crate::token::Token"]);
    let result = emit(&request);

    assert!(result.text.starts_with("use crate::token::Token;\nuse crate::token::Token;\n\n"));
}

#[test]
fn test_diagnostics_from_both_sections() {
    let request = EmissionRequest::new("Expr")
        .literals("LiteralValue", ["True", "", "Nil"])
        .variants(["Unary -> operator: Token, right: Box<Expr>", "Bad -> a -> b"]);
    let result = emit(&request);

    let positions: Vec<_> = result
        .diagnostics
        .iter()
        .map(|d| (d.section, d.index))
        .collect();
    assert_eq!(positions, vec![(Section::Literals, 1), (Section::Variants, 1)]);
    assert!(result.text.contains("\tTrue,\n\tNil,\n"));
}

#[test]
fn test_custom_sink() {
    struct Counter(usize);

    impl DiagnosticSink for Counter {
        fn report(&mut self, _diagnostic: astgen_emit::Diagnostic) {
            self.0 += 1;
        }
    }

    let request = EmissionRequest::new("Expr").variants(["-> x: T", "A -> b -> c", "Ok"]);
    let mut counter = Counter(0);
    let text = Emitter::new().emit(&request, &mut counter);

    assert_eq!(counter.0, 2);
    assert!(text.contains("pub enum Expr {\n\tOk,\n}\n"));
}

#[test]
fn test_tracing_sink_does_not_interrupt() {
    let request = EmissionRequest::new("Expr").variants(["A -> b -> c", "Ok"]);
    let text = Emitter::new().emit(&request, &mut TracingSink);

    assert!(text.contains("\tOk,\n"));
}

#[test]
fn test_full_module() {
    let request = EmissionRequest::new("Expr")
        .imports(["crate::token::Token", "std::rc::Rc"])
        .literals("LiteralValue", ["String -> Rc<str>", "Number -> f64", "Nil"])
        .variants([
            "Binary -> left: Box<Expr>, operator: Token, right: Box<Expr>",
            "\n\t\t\tCall ->\n\t\t\t\tcalee: Box<Expr>,\n\t\t\t\targuments: Vec<Expr>\n\t\t",
            "Broken -> a -> b",
            "Literal(LiteralValue)",
        ])
        .derives(["Debug"])
        .trailing_code("\nimpl Expr {}\n");
    let result = emit(&request);

    assert_eq!(result.diagnostics.len(), 1);
    insta::assert_snapshot!("full_module", result.text);
}

proptest! {
    /// The base enum lists variants in input order.
    #[test]
    fn test_variant_order_preserved(names in prop::collection::vec("[A-Z][a-z]{1,8}", 0..12)) {
        let lines: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(i, name)| if i % 2 == 0 {
                format!("{name} -> value: Box<Expr>")
            } else {
                name.clone()
            })
            .collect();
        let result = emit(&EmissionRequest::new("Node").variants(lines));

        let body = result.text.split("pub enum Node {\n").nth(1).unwrap();
        let members: Vec<&str> = body
            .lines()
            .take_while(|line| *line != "}")
            .map(|line| line.trim().trim_end_matches(',').split('(').next().unwrap())
            .collect();

        prop_assert_eq!(members, names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Emitting equal requests twice gives identical text.
    #[test]
    fn test_emit_idempotent(
        lines in prop::collection::vec("[A-Z][a-z]{0,6}( -> [a-z]{1,5}: [A-Z][a-z]{0,5}(, [a-z]{1,5}: [A-Z][a-z]{0,5})?)?( -> x)?", 0..8),
        literal in proptest::option::of("[A-Z][a-z]{0,8}"),
    ) {
        let mut first = EmissionRequest::new("Expr").variants(lines.clone());
        first.literal_type_name = literal.clone();
        let mut second = EmissionRequest::new("Expr").variants(lines);
        second.literal_type_name = literal;

        prop_assert_eq!(emit(&first).text, emit(&second).text);
    }
}
