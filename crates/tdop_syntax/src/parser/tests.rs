#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on tree shape for each syntactic form (checked through the bracketed rendering) and on the
/// fail-fast error behavior.
mod tests {
    use super::*;
    use crate::config::PrecedenceTable;

    fn parse_str(source: &str) -> String {
        parse(source).unwrap().to_string()
    }

    fn expr_str(source: &str) -> String {
        parse_expression(source).unwrap().to_string()
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    #[test]
    fn test_binary_operators_are_left_associative() {
        assert_eq!(expr_str("1-2-3"), "(- (- INT(1) INT(2)) INT(3))");
        assert_eq!(expr_str("8/4/2"), "(/ (/ INT(8) INT(4)) INT(2))");
    }

    #[test]
    fn test_multiplicative_binds_tighter_than_additive() {
        assert_eq!(expr_str("1+2*3"), "(+ INT(1) (* INT(2) INT(3)))");
        assert_eq!(expr_str("1*2+3"), "(+ (* INT(1) INT(2)) INT(3))");
    }

    #[test]
    fn test_comparison_binds_looser_than_arithmetic() {
        assert_eq!(expr_str("a + 1 < b * 2"), "(< (+ ID(a) INT(1)) (* ID(b) INT(2)))");
    }

    #[test]
    fn test_logical_operators_share_one_level() {
        assert_eq!(expr_str("a || b && c"), "(&& (|| ID(a) ID(b)) ID(c))");
        assert_eq!(expr_str("a && b || c"), "(|| (&& ID(a) ID(b)) ID(c))");
    }

    #[test]
    fn test_parentheses_override_precedence_and_are_dropped() {
        assert_eq!(expr_str("(1+2)*3"), "(* (+ INT(1) INT(2)) INT(3))");
        assert_eq!(expr_str("((x))"), "ID(x)");
    }

    #[test]
    fn test_unary_minus_nests() {
        let tree = parse_expression("1 + - - 3").unwrap();
        assert_eq!(tree.to_string(), "(+ INT(1) (- (- INT(3))))");

        let outer = tree.child(1).unwrap();
        assert_eq!(outer.label().kind, "-");
        assert_eq!(outer.len(), 1);
        let inner = outer.child(0).unwrap();
        assert_eq!(inner.label().kind, "-");
        assert_eq!(inner.len(), 1);
        assert!(inner.child(0).unwrap().is_leaf());
    }

    #[test]
    fn test_unary_minus_binds_tighter_than_binary() {
        assert_eq!(expr_str("-a*b"), "(* (- ID(a)) ID(b))");
    }

    // ========================================================================
    // Statements
    // ========================================================================

    #[test]
    fn test_end_to_end_block() {
        let tree = parse("{ i = 0; while i<10 { i = i+1; } }").unwrap();
        assert_eq!(tree.label().kind, "{");
        assert_eq!(tree.len(), 2);

        let assign = tree.child(0).unwrap();
        assert_eq!(assign.to_string(), "(= ID(i) INT(0))");

        let lp = tree.child(1).unwrap();
        assert_eq!(lp.label().kind, "WHILE");
        assert_eq!(lp.child(0).unwrap().to_string(), "(< ID(i) INT(10))");
        let body = lp.child(1).unwrap();
        assert_eq!(body.label().kind, "{");
        assert_eq!(body.len(), 1);
        assert_eq!(body.child(0).unwrap().label().kind, "=");
    }

    #[test]
    fn test_if_else() {
        assert_eq!(
            parse_str("if a < b x = 1; else { y = 2; }"),
            "(IF (< ID(a) ID(b)) (= ID(x) INT(1)) ({ (= ID(y) INT(2))))"
        );
    }

    #[test]
    fn test_if_without_else_has_two_children() {
        let tree = parse("if x x = 1;").unwrap();
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_while_break() {
        assert_eq!(parse_str("while 1 break;"), "(WHILE INT(1) BREAK)");
    }

    #[test]
    fn test_empty_statement_is_explicit_leaf() {
        let tree = parse("{ ; x = 1; }").unwrap();
        assert_eq!(tree.to_string(), "({ ; (= ID(x) INT(1)))");
        assert!(tree.child(0).unwrap().is_empty_statement());
        assert!(!tree.child(1).unwrap().is_empty_statement());
    }

    #[test]
    fn test_identifier_without_assignment_is_empty_statement() {
        let tree = parse("x;").unwrap();
        assert!(tree.is_empty_statement());
    }

    #[test]
    fn test_empty_block() {
        let tree = parse("{}").unwrap();
        assert!(tree.is_leaf());
        assert_eq!(tree.to_string(), "{");
    }

    #[test]
    fn test_sample_program() {
        let tree = parse(grammar::SAMPLE_PROGRAM).unwrap();
        assert_eq!(tree.len(), 2);
        let body = tree.child(1).unwrap().child(1).unwrap();
        assert_eq!(body.len(), 3);
        assert_eq!(body.child(1).unwrap().label().kind, "IF");
        assert_eq!(body.child(1).unwrap().len(), 3);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let source = "{ a = 1; if a == 1 { a = -a; } }";
        assert_eq!(parse(source).unwrap(), parse(source).unwrap());
    }

    // ========================================================================
    // Errors
    // ========================================================================

    #[test]
    fn test_missing_expression_is_unexpected_token() {
        let err = parse("x = ;").unwrap_err();
        match err {
            SyntaxError::UnexpectedToken { expected, found, .. } => {
                assert_eq!(expected, vec!["(", "-", "INT", "ID"]);
                assert_eq!(found.map(|t| t.kind), Some(";".to_string()));
            }
            other => panic!("expected UnexpectedToken, got {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_character() {
        let err = parse("x = @;").unwrap_err();
        assert!(matches!(err, SyntaxError::UnrecognizedInput { found: '@', offset: 4, .. }));
    }

    #[test]
    fn test_trailing_input() {
        let err = parse("x = 1; y = 2;").unwrap_err();
        match err {
            SyntaxError::TrailingInput { found, .. } => assert_eq!(found.display_text(), "ID(y)"),
            other => panic!("expected TrailingInput, got {other:?}"),
        }
    }

    #[test]
    fn test_unclosed_block() {
        let err = parse("{ x = 1;").unwrap_err();
        assert_eq!(err.to_string(), "expected }, found end of input");
    }

    #[test]
    fn test_unclosed_paren() {
        let err = parse("x = (1;").unwrap_err();
        assert_eq!(err.to_string(), "expected ), found ;");
    }

    #[test]
    fn test_empty_input() {
        let err = parse("").unwrap_err();
        assert_eq!(err.to_string(), "expected ;, found end of input");
    }

    #[test]
    fn test_missing_semicolon_after_assignment() {
        let err = parse("x = 1").unwrap_err();
        assert_eq!(err.to_string(), "expected ;, found end of input");
    }

    #[test]
    fn test_deeply_nested_groups_fail_cleanly() {
        let err = parse_expression(&"(".repeat(10_000)).unwrap_err();
        match err {
            SyntaxError::NestingTooDeep { limit, found, .. } => {
                assert_eq!(limit, crate::config::MAX_NESTING_DEPTH);
                assert_eq!(found.kind, "(");
                assert_eq!(found.span.start, limit);
            }
            other => panic!("expected NestingTooDeep, got {other:?}"),
        }
    }

    #[test]
    fn test_deeply_nested_statements_fail_cleanly() {
        let blocks = parse(&"{".repeat(10_000)).unwrap_err();
        assert!(matches!(blocks, SyntaxError::NestingTooDeep { .. }));

        let loops = parse(&"while 1 ".repeat(10_000)).unwrap_err();
        assert!(matches!(loops, SyntaxError::NestingTooDeep { .. }));

        let negations = parse(&format!("x = {}1;", "-".repeat(10_000))).unwrap_err();
        assert!(matches!(negations, SyntaxError::NestingTooDeep { .. }));
    }

    #[test]
    fn test_nesting_up_to_the_limit_parses() {
        let depth = 100;
        let source = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse(&source).unwrap().to_string(), "(= ID(x) INT(1))");

        let table = grammar::statement_patterns();
        let config = ParserConfig::new().with_max_depth(2);
        assert!(parse_with("{ { x = 1; } }", &table, config.clone()).is_ok());
        let err = parse_with("{ { { x = 1; } } }", &table, config).unwrap_err();
        assert_eq!(err.to_string(), "nesting deeper than 2 levels at {");
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    #[test]
    fn test_injected_precedence_changes_shape() {
        let table = grammar::statement_patterns();
        let config = ParserConfig::new().with_precedence(PrecedenceTable::new([vec!["*"], vec!["+"]]));
        let tree = parse_with("x = 1+2*3;", &table, config).unwrap();
        assert_eq!(tree.to_string(), "(= ID(x) (* (+ INT(1) INT(2)) INT(3)))");
    }

    #[test]
    fn test_empty_precedence_table_parses_primaries_only() {
        let table = grammar::statement_patterns();
        let config = ParserConfig::new().with_precedence(PrecedenceTable::default());
        let tree = parse_with("x = -1;", &table, config.clone()).unwrap();
        assert_eq!(tree.to_string(), "(= ID(x) (- INT(1)))");

        let err = parse_with("x = 1 + 2;", &table, config).unwrap_err();
        assert_eq!(err.to_string(), "expected ;, found +");
    }
}
