use pretty_assertions::assert_eq;

use crate::expression::Expression;
use crate::parser::constants::MAX_DEPTH;
use crate::parser::lexer::{TokenKind, tokenize};
use crate::parser::{ParseError, parse_expression};

#[test]
fn test_parse_single_number() {
    assert_eq!(parse_expression("42"), Ok(Expression::number(42.0)));
    assert_eq!(parse_expression("  3.25 "), Ok(Expression::number(3.25)));
    assert_eq!(parse_expression("1.5e3"), Ok(Expression::number(1500.0)));
    assert_eq!(parse_expression(".5"), Ok(Expression::number(0.5)));
}

#[test]
fn test_parse_reference_expression() {
    let expected = Expression::subtract(
        Expression::divide(
            Expression::number(25.0),
            Expression::multiply(
                Expression::number(5.0),
                Expression::add(
                    Expression::number(16.0),
                    Expression::divide(Expression::number(-8.0), Expression::number(4.0)),
                ),
            ),
        ),
        Expression::number(8.0),
    );
    assert_eq!(parse_expression("25 / (5 * (16 + -8 / 4)) - 8"), Ok(expected));
}

#[test]
fn test_precedence_and_associativity() {
    assert_eq!(
        parse_expression("1 + 2 * 3"),
        Ok(Expression::add(
            Expression::number(1.0),
            Expression::multiply(Expression::number(2.0), Expression::number(3.0)),
        ))
    );
    assert_eq!(
        parse_expression("8 - 4 - 2"),
        Ok(Expression::subtract(
            Expression::subtract(Expression::number(8.0), Expression::number(4.0)),
            Expression::number(2.0),
        ))
    );
    assert_eq!(
        parse_expression("8 / 4 / 2").map(|e| e.evaluate()),
        Ok(1.0)
    );
}

#[test]
fn test_unicode_operators() {
    assert_eq!(
        parse_expression("6 × 2 ÷ 3"),
        parse_expression("6 * 2 / 3")
    );
}

#[test]
fn test_unary_minus() {
    assert_eq!(parse_expression("--3"), Ok(Expression::number(3.0)));
    assert_eq!(
        parse_expression("-(1 + 2)"),
        Ok(Expression::multiply(
            Expression::number(-1.0),
            Expression::add(Expression::number(1.0), Expression::number(2.0)),
        ))
    );
    assert_eq!(
        parse_expression("2 * -3"),
        Ok(Expression::multiply(
            Expression::number(2.0),
            Expression::number(-3.0)
        ))
    );
}

#[test]
fn test_display_output_parses_back() {
    let sources = [
        "25 / (5 * (16 + -8 / 4)) - 8",
        "1 - (2 - 3)",
        "1 / (2 * 3)",
        "(1 + 2) * (3 - -4)",
        "0.125 + 1000000",
    ];
    for source in sources {
        let parsed = parse_expression(source);
        assert!(parsed.is_ok(), "failed to parse {}", source);
        if let Ok(expr) = parsed {
            let rendered = format!("{}", expr);
            assert_eq!(rendered, source);
            assert_eq!(parse_expression(&rendered), Ok(expr));
        }
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(parse_expression(""), Err(ParseError::EmptyInput));
    assert_eq!(parse_expression("   "), Err(ParseError::EmptyInput));
}

#[test]
fn test_unexpected_character() {
    assert_eq!(
        parse_expression("2 + x"),
        Err(ParseError::UnexpectedCharacter { ch: 'x', position: 4 })
    );
}

#[test]
fn test_invalid_number() {
    assert_eq!(
        parse_expression("1.2.3"),
        Err(ParseError::InvalidNumber("1.2.3".to_string()))
    );
}

#[test]
fn test_unexpected_end() {
    assert_eq!(parse_expression("1 +"), Err(ParseError::UnexpectedEnd));
    assert_eq!(parse_expression("(1 + 2"), Err(ParseError::UnexpectedEnd));
}

#[test]
fn test_unexpected_token() {
    assert_eq!(
        parse_expression("1 2"),
        Err(ParseError::UnexpectedToken {
            found: "number 2".to_string(),
            position: 2,
        })
    );
    assert_eq!(
        parse_expression("(1 + 2))"),
        Err(ParseError::UnexpectedToken {
            found: "')'".to_string(),
            position: 7,
        })
    );
    assert_eq!(
        parse_expression("* 3"),
        Err(ParseError::UnexpectedToken {
            found: "operator '*'".to_string(),
            position: 0,
        })
    );
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize("12 ×(3)");
    assert!(tokens.is_ok());
    if let Ok(tokens) = tokens {
        let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 3, 5, 6, 7]);
        assert_eq!(tokens[0].kind, TokenKind::Number(12.0));
        assert_eq!(tokens[2].kind, TokenKind::LeftParen);
    }
}

#[test]
fn test_deep_parentheses_are_rejected() {
    let input = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
    assert_eq!(
        parse_expression(&input),
        Err(ParseError::TooDeep {
            limit: MAX_DEPTH,
            position: MAX_DEPTH,
        })
    );
}

#[test]
fn test_long_unary_minus_run_is_rejected() {
    let input = format!("{}1", "-".repeat(200_000));
    assert_eq!(
        parse_expression(&input),
        Err(ParseError::TooDeep {
            limit: MAX_DEPTH,
            position: MAX_DEPTH,
        })
    );
}

#[test]
fn test_long_operator_chain_is_rejected() {
    let input = vec!["1"; 100_000].join(" + ");
    let result = parse_expression(&input);
    assert!(
        matches!(result, Err(ParseError::TooDeep { limit, .. }) if limit == MAX_DEPTH),
        "expected TooDeep, got {:?}",
        result.map(|e| e.depth())
    );
}

#[test]
fn test_nesting_within_limit_is_accepted() {
    let depth = MAX_DEPTH - 1;
    let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_expression(&input), Ok(Expression::number(1.0)));

    let chain = vec!["2"; MAX_DEPTH].join(" * ");
    let parsed = parse_expression(&chain);
    assert!(parsed.is_ok());
    if let Ok(expr) = parsed {
        assert_eq!(expr.depth(), MAX_DEPTH);
        assert_eq!(expr.leaf_count(), MAX_DEPTH);
    }
}
