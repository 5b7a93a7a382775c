use crate::parser::{ParseError, RpnExpr, ShuntingParser};
use crate::tree::ParseFailure;
use lexers::{ExprToken, LexError};

#[test]
fn parse_mixed_precedence() {
    let rpn = ShuntingParser::parse_str("3+4*2/(1-5)^2").unwrap();
    let expect = [
        ExprToken::Number(3.0),
        ExprToken::Number(4.0),
        ExprToken::Number(2.0),
        ExprToken::BOp(format!("*")),
        ExprToken::Number(1.0),
        ExprToken::Number(5.0),
        ExprToken::BOp(format!("-")),
        ExprToken::Number(2.0),
        ExprToken::BOp(format!("^")),
        ExprToken::BOp(format!("/")),
        ExprToken::BOp(format!("+")),
    ];
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn.0[i], *token);
    }
    assert_eq!(rpn.0.len(), expect.len());
}

#[test]
fn parse_parens_bind_first() {
    let rpn = ShuntingParser::parse_str("3 + 4 * (2 - 1)").unwrap();
    let expect = [
        ExprToken::Number(3.0),
        ExprToken::Number(4.0),
        ExprToken::Number(2.0),
        ExprToken::Number(1.0),
        ExprToken::BOp(format!("-")),
        ExprToken::BOp(format!("*")),
        ExprToken::BOp(format!("+")),
    ];
    assert_eq!(rpn, RpnExpr(expect.to_vec()));
}

// '^' pops same-precedence '^' off the stack, grouping (2^3)^2
#[test]
fn parse_power_groups_left() {
    let rpn = ShuntingParser::parse_str("2 ^ 3 ^ 2").unwrap();
    let expect = [
        ExprToken::Number(2.0),
        ExprToken::Number(3.0),
        ExprToken::BOp(format!("^")),
        ExprToken::Number(2.0),
        ExprToken::BOp(format!("^")),
    ];
    assert_eq!(rpn, RpnExpr(expect.to_vec()));
}

#[test]
fn parse_same_precedence_pops() {
    let rpn = ShuntingParser::parse_str("10 - 2 - 3").unwrap();
    let expect = [
        ExprToken::Number(10.0),
        ExprToken::Number(2.0),
        ExprToken::BOp(format!("-")),
        ExprToken::Number(3.0),
        ExprToken::BOp(format!("-")),
    ];
    assert_eq!(rpn, RpnExpr(expect.to_vec()));
}

#[test]
fn unbalanced_parens_are_errors() {
    let rpn = ShuntingParser::parse_str("(1 + 2");
    assert_eq!(rpn, Err(ParseFailure::Parse(ParseError::MissingCParen)));

    let rpn = ShuntingParser::parse_str("1 + 2)");
    assert_eq!(rpn, Err(ParseFailure::Parse(ParseError::MissingOParen)));

    let rpn = ShuntingParser::parse_str("((3 + 4) * 2");
    assert_eq!(rpn, Err(ParseFailure::Parse(ParseError::MissingCParen)));
}

#[test]
fn bad_lexemes_surface_as_lex_errors() {
    let rpn = ShuntingParser::parse_str("3..4");
    assert_eq!(
        rpn,
        Err(ParseFailure::Lex(LexError::BadNumber(format!("3..4"))))
    );

    let rpn = ShuntingParser::parse_str("3 $ 4");
    assert_eq!(
        rpn,
        Err(ParseFailure::Lex(LexError::BadSymbol(format!("$"))))
    );
}

#[test]
fn empty_inputs_yield_empty_rpn() {
    assert_eq!(ShuntingParser::parse_str(""), Ok(RpnExpr(vec![])));
    assert_eq!(ShuntingParser::parse_str("  \t "), Ok(RpnExpr(vec![])));
    assert_eq!(ShuntingParser::parse_str("()"), Ok(RpnExpr(vec![])));
}
