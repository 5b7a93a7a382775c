#![deny(warnings)]

use crate::tree::ParseFailure;
use crate::{precedence, Assoc};
use lexers::{ExprToken, ExprTokenizer, LexError};
use std::fmt;

// Parenthesis handling is strict: every ')' must close a '(' already on
// the stack, and every '(' must be closed by the end of input.
#[derive(Debug, PartialEq)]
pub enum ParseError {
    MissingOParen,
    MissingCParen,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::MissingOParen => write!(f, "missing opening paren"),
            ParseError::MissingCParen => write!(f, "missing closing paren"),
        }
    }
}

#[derive(PartialEq, Debug)]
pub struct RpnExpr(pub Vec<ExprToken>);

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RpnExpr, ParseFailure> {
        Self::parse(&mut ExprTokenizer::new(expr.chars()))
    }

    pub fn parse(lex: &mut impl Iterator<Item = ExprToken>) -> Result<RpnExpr, ParseFailure> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in lex {
            match token {
                ExprToken::Number(_) => out.push(token),
                ExprToken::OParen => stack.push(token),
                ExprToken::CParen => {
                    while !stack.is_empty() && stack.last() != Some(&ExprToken::OParen) {
                        out.push(stack.pop().unwrap());
                    }
                    // peel the matching OParen, it never reaches the output
                    if stack.pop().is_none() {
                        return Err(ParseError::MissingOParen.into());
                    }
                }
                ExprToken::BOp(_) => {
                    let (prec_rhs, assoc_rhs) = precedence(&token);
                    while !stack.is_empty() {
                        let (prec_lhs, _) = precedence(stack.last().unwrap());
                        if prec_lhs < prec_rhs {
                            break;
                        } else if prec_lhs > prec_rhs {
                            out.push(stack.pop().unwrap());
                        } else {
                            match assoc_rhs {
                                Assoc::Left => out.push(stack.pop().unwrap()),
                                Assoc::Right => break,
                            }
                        }
                    }
                    stack.push(token);
                }
                ExprToken::Unknown(lexeme) => {
                    return Err(LexError::from_lexeme(lexeme).into())
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                ExprToken::OParen => return Err(ParseError::MissingCParen.into()),
                token => out.push(token),
            }
        }
        Ok(RpnExpr(out))
    }
}
