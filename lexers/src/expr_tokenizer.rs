#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum ExprToken {
    Unknown(String),
    Number(f64),
    BOp(String),
    OParen,
    CParen,
}

#[derive(Debug, PartialEq)]
pub enum LexError {
    BadNumber(String),
    BadSymbol(String),
}

impl LexError {
    // classify an unrecognized lexeme: digit/dot runs are broken literals
    pub fn from_lexeme(lexeme: String) -> LexError {
        if lexeme.chars().any(|c| c.is_ascii_digit() || c == '.') {
            LexError::BadNumber(lexeme)
        } else {
            LexError::BadSymbol(lexeme)
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LexError::BadNumber(lexeme) => write!(f, "bad numeric literal '{}'", lexeme),
            LexError::BadSymbol(lexeme) => write!(f, "unrecognized symbol '{}'", lexeme),
        }
    }
}

pub struct ExprTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item = char>> ExprTokenizer<I> {
    pub fn new(source: I) -> Self {
        ExprTokenizer { src: Scanner::new(source) }
    }

    fn get_token(&mut self) -> Option<ExprToken> {
        self.src.ignore_ws(); // spaces between tokens carry no meaning
        if let Some(op) = self.src.scan_expr_op() {
            match op.as_ref() {
                "(" => Some(ExprToken::OParen),
                ")" => Some(ExprToken::CParen),
                _ => Some(ExprToken::BOp(op)),
            }
        } else if let Some(run) = self.src.scan_literal_run() {
            match Self::parse_literal(&run) {
                Some(num) => Some(ExprToken::Number(num)),
                None => Some(ExprToken::Unknown(run)),
            }
        } else if self.src.next().is_some() {
            Some(ExprToken::Unknown(self.src.extract_string()))
        } else {
            None
        }
    }

    // A number holds at least one digit, at most one decimal point, and
    // must fit a finite f64.
    fn parse_literal(run: &str) -> Option<f64> {
        if run.chars().filter(|&c| c == '.').count() > 1 {
            return None;
        }
        if !run.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        run.parse::<f64>().ok().filter(|num| num.is_finite())
    }
}

impl<I: Iterator<Item = char>> Iterator for ExprTokenizer<I> {
    type Item = ExprToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

// Eager version of the tokenizer: the whole input either tokenizes
// cleanly or the first unrecognized lexeme reports a LexError.
pub fn tokenize(expr: &str) -> Result<Vec<ExprToken>, LexError> {
    ExprTokenizer::new(expr.chars())
        .map(|token| match token {
            ExprToken::Unknown(lexeme) => Err(LexError::from_lexeme(lexeme)),
            token => Ok(token),
        })
        .collect()
}

///////////////////////////////////////////////////////////////////////////////
