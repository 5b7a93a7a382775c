pub use lexers::{ExprToken, ExprTokenizer, LexError};

pub mod parser;
pub use parser::{ParseError, RpnExpr, ShuntingParser};
#[cfg(test)]
mod parser_test;

mod tree;
pub use tree::{BuildError, ExprNode, ExprTree, NodeId, ParseFailure};

mod traverse;
pub use traverse::Traversal;

mod eval;
pub use eval::{EvalError, Evaluation};
#[cfg(test)]
mod eval_test;

mod layout;
pub use layout::LayoutParams;

#[derive(PartialEq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

// Higher binds tighter. OParen sits at the bottom as a sentinel so no
// precedence comparison ever pops it. Every operator associates left,
// including '^': 2^3^2 groups as (2^3)^2. Flipping '^' to Assoc::Right
// here is all it takes to get the mathematical grouping instead.
pub fn precedence(token: &ExprToken) -> (usize, Assoc) {
    match token {
        ExprToken::OParen => (1, Assoc::Left),
        ExprToken::BOp(op) if op == "+" => (2, Assoc::Left),
        ExprToken::BOp(op) if op == "-" => (2, Assoc::Left),
        ExprToken::BOp(op) if op == "*" => (3, Assoc::Left),
        ExprToken::BOp(op) if op == "/" => (3, Assoc::Left),
        ExprToken::BOp(op) if op == "^" => (4, Assoc::Left),
        _ => (99, Assoc::Left),
    }
}
