#![deny(warnings)]

use crate::parser::{ParseError, RpnExpr, ShuntingParser};
use lexers::{ExprToken, LexError};
use std::fmt;

/// Stable handle to a node inside its `ExprTree`. Callers key side state
/// (highlight markers, cached results) off `NodeId` maps instead of
/// mutating the tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(pub(crate) usize);

#[derive(Clone, PartialEq, Debug)]
pub enum ExprNode {
    Num(f64),
    Op(String, NodeId, NodeId), // operator, left child, right child
}

#[derive(Debug, PartialEq)]
pub enum BuildError {
    MissingOperand(String),
    LeftoverOperands(usize),
    BadToken(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BuildError::MissingOperand(op) => {
                write!(f, "operator '{}' is short of operands", op)
            }
            BuildError::LeftoverOperands(n) => {
                write!(f, "{} operand(s) left unused", n)
            }
            BuildError::BadToken(token) => write!(f, "token {} cannot appear in postfix", token),
        }
    }
}

// Any failure on the way from source text to a tree.
#[derive(Debug, PartialEq)]
pub enum ParseFailure {
    Lex(LexError),
    Parse(ParseError),
    Build(BuildError),
}

impl From<LexError> for ParseFailure {
    fn from(err: LexError) -> Self {
        ParseFailure::Lex(err)
    }
}

impl From<ParseError> for ParseFailure {
    fn from(err: ParseError) -> Self {
        ParseFailure::Parse(err)
    }
}

impl From<BuildError> for ParseFailure {
    fn from(err: BuildError) -> Self {
        ParseFailure::Build(err)
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseFailure::Lex(err) => write!(f, "{}", err),
            ParseFailure::Parse(err) => write!(f, "{}", err),
            ParseFailure::Build(err) => write!(f, "{}", err),
        }
    }
}

/// Binary expression tree. Leaves are numbers, inner nodes are binary
/// operators. Nodes live in an arena indexed by `NodeId`; the tree never
/// changes after construction, a new expression builds a new tree.
#[derive(Debug, PartialEq)]
pub struct ExprTree {
    nodes: Vec<ExprNode>,
    root: NodeId,
}

impl ExprTree {
    /// Full pipeline from source text: tokenize, convert to postfix,
    /// build. `Ok(None)` means the input held no tokens at all.
    pub fn parse(expr: &str) -> Result<Option<ExprTree>, ParseFailure> {
        let rpn = ShuntingParser::parse_str(expr)?;
        Ok(ExprTree::build(&rpn)?)
    }

    /// Fold a postfix token sequence into a tree: numbers push leaves,
    /// an operator wraps the two topmost entries (right popped first).
    pub fn build(rpn: &RpnExpr) -> Result<Option<ExprTree>, BuildError> {
        let mut nodes = Vec::new();
        let mut stack = Vec::new();
        for token in rpn.0.iter() {
            match token {
                ExprToken::Number(num) => {
                    nodes.push(ExprNode::Num(*num));
                    stack.push(NodeId(nodes.len() - 1));
                }
                ExprToken::BOp(op) => {
                    let right = stack
                        .pop()
                        .ok_or_else(|| BuildError::MissingOperand(op.clone()))?;
                    let left = stack
                        .pop()
                        .ok_or_else(|| BuildError::MissingOperand(op.clone()))?;
                    nodes.push(ExprNode::Op(op.clone(), left, right));
                    stack.push(NodeId(nodes.len() - 1));
                }
                other => return Err(BuildError::BadToken(format!("{:?}", other))),
            }
        }
        match stack.len() {
            0 => Ok(None),
            1 => Ok(Some(ExprTree { nodes, root: stack[0] })),
            n => Err(BuildError::LeftoverOperands(n - 1)),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &ExprNode {
        &self.nodes[id.0]
    }

    /// Total node count, operators plus operands.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Levels below the root: 0 for a lone leaf.
    pub fn depth(&self) -> usize {
        self.node_depth(self.root)
    }

    fn node_depth(&self, id: NodeId) -> usize {
        match self.node(id) {
            ExprNode::Num(_) => 0,
            ExprNode::Op(_, left, right) => {
                1 + self.node_depth(*left).max(self.node_depth(*right))
            }
        }
    }
}
