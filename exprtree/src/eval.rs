#![deny(warnings)]

use crate::tree::{ExprNode, ExprTree, NodeId};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum EvalError {
    BadOp(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::BadOp(op) => write!(f, "unknown operator '{}'", op),
        }
    }
}

/// Outcome of a recorded evaluation: the final value, the order nodes
/// resolved in (operands before their operator, a postorder walk), and
/// each node's value for display.
#[derive(Debug, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub visits: Vec<NodeId>,
    pub results: HashMap<NodeId, f64>,
}

impl ExprTree {
    /// Bottom-up evaluation. Repeated calls return the same value, the
    /// tree is never mutated.
    pub fn eval(&self) -> Result<f64, EvalError> {
        self.eval_node(self.root())
    }

    fn eval_node(&self, id: NodeId) -> Result<f64, EvalError> {
        match self.node(id) {
            ExprNode::Num(num) => Ok(*num),
            ExprNode::Op(op, left, right) => {
                let lhs = self.eval_node(*left)?;
                let rhs = self.eval_node(*right)?;
                Self::apply(op, lhs, rhs)
            }
        }
    }

    // Non-finite results (division by zero, 0^-1, ...) propagate IEEE-754
    // semantics instead of erroring.
    fn apply(op: &str, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match op {
            "+" => Ok(lhs + rhs),
            "-" => Ok(lhs - rhs),
            "*" => Ok(lhs * rhs),
            "/" => Ok(lhs / rhs),
            "^" => Ok(lhs.powf(rhs)),
            _ => Err(EvalError::BadOp(op.to_string())),
        }
    }

    /// Same result as `eval` but also records the visit sequence and the
    /// value each node resolved to.
    pub fn eval_recorded(&self) -> Result<Evaluation, EvalError> {
        let mut visits = Vec::with_capacity(self.len());
        let mut results = HashMap::with_capacity(self.len());
        let value = self.eval_traced(self.root(), &mut visits, &mut results)?;
        Ok(Evaluation { value, visits, results })
    }

    fn eval_traced(
        &self,
        id: NodeId,
        visits: &mut Vec<NodeId>,
        results: &mut HashMap<NodeId, f64>,
    ) -> Result<f64, EvalError> {
        let value = match self.node(id) {
            ExprNode::Num(num) => *num,
            ExprNode::Op(op, left, right) => {
                let lhs = self.eval_traced(*left, visits, results)?;
                let rhs = self.eval_traced(*right, visits, results)?;
                Self::apply(op, lhs, rhs)?
            }
        };
        visits.push(id);
        results.insert(id, value);
        Ok(value)
    }
}
