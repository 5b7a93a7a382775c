#![deny(warnings)]

use crate::tree::{ExprNode, ExprTree, NodeId};
use std::fmt;

/// Order in which nodes are visited and rendered.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Traversal {
    Prefix,
    Infix,
    Postfix,
}

impl ExprTree {
    pub fn render(&self, kind: Traversal) -> String {
        match kind {
            Traversal::Infix => self.infix_string(self.root()),
            Traversal::Prefix | Traversal::Postfix => {
                let mut out = Vec::with_capacity(self.len());
                self.linear_tokens(self.root(), kind, &mut out);
                out.join(" ")
            }
        }
    }

    // prefix and postfix share a shape, only the operator position moves
    fn linear_tokens(&self, id: NodeId, kind: Traversal, out: &mut Vec<String>) {
        match self.node(id) {
            ExprNode::Num(num) => out.push(format!("{}", num)),
            ExprNode::Op(op, left, right) => {
                if kind == Traversal::Prefix {
                    out.push(op.clone());
                }
                self.linear_tokens(*left, kind, out);
                self.linear_tokens(*right, kind, out);
                if kind == Traversal::Postfix {
                    out.push(op.clone());
                }
            }
        }
    }

    // Every operator subtree takes parens, so the output never needs
    // precedence juggling to stay unambiguous.
    fn infix_string(&self, id: NodeId) -> String {
        match self.node(id) {
            ExprNode::Num(num) => format!("{}", num),
            ExprNode::Op(op, left, right) => format!(
                "({}{}{})",
                self.infix_string(*left),
                op,
                self.infix_string(*right)
            ),
        }
    }

    /// Node identities in visitation order, one entry per node. Callers
    /// replay the sequence to highlight nodes step by step.
    pub fn visit_order(&self, kind: Traversal) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.len());
        self.collect_visits(self.root(), kind, &mut order);
        order
    }

    fn collect_visits(&self, id: NodeId, kind: Traversal, order: &mut Vec<NodeId>) {
        match self.node(id) {
            ExprNode::Num(_) => order.push(id),
            ExprNode::Op(_, left, right) => {
                let (left, right) = (*left, *right);
                if kind == Traversal::Prefix {
                    order.push(id);
                }
                self.collect_visits(left, kind, order);
                if kind == Traversal::Infix {
                    order.push(id);
                }
                self.collect_visits(right, kind, order);
                if kind == Traversal::Postfix {
                    order.push(id);
                }
            }
        }
    }
}

impl fmt::Display for ExprTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(Traversal::Infix))
    }
}
