#![deny(warnings)]

use crate::tree::{ExprNode, ExprTree, NodeId};
use std::collections::HashMap;

/// Placement parameters for `ExprTree::layout`: where the root lands and
/// the base steps between levels. Callers own pan/zoom on top of these.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LayoutParams {
    pub origin_x: f64,
    pub origin_y: f64,
    pub h_spacing: f64,
    pub v_spacing: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            origin_x: 0.0,
            origin_y: 0.0,
            h_spacing: 40.0,
            v_spacing: 80.0,
        }
    }
}

impl ExprTree {
    /// Children of a node at depth `d` spread `h_spacing * 2^(depth - d)`
    /// to either side and sit `v_spacing` below it. Offsets halve per
    /// level, so sibling subtrees cannot overlap; the price is a total
    /// width exponential in tree depth.
    pub fn layout(&self, params: &LayoutParams) -> HashMap<NodeId, (f64, f64)> {
        let mut positions = HashMap::with_capacity(self.len());
        let spread = params.h_spacing * f64::powi(2.0, self.depth() as i32);
        self.place(
            self.root(),
            params.origin_x,
            params.origin_y,
            spread,
            params.v_spacing,
            &mut positions,
        );
        positions
    }

    fn place(
        &self,
        id: NodeId,
        x: f64,
        y: f64,
        spread: f64,
        vstep: f64,
        positions: &mut HashMap<NodeId, (f64, f64)>,
    ) {
        positions.insert(id, (x, y));
        if let ExprNode::Op(_, left, right) = self.node(id) {
            let (left, right) = (*left, *right);
            self.place(left, x - spread, y + vstep, spread / 2.0, vstep, positions);
            self.place(right, x + spread, y + vstep, spread / 2.0, vstep, positions);
        }
    }
}
