use log::debug;

use crate::expression::ast::{Expression, Node};

impl Expression {
    /// Deep copy built from the leaves up. No node of the result is shared
    /// with `self`.
    pub fn copy(&self) -> Expression {
        match self.node() {
            Node::Leaf(n) => Expression::Number(n),
            Node::Binary(op, l, r) => Expression::binary(op, l.copy(), r.copy()),
        }
    }

    /// Returns a new tree in which every leaf equal to `target` is replaced
    /// by its own copy of `replacement`.
    ///
    /// Matching is exact `f64` equality, so a NaN target never matches. The
    /// receiver is left untouched and a fresh tree is returned even when no
    /// leaf matches.
    pub fn replace(&self, target: f64, replacement: &Expression) -> Expression {
        debug!("Replacing leaves equal to {} with {}", target, replacement);

        let result = self.replace_leaves(target, replacement);

        debug!("Replacement produced: {}", result);
        result
    }

    fn replace_leaves(&self, target: f64, replacement: &Expression) -> Expression {
        match self.node() {
            Node::Leaf(n) if n == target => replacement.copy(),
            Node::Leaf(n) => Expression::Number(n),
            Node::Binary(op, l, r) => Expression::binary(
                op,
                l.replace_leaves(target, replacement),
                r.replace_leaves(target, replacement),
            ),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self.operands() {
            None => 1,
            Some((l, r)) => l.leaf_count() + r.leaf_count(),
        }
    }

    /// Number of nodes on the longest root-to-leaf path; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self.operands() {
            None => 1,
            Some((l, r)) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Whether any leaf compares equal to `value`.
    pub fn contains_leaf(&self, value: f64) -> bool {
        match self.node() {
            Node::Leaf(n) => n == value,
            Node::Binary(_, l, r) => l.contains_leaf(value) || r.contains_leaf(value),
        }
    }
}

impl Clone for Expression {
    fn clone(&self) -> Self {
        self.copy()
    }
}
