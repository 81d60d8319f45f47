//! Expression trees
//!
//! An [`Expression`] is either a [`Factor`] leaf holding one integer or a
//! [`Binary`] node owning exactly two children. Children are boxed, so a
//! tree is always finite and acyclic, and a `Binary` without both children
//! cannot be built. There are no mutating operations: once a tree exists it
//! is only read.

use std::fmt;

/// An immutable expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Leaf holding a single integer
    Factor(Factor),
    /// Internal node with a left and a right child
    Binary(Binary),
}

/// Leaf node: a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Factor {
    i: i64,
}

/// Internal node: exactly two exclusively owned children.
///
/// No operator is stored; the node expresses composition only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binary {
    left: Box<Expression>,
    right: Box<Expression>,
}

impl Factor {
    /// Create a leaf.
    pub fn new(i: i64) -> Self {
        Self { i }
    }

    /// The integer held by this leaf.
    pub fn value(&self) -> i64 {
        self.i
    }
}

impl Binary {
    /// Create an internal node from its two children.
    pub fn new(left: Expression, right: Expression) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The left child.
    pub fn left(&self) -> &Expression {
        &self.left
    }

    /// The right child.
    pub fn right(&self) -> &Expression {
        &self.right
    }
}

impl Expression {
    /// Create a `Factor` expression.
    pub fn factor(i: i64) -> Self {
        Expression::Factor(Factor::new(i))
    }

    /// Create a `Binary` expression.
    pub fn binary(left: Expression, right: Expression) -> Self {
        Expression::Binary(Binary::new(left, right))
    }

    /// Build a left-skewed chain over `leaves`.
    ///
    /// `[a, b, c]` becomes `Binary(Binary(a, b), c)`, so `n + 1` leaves give
    /// `n` nested `Binary` nodes. Returns `None` for an empty input.
    pub fn left_chain<I>(leaves: I) -> Option<Expression>
    where
        I: IntoIterator<Item = Expression>,
    {
        let mut leaves = leaves.into_iter();
        let first = leaves.next()?;
        Some(leaves.fold(first, Expression::binary))
    }

    /// Whether this is a leaf.
    pub fn is_factor(&self) -> bool {
        matches!(self, Expression::Factor(_))
    }

    /// Whether this is an internal node.
    pub fn is_binary(&self) -> bool {
        matches!(self, Expression::Binary(_))
    }

    /// Number of nested `Binary` levels on the longest root-to-leaf path.
    ///
    /// A `Factor` has depth 0. This equals the bracket nesting depth of the
    /// rendered string.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Expression::Factor(_) => deepest = deepest.max(depth),
                Expression::Binary(b) => {
                    stack.push((b.left(), depth + 1));
                    stack.push((b.right(), depth + 1));
                }
            }
        }
        deepest
    }

    /// Number of `Factor` leaves.
    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|node| node.is_factor()).count()
    }

    /// Total number of nodes, leaves included.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Pre-order walk over every node, without recursion.
    fn nodes(&self) -> impl Iterator<Item = &Expression> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            if let Expression::Binary(b) = node {
                stack.push(b.right());
                stack.push(b.left());
            }
            Some(node)
        })
    }
}

impl From<i64> for Expression {
    fn from(i: i64) -> Self {
        Expression::factor(i)
    }
}

impl From<Factor> for Expression {
    fn from(factor: Factor) -> Self {
        Expression::Factor(factor)
    }
}

impl From<Binary> for Expression {
    fn from(binary: Binary) -> Self {
        Expression::Binary(binary)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::eval::iterative::render_into(self, f)
    }
}

// Dropping a deep chain through the default glue recurses once per level.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

fn detach_children(node: &mut Expression, pending: &mut Vec<Expression>) {
    if let Expression::Binary(b) = node {
        for child in [&mut b.left, &mut b.right] {
            if child.is_binary() {
                pending.push(std::mem::replace(&mut **child, Expression::factor(0)));
            }
        }
    }
}
