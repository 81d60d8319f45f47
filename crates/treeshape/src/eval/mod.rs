//! Expression evaluation
//!
//! Evaluating a tree renders its structure: a `Factor` becomes its decimal
//! digits and a `Binary` becomes `B[<left>#<right>]`. No arithmetic is
//! performed.

pub mod binary;
pub mod factor;
pub mod iterative;

use crate::{EvalContext, EvalError, Expression};

/// Render an expression tree.
///
/// Recursion depth equals tree depth. For trees too deep for the call stack
/// use [`evaluate_iterative`]; to bound the walk use [`Evaluate`].
///
/// ```
/// use treeshape::{evaluate, Expression};
///
/// let tree = Expression::binary(Expression::factor(0), Expression::factor(-5));
/// assert_eq!(evaluate(&tree), "B[0#-5]");
/// ```
pub fn evaluate(expr: &Expression) -> String {
    match expr {
        Expression::Factor(f) => f.value().to_string(),
        Expression::Binary(b) => format!("B[{}#{}]", evaluate(b.left()), evaluate(b.right())),
    }
}

/// Trait for guarded evaluation of tree nodes.
///
/// Each node kind implements this trait; [`Expression`] dispatches to them.
/// Output is identical to [`evaluate`], but the walk stops with an error when
/// the context's depth limit is crossed or its interrupt flag is raised.
pub trait Evaluate {
    /// Append this node's rendering to `out`.
    ///
    /// `depth` is the number of `Binary` ancestors of this node.
    fn eval_at(&self, ctx: &EvalContext, depth: usize, out: &mut String)
        -> Result<(), EvalError>;

    /// Render this node as the root of a tree.
    fn eval(&self, ctx: &EvalContext) -> Result<String, EvalError> {
        let mut out = String::new();
        self.eval_at(ctx, 0, &mut out)?;
        Ok(out)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expression {
    fn eval_at(
        &self,
        ctx: &EvalContext,
        depth: usize,
        out: &mut String,
    ) -> Result<(), EvalError> {
        // Check for interruption before each node
        if ctx.is_interrupted() {
            return Err(EvalError::Interrupted);
        }

        match self {
            Expression::Factor(f) => f.eval_at(ctx, depth, out),
            Expression::Binary(b) => b.eval_at(ctx, depth, out),
        }
    }
}

/// Evaluate an expression under a context (convenience wrapper).
pub fn eval_expr(expr: &Expression, ctx: &EvalContext) -> Result<String, EvalError> {
    expr.eval(ctx)
}

pub use iterative::evaluate_iterative;
