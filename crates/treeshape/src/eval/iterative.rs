//! Stack-safe rendering
//!
//! Same output as [`super::evaluate`], produced with an explicit work stack
//! so that tree depth is bounded by heap memory rather than the call stack.

use std::fmt;

use crate::Expression;

enum Step<'a> {
    Node(&'a Expression),
    Text(&'static str),
}

/// Render an expression tree without recursion.
pub fn evaluate_iterative(expr: &Expression) -> String {
    let mut out = String::new();
    render_into(expr, &mut out).expect("writing to a String cannot fail");
    out
}

/// Write the rendering of `expr` into any formatter sink.
pub(crate) fn render_into<W>(expr: &Expression, out: &mut W) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    let mut stack = vec![Step::Node(expr)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Text(text) => out.write_str(text)?,
            Step::Node(Expression::Factor(f)) => write!(out, "{}", f.value())?,
            Step::Node(Expression::Binary(b)) => {
                out.write_str("B[")?;
                stack.push(Step::Text("]"));
                stack.push(Step::Node(b.right()));
                stack.push(Step::Text("#"));
                stack.push(Step::Node(b.left()));
            }
        }
    }
    Ok(())
}
