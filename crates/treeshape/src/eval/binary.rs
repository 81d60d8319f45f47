//! Binary node evaluation

use log::trace;

use super::Evaluate;
use crate::{Binary, EvalContext, EvalError};

impl Evaluate for Binary {
    fn eval_at(
        &self,
        ctx: &EvalContext,
        depth: usize,
        out: &mut String,
    ) -> Result<(), EvalError> {
        // This node opens nesting level `depth + 1`
        if depth >= ctx.max_depth {
            return Err(EvalError::DepthLimitExceeded {
                limit: ctx.max_depth,
            });
        }
        if ctx.trace {
            trace!("binary at depth {}", depth);
        }

        out.push_str("B[");
        self.left().eval_at(ctx, depth + 1, out)?;
        out.push('#');
        self.right().eval_at(ctx, depth + 1, out)?;
        out.push(']');
        Ok(())
    }
}
