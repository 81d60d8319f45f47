//! Factor evaluation

use log::trace;

use super::Evaluate;
use crate::{EvalContext, EvalError, Factor};

impl Evaluate for Factor {
    fn eval_at(
        &self,
        ctx: &EvalContext,
        depth: usize,
        out: &mut String,
    ) -> Result<(), EvalError> {
        if ctx.trace {
            trace!("factor {} at depth {}", self.value(), depth);
        }
        out.push_str(&self.value().to_string());
        Ok(())
    }
}
