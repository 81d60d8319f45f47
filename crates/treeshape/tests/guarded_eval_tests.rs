//! Tests for context-guarded evaluation

use std::sync::atomic::Ordering;

use treeshape::*;

fn chain(n: usize) -> Expression {
    Expression::left_chain((0..=n as i64).map(Expression::factor)).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Output
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_guarded_matches_plain() {
    let tree = Expression::binary(
        Expression::binary(Expression::factor(1), Expression::factor(2)),
        Expression::binary(Expression::factor(3), Expression::factor(4)),
    );
    let ctx = EvalContext::default();
    assert_eq!(tree.eval(&ctx).unwrap(), evaluate(&tree));
    assert_eq!(eval_expr(&tree, &ctx).unwrap(), "B[B[1#2]#B[3#4]]");
}

#[test]
fn test_trace_does_not_change_output() {
    let tree = chain(5);
    let ctx = EvalContext::default().with_trace(true);
    assert_eq!(tree.eval(&ctx).unwrap(), evaluate(&tree));
}

// ═══════════════════════════════════════════════════════════════════════
// Depth Limit
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_depth_at_limit_accepted() {
    let ctx = EvalContext::with_max_depth(10);
    assert!(chain(10).eval(&ctx).is_ok());
}

#[test]
fn test_depth_over_limit_rejected() {
    let ctx = EvalContext::with_max_depth(10);
    let result = chain(11).eval(&ctx);
    assert_eq!(result, Err(EvalError::DepthLimitExceeded { limit: 10 }));
}

#[test]
fn test_limit_applies_to_any_branch() {
    let ctx = EvalContext::with_max_depth(2);
    let shallow_left_deep_right = Expression::binary(Expression::factor(0), chain(2));
    assert!(matches!(
        shallow_left_deep_right.eval(&ctx),
        Err(EvalError::DepthLimitExceeded { limit: 2 })
    ));
}

#[test]
fn test_factor_passes_zero_limit() {
    let ctx = EvalContext::with_max_depth(0);
    assert_eq!(Expression::factor(5).eval(&ctx).unwrap(), "5");
}

#[test]
fn test_default_limit_bounds_deep_tree() {
    let ctx = EvalContext::default();
    let result = chain(5_000).eval(&ctx);
    assert_eq!(result, Err(EvalError::DepthLimitExceeded { limit: 1000 }));
}

// ═══════════════════════════════════════════════════════════════════════
// Interruption
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_interrupted_context_fails() {
    let ctx = EvalContext::default();
    ctx.interrupt();
    assert_eq!(chain(3).eval(&ctx), Err(EvalError::Interrupted));
}

#[test]
fn test_interrupt_through_shared_flag() {
    let ctx = EvalContext::default();
    let flag = ctx.interrupt.clone();
    flag.store(true, Ordering::Relaxed);
    assert!(ctx.is_interrupted());
    assert_eq!(chain(1).eval(&ctx), Err(EvalError::Interrupted));

    ctx.reset_interrupt();
    assert_eq!(chain(1).eval(&ctx).unwrap(), "B[0#1]");
}

#[test]
fn test_errors_convert_to_crate_error() {
    fn guarded(tree: &Expression, ctx: &EvalContext) -> treeshape::Result<String> {
        Ok(tree.eval(ctx)?)
    }

    let ctx = EvalContext::with_max_depth(0);
    let err = guarded(&chain(1), &ctx).unwrap_err();
    assert!(matches!(
        err,
        TreeshapeError::Eval(EvalError::DepthLimitExceeded { limit: 0 })
    ));
}
