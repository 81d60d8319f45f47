//! # Treeshape
//!
//! Structural rendering of expression trees.
//!
//! A tree is built from two node kinds: a `Factor` leaf holding an integer
//! and a `Binary` node owning a left and a right child. Evaluating a tree
//! renders its shape, with no arithmetic involved:
//!
//! ```
//! use treeshape::{evaluate, Expression};
//!
//! let tree = Expression::binary(
//!     Expression::binary(Expression::factor(1), Expression::factor(2)),
//!     Expression::binary(Expression::factor(3), Expression::factor(4)),
//! );
//! assert_eq!(evaluate(&tree), "B[B[1#2]#B[3#4]]");
//! ```
//!
//! ## Architecture
//!
//! - **Expression**: the immutable tree (`expr`)
//! - **Evaluation**: plain recursive [`evaluate`], stack-safe
//!   [`evaluate_iterative`], and the context-guarded [`Evaluate`] trait
//! - **Frontends**: build trees from Rust constructor syntax or from the
//!   rendered bracket notation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod eval;
pub mod expr;
pub mod frontend;
pub mod frontends;

// Re-export main types
pub use context::EvalContext;
pub use error::{EvalError, Result, TreeshapeError};
pub use eval::{eval_expr, evaluate, evaluate_iterative, Evaluate};
pub use expr::{Binary, Expression, Factor};
pub use frontend::{Frontend, ParseError, SourceLocation};
pub use frontends::{BracketFrontend, RustFrontend};

/// Treeshape version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
