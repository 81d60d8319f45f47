//! Error types for treeshape

use thiserror::Error;

use crate::frontend::ParseError;

/// Errors raised by guarded evaluation (see [`crate::Evaluate`]).
///
/// Plain [`crate::evaluate`] never fails; these only arise when an
/// [`crate::EvalContext`] bounds the walk.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A `Binary` node sits deeper than the context allows
    #[error("Depth limit exceeded: tree nests deeper than {limit} binary levels")]
    DepthLimitExceeded {
        /// The configured maximum depth
        limit: usize,
    },

    /// Evaluation was interrupted through the context's interrupt flag
    #[error("Evaluation interrupted")]
    Interrupted,
}

/// Main error type for treeshape operations
#[derive(Error, Debug)]
pub enum TreeshapeError {
    /// Source text could not be turned into an expression tree
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The tree could not be rendered under the given context
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Result type alias for treeshape operations
pub type Result<T> = std::result::Result<T, TreeshapeError>;
