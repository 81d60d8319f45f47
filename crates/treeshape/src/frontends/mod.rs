//! Frontends for treeshape
//!
//! Implementations of the [`crate::Frontend`] trait, one per text syntax.

pub mod bracket;
pub mod rust;

pub use bracket::BracketFrontend;
pub use rust::RustFrontend;
