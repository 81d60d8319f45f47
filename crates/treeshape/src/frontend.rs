//! Frontend trait for treeshape
//!
//! A frontend turns source text into an [`Expression`] tree. This is where
//! malformed input is rejected: a `Binary` that is missing a child, an
//! unknown constructor, or an integer out of range never reaches evaluation.
//!
//! ```text
//! Source Text → [Frontend] → Expression → [evaluate] → String
//! ```

use crate::Expression;
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════
// ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════

/// Error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,

    /// Optional source location
    pub location: Option<SourceLocation>,

    /// Optional source snippet for context
    pub snippet: Option<String>,
}

impl ParseError {
    /// Create a new parse error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            snippet: None,
        }
    }

    /// Add location information to the error.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Add a source snippet for context.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}:{}", loc.line, loc.column)?;
        }
        if let Some(snippet) = &self.snippet {
            write!(f, "\n{}", snippet)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Source code location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed, in characters)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FRONTEND TRAIT
// ═══════════════════════════════════════════════════════════════════════

/// Text syntax that builds expression trees.
///
/// Implementations only need [`Frontend::parse`] and [`Frontend::name`];
/// error formatting has a default that points a caret at the offending
/// column.
pub trait Frontend: Send + Sync {
    /// Parse source text into an expression tree.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the source is not a well-formed tree.
    fn parse(&self, source: &str) -> Result<Expression, ParseError>;

    /// Return the name of this frontend.
    fn name(&self) -> &str;

    /// Format a parse error against the source it came from.
    fn format_error(&self, error: &ParseError, source: &str) -> String {
        let mut out = format!("error[{}]: {}", self.name(), error.message);
        let Some(loc) = error.location else {
            return out;
        };

        out.push_str(&format!("\n --> {}:{}", loc.line, loc.column));
        if let Some(line) = source.lines().nth(loc.line.saturating_sub(1)) {
            out.push_str(&format!("\n  | {}", line));
            out.push_str(&format!(
                "\n  | {}^",
                " ".repeat(loc.column.saturating_sub(1))
            ));
        }
        out
    }
}
