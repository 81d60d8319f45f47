//! Bracket-notation frontend
//!
//! Reads the rendered form back into a tree:
//!
//! ```text
//! expr   := factor | "B[" expr "#" expr "]"
//! factor := "-"? digit+
//! ```
//!
//! Whitespace between tokens is ignored. Parsing keeps its own stack of
//! open `B[` nodes, so rendered output of any depth can be read back.

use std::iter::Peekable;
use std::str::Chars;

use log::debug;

use crate::frontend::{Frontend, ParseError, SourceLocation};
use crate::Expression;

/// Frontend for the `B[..#..]` notation produced by [`crate::evaluate`].
///
/// ```
/// use treeshape::frontends::BracketFrontend;
/// use treeshape::{evaluate, Frontend};
///
/// let tree = BracketFrontend::new().parse("B[B[1#2]#-3]").unwrap();
/// assert_eq!(tree.depth(), 2);
/// assert_eq!(evaluate(&tree), "B[B[1#2]#-3]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BracketFrontend;

impl BracketFrontend {
    /// Create a new bracket frontend.
    pub fn new() -> Self {
        Self
    }
}

impl Frontend for BracketFrontend {
    fn parse(&self, source: &str) -> Result<Expression, ParseError> {
        let result = Parser::new(source).parse();
        match &result {
            Ok(tree) => debug!("parsed tree of depth {}", tree.depth()),
            Err(e) => debug!("rejected input: {}", e.message),
        }
        result
    }

    fn name(&self) -> &str {
        "bracket"
    }
}

/// A `B[` whose children are still being read.
enum Open {
    /// Waiting for the left child
    Left,
    /// Left child done, waiting for the right one
    Right(Expression),
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn parse(mut self) -> Result<Expression, ParseError> {
        let mut open: Vec<Open> = Vec::new();

        'operand: loop {
            self.skip_whitespace();
            let mut value = match self.chars.peek().copied() {
                Some('B') => {
                    self.bump();
                    self.expect('[')?;
                    open.push(Open::Left);
                    continue 'operand;
                }
                Some(c) if c == '-' || c.is_ascii_digit() => self.factor()?,
                _ => return Err(self.unexpected("`B[` or an integer")),
            };

            // Close every node this value completes
            loop {
                self.skip_whitespace();
                match open.pop() {
                    None => {
                        if self.chars.peek().is_some() {
                            return Err(self.unexpected("end of input"));
                        }
                        return Ok(value);
                    }
                    Some(Open::Left) => {
                        self.expect('#')?;
                        open.push(Open::Right(value));
                        continue 'operand;
                    }
                    Some(Open::Right(left)) => {
                        self.expect(']')?;
                        value = Expression::binary(left, value);
                    }
                }
            }
        }
    }

    fn factor(&mut self) -> Result<Expression, ParseError> {
        let start = self.here();
        let mut text = String::new();
        if self.chars.peek() == Some(&'-') {
            text.push('-');
            self.bump();
        }
        while let Some(c) = self.chars.peek().copied() {
            if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.bump();
        }
        if text.len() == usize::from(text.starts_with('-')) {
            return Err(self.unexpected("a digit"));
        }

        text.parse::<i64>().map(Expression::factor).map_err(|_| {
            ParseError::new(format!("integer `{}` out of range for i64", text))
                .with_location(start)
                .with_snippet(text.clone())
        })
    }

    fn expect(&mut self, wanted: char) -> Result<(), ParseError> {
        if self.chars.peek() == Some(&wanted) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected(&format!("`{}`", wanted)))
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.bump();
        }
    }

    fn bump(&mut self) {
        if let Some(c) = self.chars.next() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn here(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    fn unexpected(&mut self, expected: &str) -> ParseError {
        let found = match self.chars.peek() {
            Some(c) => format!("`{}`", c),
            None => "end of input".to_string(),
        };
        ParseError::new(format!("expected {}, found {}", expected, found)).with_location(self.here())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate;
    use pretty_assertions::assert_eq;

    fn parse(src: &str) -> Result<Expression, ParseError> {
        BracketFrontend::new().parse(src)
    }

    #[test]
    fn test_parse_factor() {
        assert_eq!(parse("1").unwrap(), Expression::factor(1));
        assert_eq!(parse("-5").unwrap(), Expression::factor(-5));
        assert_eq!(
            parse("-9223372036854775808").unwrap(),
            Expression::factor(i64::MIN)
        );
    }

    #[test]
    fn test_parse_nested() {
        let tree = parse("B[B[1#2]#B[3#4]]").unwrap();
        assert_eq!(
            tree,
            Expression::binary(
                Expression::binary(Expression::factor(1), Expression::factor(2)),
                Expression::binary(Expression::factor(3), Expression::factor(4)),
            )
        );
    }

    #[test]
    fn test_whitespace_between_tokens() {
        let tree = parse("  B[ 0 #\n -5 ]  ").unwrap();
        assert_eq!(evaluate(&tree), "B[0#-5]");
    }

    #[test]
    fn test_missing_separator() {
        let err = parse("B[1]").unwrap_err();
        assert_eq!(err.message, "expected `#`, found `]`");
        assert_eq!(err.location, Some(SourceLocation::new(1, 4)));
    }

    #[test]
    fn test_missing_close() {
        let err = parse("B[1#2").unwrap_err();
        assert_eq!(err.message, "expected `]`, found end of input");
        assert_eq!(err.location, Some(SourceLocation::new(1, 6)));
    }

    #[test]
    fn test_trailing_input() {
        let err = parse("B[1#2]]").unwrap_err();
        assert_eq!(err.message, "expected end of input, found `]`");
        assert_eq!(err.location, Some(SourceLocation::new(1, 7)));
    }

    #[test]
    fn test_bad_operands() {
        assert_eq!(
            parse("").unwrap_err().message,
            "expected `B[` or an integer, found end of input"
        );
        assert_eq!(parse("-").unwrap_err().message, "expected a digit, found end of input");
        assert_eq!(
            parse("B(1#2)").unwrap_err().message,
            "expected `[`, found `(`"
        );
        assert_eq!(
            parse("B[x#2]").unwrap_err().location,
            Some(SourceLocation::new(1, 3))
        );
    }

    #[test]
    fn test_out_of_range() {
        let err = parse("B[1#99999999999999999999]").unwrap_err();
        assert!(err.message.contains("out of range"));
        assert_eq!(err.location, Some(SourceLocation::new(1, 5)));
    }

    #[test]
    fn test_error_on_second_line() {
        let err = parse("B[1#\n2 3]").unwrap_err();
        assert_eq!(err.location, Some(SourceLocation::new(2, 3)));
    }
}
