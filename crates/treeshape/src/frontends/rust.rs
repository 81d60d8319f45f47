//! Rust constructor-syntax frontend
//!
//! Parses trees written as Rust expressions with `syn`:
//!
//! - `Factor(3)`, `Factor(-5)`, or a bare integer literal
//! - `Binary(left, right)`
//! - struct literals `Factor { i: 3 }` and `Binary { left: .., right: .. }`
//! - any of the above behind an `Expression::` or `Expr::` prefix
//!
//! Anything else is rejected with the location of the offending tokens.

use log::debug;
use quote::ToTokens;
use syn::spanned::Spanned;

use crate::frontend::{Frontend, ParseError, SourceLocation};
use crate::Expression;

/// Rust constructor-syntax frontend.
///
/// # Example
///
/// ```
/// use treeshape::frontends::RustFrontend;
/// use treeshape::{evaluate, Frontend};
///
/// let tree = RustFrontend::new().parse("Binary(Factor(0), Factor(-5))").unwrap();
/// assert_eq!(evaluate(&tree), "B[0#-5]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RustFrontend;

impl RustFrontend {
    /// Create a new Rust frontend.
    pub fn new() -> Self {
        Self
    }
}

impl Frontend for RustFrontend {
    fn parse(&self, source: &str) -> Result<Expression, ParseError> {
        let expr: syn::Expr = syn::parse_str(source).map_err(|e| {
            let mut err = ParseError::new(format!("Rust syntax error: {}", e));
            if let Some(loc) = location_of(e.span()) {
                err = err.with_location(loc);
            }
            err
        })?;

        let result = lower(&expr);
        match &result {
            Ok(tree) => debug!("parsed tree of depth {}", tree.depth()),
            Err(e) => debug!("rejected input: {}", e.message),
        }
        result
    }

    fn name(&self) -> &str {
        "Rust"
    }
}

/// The two constructors a path may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ctor {
    Factor,
    Binary,
}

fn lower(expr: &syn::Expr) -> Result<Expression, ParseError> {
    match expr {
        syn::Expr::Paren(p) => lower(&p.expr),
        syn::Expr::Group(g) => lower(&g.expr),

        // Bare integers are shorthand for `Factor(..)`
        syn::Expr::Lit(_) | syn::Expr::Unary(_) => integer(expr).map(Expression::factor),

        syn::Expr::Call(call) => {
            let ctor = match call.func.as_ref() {
                syn::Expr::Path(p) if p.qself.is_none() => constructor(&p.path)?,
                other => return Err(error_at(other, "expected `Factor` or `Binary`")),
            };
            let args: Vec<&syn::Expr> = call.args.iter().collect();
            match (ctor, args.as_slice()) {
                (Ctor::Factor, [value]) => integer(value).map(Expression::factor),
                (Ctor::Binary, [left, right]) => Ok(Expression::binary(lower(left)?, lower(right)?)),
                (Ctor::Factor, _) => Err(error_at(
                    expr,
                    format!("`Factor` takes 1 argument but {}", supplied(args.len())),
                )),
                (Ctor::Binary, _) => Err(error_at(
                    expr,
                    format!("`Binary` takes 2 arguments but {}", supplied(args.len())),
                )),
            }
        }

        syn::Expr::Struct(lit) => {
            if lit.qself.is_some() {
                return Err(error_at(expr, "qualified paths are not supported"));
            }
            if let Some(rest) = &lit.rest {
                return Err(error_at(rest, "struct update syntax is not supported"));
            }
            let ctor = constructor(&lit.path)?;
            let fields = named_fields(lit)?;
            match ctor {
                Ctor::Factor => {
                    let value = required_field(expr, &fields, "i")?;
                    reject_unknown(&fields, &["i"])?;
                    integer(value).map(Expression::factor)
                }
                Ctor::Binary => {
                    let left = required_field(expr, &fields, "left")?;
                    let right = required_field(expr, &fields, "right")?;
                    reject_unknown(&fields, &["left", "right"])?;
                    Ok(Expression::binary(lower(left)?, lower(right)?))
                }
            }
        }

        other => Err(error_at(other, "expected `Factor(..)` or `Binary(..)`")),
    }
}

fn supplied(count: usize) -> String {
    match count {
        1 => "1 argument was supplied".to_string(),
        n => format!("{} arguments were supplied", n),
    }
}

/// Resolve a constructor path, allowing an `Expression::` or `Expr::` prefix.
fn constructor(path: &syn::Path) -> Result<Ctor, ParseError> {
    let segments: Vec<&syn::PathSegment> = path.segments.iter().collect();
    let (last, prefix) = match segments.split_last() {
        Some(split) => split,
        None => return Err(error_at(path, "empty path")),
    };

    let prefix_ok = match prefix {
        [] => true,
        [only] => only.ident == "Expression" || only.ident == "Expr",
        _ => false,
    };
    if !prefix_ok || path.leading_colon.is_some() {
        return Err(error_at(path, "unsupported constructor path"));
    }
    if !last.arguments.is_none() {
        return Err(error_at(last, "constructors take no generic arguments"));
    }

    if last.ident == "Factor" {
        Ok(Ctor::Factor)
    } else if last.ident == "Binary" {
        Ok(Ctor::Binary)
    } else {
        Err(error_at(
            &last.ident,
            format!("unknown constructor `{}`", last.ident),
        ))
    }
}

/// Read an integer literal, optionally negated.
fn integer(expr: &syn::Expr) -> Result<i64, ParseError> {
    let (negative, lit) = match expr {
        syn::Expr::Lit(lit) => (false, lit),
        syn::Expr::Unary(syn::ExprUnary {
            op: syn::UnOp::Neg(_),
            expr: inner,
            ..
        }) => match inner.as_ref() {
            syn::Expr::Lit(lit) => (true, lit),
            other => return Err(error_at(other, "expected an integer literal")),
        },
        syn::Expr::Paren(p) => return integer(&p.expr),
        other => return Err(error_at(other, "expected an integer literal")),
    };

    let syn::Lit::Int(int) = &lit.lit else {
        return Err(error_at(lit, "expected an integer literal"));
    };
    if !matches!(int.suffix(), "" | "i64") {
        return Err(error_at(
            int,
            format!("unsupported integer suffix `{}`", int.suffix()),
        ));
    }

    // Parse wide so that `-9223372036854775808` is accepted
    let magnitude: i128 = int
        .base10_parse()
        .map_err(|_| error_at(int, "integer literal out of range"))?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).map_err(|_| error_at(expr, "integer literal out of range for i64"))
}

fn named_fields(lit: &syn::ExprStruct) -> Result<Vec<(String, &syn::Expr)>, ParseError> {
    let mut fields: Vec<(String, &syn::Expr)> = Vec::with_capacity(lit.fields.len());
    for field in &lit.fields {
        let name = match &field.member {
            syn::Member::Named(ident) => ident.to_string(),
            syn::Member::Unnamed(index) => {
                return Err(error_at(index, "expected a named field"));
            }
        };
        if fields.iter().any(|(seen, _)| *seen == name) {
            return Err(error_at(&field.member, format!("field `{}` given twice", name)));
        }
        fields.push((name, &field.expr));
    }
    Ok(fields)
}

fn required_field<'a>(
    owner: &syn::Expr,
    fields: &[(String, &'a syn::Expr)],
    name: &str,
) -> Result<&'a syn::Expr, ParseError> {
    fields
        .iter()
        .find(|(field, _)| field == name)
        .map(|(_, expr)| *expr)
        .ok_or_else(|| error_at(owner, format!("missing field `{}`", name)))
}

fn reject_unknown(fields: &[(String, &syn::Expr)], known: &[&str]) -> Result<(), ParseError> {
    match fields.iter().find(|(name, _)| !known.contains(&name.as_str())) {
        Some((name, expr)) => Err(error_at(*expr, format!("unknown field `{}`", name))),
        None => Ok(()),
    }
}

/// Build an error located at the first token of `node`.
fn error_at<T>(node: &T, message: impl Into<String>) -> ParseError
where
    T: Spanned + ToTokens + ?Sized,
{
    let mut err = ParseError::new(message).with_snippet(node.to_token_stream().to_string());
    if let Some(loc) = location_of(node.span()) {
        err = err.with_location(loc);
    }
    err
}

fn location_of(span: proc_macro2::Span) -> Option<SourceLocation> {
    let start = span.start();
    // Line 0 means the span carries no position (e.g. end of input)
    if start.line == 0 {
        return None;
    }
    Some(SourceLocation::new(start.line, start.column + 1))
}
