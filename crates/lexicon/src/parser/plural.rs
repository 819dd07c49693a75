//! `Plural-Forms` header parser.
//!
//! Accepts headers of the form `nplurals=N; plural=EXPR;` where `EXPR` uses
//! the C operator subset gettext supports, with the usual C precedence:
//! `?:` < `||` < `&&` < `== !=` < `< <= > >=` < `+ -` < `* / %` < `!`.

use winnow::ascii::{digit1, multispace0};
use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;

use super::ast::{BinaryOp, PluralExpr, PluralForms};
use super::error::ParseError;

/// Deepest nesting of parentheses, `!` and `?:` accepted in an expression.
const MAX_NESTING: usize = 64;

/// Most operator characters accepted in an expression.
const MAX_OPERATORS: usize = 512;

/// Parse a `Plural-Forms` header value.
pub fn parse_plural_forms(header: &str) -> Result<PluralForms, ParseError> {
    let invalid = |message: &str| ParseError::PluralForms {
        header: header.to_string(),
        message: message.to_string(),
    };

    if nesting_depth(header) > MAX_NESTING {
        return Err(invalid("expression nested too deeply"));
    }
    if header.chars().filter(|c| "+-*/%<>=!&|?:".contains(*c)).count() > MAX_OPERATORS {
        return Err(invalid("expression has too many operators"));
    }

    let mut remaining = header;
    let (nplurals, expr) = plural_forms(&mut remaining)
        .map_err(|_| invalid("expected 'nplurals=N; plural=EXPR;'"))?;
    if !remaining.is_empty() {
        return Err(invalid(&format!("unexpected trailing input '{remaining}'")));
    }
    if nplurals == 0 {
        return Err(invalid("nplurals must be at least 1"));
    }
    Ok(PluralForms { nplurals, expr })
}

/// Upper bound on the parser's recursion depth for `header`.
///
/// Each `(` opens a level; a unary `!` or a `?` nests once more until the
/// enclosing `)` closes.
fn nesting_depth(header: &str) -> usize {
    let mut levels = vec![0_usize];
    let mut depth = 0_usize;
    let mut deepest = 0_usize;
    let mut chars = header.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '(' => {
                levels.push(0);
                depth += 1;
            }
            ')' if levels.len() > 1 => {
                let inner = levels.pop().unwrap_or_default();
                depth = depth.saturating_sub(inner + 1);
            }
            '?' => {
                if let Some(level) = levels.last_mut() {
                    *level += 1;
                }
                depth += 1;
            }
            '!' if chars.peek() != Some(&'=') => {
                if let Some(level) = levels.last_mut() {
                    *level += 1;
                }
                depth += 1;
            }
            _ => {}
        }
        deepest = deepest.max(depth);
    }
    deepest
}

fn plural_forms(input: &mut &str) -> ModalResult<(usize, PluralExpr)> {
    let nplurals = preceded(
        (multispace0, "nplurals", multispace0, '=', multispace0),
        digit1.try_map(str::parse::<usize>),
    )
    .parse_next(input)?;
    (multispace0, ';', multispace0, "plural", multispace0, '=').parse_next(input)?;
    let expr = expression(input)?;
    (multispace0, opt(';'), multispace0).parse_next(input)?;
    Ok((nplurals, expr))
}

fn expression(input: &mut &str) -> ModalResult<PluralExpr> {
    conditional(input)
}

fn conditional(input: &mut &str) -> ModalResult<PluralExpr> {
    let condition = logical_or(input)?;
    let branches = opt((
        preceded((multispace0, '?'), conditional),
        preceded((multispace0, ':'), conditional),
    ))
    .parse_next(input)?;

    Ok(match branches {
        Some((then, otherwise)) => PluralExpr::Conditional {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        },
        None => condition,
    })
}

fn logical_or(input: &mut &str) -> ModalResult<PluralExpr> {
    let first = logical_and(input)?;
    let rest = repeat(0.., (operator(&[("||", BinaryOp::Or)]), logical_and)).parse_next(input)?;
    Ok(fold_left(first, rest))
}

fn logical_and(input: &mut &str) -> ModalResult<PluralExpr> {
    let first = equality(input)?;
    let rest = repeat(0.., (operator(&[("&&", BinaryOp::And)]), equality)).parse_next(input)?;
    Ok(fold_left(first, rest))
}

fn equality(input: &mut &str) -> ModalResult<PluralExpr> {
    let first = relational(input)?;
    let rest = repeat(
        0..,
        (
            operator(&[("==", BinaryOp::Eq), ("!=", BinaryOp::Ne)]),
            relational,
        ),
    )
    .parse_next(input)?;
    Ok(fold_left(first, rest))
}

fn relational(input: &mut &str) -> ModalResult<PluralExpr> {
    let first = additive(input)?;
    let rest = repeat(
        0..,
        (
            operator(&[
                ("<=", BinaryOp::Le),
                (">=", BinaryOp::Ge),
                ("<", BinaryOp::Lt),
                (">", BinaryOp::Gt),
            ]),
            additive,
        ),
    )
    .parse_next(input)?;
    Ok(fold_left(first, rest))
}

fn additive(input: &mut &str) -> ModalResult<PluralExpr> {
    let first = multiplicative(input)?;
    let rest = repeat(
        0..,
        (
            operator(&[("+", BinaryOp::Add), ("-", BinaryOp::Sub)]),
            multiplicative,
        ),
    )
    .parse_next(input)?;
    Ok(fold_left(first, rest))
}

fn multiplicative(input: &mut &str) -> ModalResult<PluralExpr> {
    let first = unary(input)?;
    let rest = repeat(
        0..,
        (
            operator(&[
                ("*", BinaryOp::Mul),
                ("/", BinaryOp::Div),
                ("%", BinaryOp::Rem),
            ]),
            unary,
        ),
    )
    .parse_next(input)?;
    Ok(fold_left(first, rest))
}

fn unary(input: &mut &str) -> ModalResult<PluralExpr> {
    multispace0.parse_next(input)?;
    alt((
        preceded('!', unary).map(|inner| PluralExpr::Not(Box::new(inner))),
        primary,
    ))
    .parse_next(input)
}

fn primary(input: &mut &str) -> ModalResult<PluralExpr> {
    alt((
        'n'.value(PluralExpr::N),
        digit1
            .try_map(str::parse::<u64>)
            .map(PluralExpr::Literal),
        delimited('(', expression, (multispace0, ')')),
    ))
    .parse_next(input)
}

/// Parser for one operator out of `table`, with leading whitespace.
///
/// Longer operators must come before their prefixes (`<=` before `<`).
fn operator<'i>(
    table: &'static [(&'static str, BinaryOp)],
) -> impl FnMut(&mut &'i str) -> ModalResult<BinaryOp> {
    move |input: &mut &'i str| {
        multispace0.parse_next(input)?;
        let current: &'i str = *input;
        for (symbol, op) in table {
            if let Some(rest) = current.strip_prefix(symbol) {
                *input = rest;
                return Ok(*op);
            }
        }
        Err(ErrMode::Backtrack(ContextError::new()))
    }
}

fn fold_left(first: PluralExpr, rest: Vec<(BinaryOp, PluralExpr)>) -> PluralExpr {
    rest.into_iter()
        .fold(first, |lhs, (op, rhs)| PluralExpr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
}
