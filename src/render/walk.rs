use std::fmt;

use log::debug;

use crate::expression::Expression;
use crate::numeric::Scalar;
use crate::render::errors::RenderError;
use crate::render::symbols::symbol;
use crate::search::{ExpressionNode, Operator};

/// One postfix token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<T> {
    Number(T),
    Op(Operator),
}

impl<T: fmt::Display> fmt::Display for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Op(op) => write!(f, "{}", symbol(*op)),
        }
    }
}

/// Space separated postfix text
pub fn format_rpn<T: fmt::Display>(tokens: &[Token<T>]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The three views of one rendered value
#[derive(Debug, Clone)]
pub struct Rendering<T> {
    pub infix: String,
    pub rpn: Vec<Token<T>>,
    pub expression: Expression<T>,
    pub term_count: usize,
}

enum Visit<T> {
    Expand(T),
    Emit(Operator),
}

/// Postfix tokens for `value`, following child values through `lookup`.
///
/// The walk keeps its own stack. Every child must cost strictly less than
/// its parent, so the walk ends even on corrupted stores.
///
/// # Errors
///
/// Fails when a value has no node, or when a node's cost does not equal
/// the sum of its operands' costs.
pub fn rpn<T, L>(value: T, lookup: L) -> Result<Vec<Token<T>>, RenderError>
where
    T: Scalar,
    L: Fn(T) -> Option<ExpressionNode<T>>,
{
    let find = |value: T| lookup(value).ok_or_else(|| RenderError::UnknownValue(value.to_string()));

    let mut tokens = Vec::new();
    let mut stack = vec![Visit::Expand(value)];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Emit(op) => tokens.push(Token::Op(op)),
            Visit::Expand(value) => {
                let node = find(value)?;
                let Some(op) = node.op else {
                    tokens.push(Token::Number(value));
                    continue;
                };
                let found = find(node.left)?.term_count + find(node.right)?.term_count;
                if found != node.term_count {
                    return Err(RenderError::InconsistentCost {
                        value: value.to_string(),
                        expected: node.term_count,
                        found,
                    });
                }
                stack.push(Visit::Emit(op));
                stack.push(Visit::Expand(node.right));
                stack.push(Visit::Expand(node.left));
            }
        }
    }

    debug!("Rendered {} as {} tokens", value, tokens.len());
    Ok(tokens)
}

/// Fully parenthesized infix text for `value`, e.g. `((3+4)*2)`
///
/// # Errors
///
/// Same as [`rpn`].
pub fn infix<T, L>(value: T, lookup: L) -> Result<String, RenderError>
where
    T: Scalar,
    L: Fn(T) -> Option<ExpressionNode<T>>,
{
    let tokens = rpn(value, lookup)?;
    fold_tokens(
        &tokens,
        |n| n.to_string(),
        |op, left, right| format!("({}{}{})", left, symbol(op), right),
    )
}

/// All views of `value` from a single walk
///
/// # Errors
///
/// Same as [`rpn`].
pub fn render<T, L>(value: T, lookup: L) -> Result<Rendering<T>, RenderError>
where
    T: Scalar,
    L: Fn(T) -> Option<ExpressionNode<T>>,
{
    let rpn = rpn(value, lookup)?;
    let infix = fold_tokens(
        &rpn,
        |n| n.to_string(),
        |op, left, right| format!("({}{}{})", left, symbol(op), right),
    )?;
    let expression = fold_tokens(&rpn, Expression::Number, Expression::binary)?;
    let term_count = rpn
        .iter()
        .filter(|token| matches!(token, Token::Number(_)))
        .count();
    Ok(Rendering {
        infix,
        rpn,
        expression,
        term_count,
    })
}

/// Evaluate a token stream with an operand stack
fn fold_tokens<T, R>(
    tokens: &[Token<T>],
    leaf: impl Fn(T) -> R,
    combine: impl Fn(Operator, R, R) -> R,
) -> Result<R, RenderError>
where
    T: Copy,
{
    let mut operands: Vec<R> = Vec::new();
    for token in tokens {
        match *token {
            Token::Number(n) => operands.push(leaf(n)),
            Token::Op(op) => {
                let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                    return Err(RenderError::MalformedRpn);
                };
                operands.push(combine(op, left, right));
            }
        }
    }
    match (operands.pop(), operands.is_empty()) {
        (Some(result), true) => Ok(result),
        _ => Err(RenderError::MalformedRpn),
    }
}
