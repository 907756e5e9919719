// src/frontend/parse_expr/mod.rs
//
// Expression parsing: precedence climbing for the binary tiers, with
// ranges layered loosest, casts between the binary tiers and unary, and
// postfix chains below that.

mod call;
mod match_expr;
mod primary;

use crate::errors::ParserError;
use crate::frontend::ast::*;
use crate::frontend::parser::{ParseError, Parser};
use crate::frontend::TokenType;

fn binary_op(ty: TokenType) -> Option<BinaryOp> {
    match ty {
        TokenType::Plus => Some(BinaryOp::Add),
        TokenType::Minus => Some(BinaryOp::Sub),
        TokenType::Star => Some(BinaryOp::Mul),
        TokenType::Slash => Some(BinaryOp::Div),
        TokenType::Percent => Some(BinaryOp::Mod),
        TokenType::EqEq => Some(BinaryOp::Eq),
        TokenType::BangEq => Some(BinaryOp::Ne),
        TokenType::Lt => Some(BinaryOp::Lt),
        TokenType::Gt => Some(BinaryOp::Gt),
        TokenType::LtEq => Some(BinaryOp::Le),
        TokenType::GtEq => Some(BinaryOp::Ge),
        TokenType::AmpAmp => Some(BinaryOp::And),
        TokenType::PipePipe => Some(BinaryOp::Or),
        TokenType::Ampersand => Some(BinaryOp::BitAnd),
        TokenType::Pipe => Some(BinaryOp::BitOr),
        TokenType::Caret => Some(BinaryOp::BitXor),
        TokenType::LessLess => Some(BinaryOp::Shl),
        TokenType::GreaterGreater => Some(BinaryOp::Shr),
        _ => None,
    }
}

impl<'src> Parser<'src> {
    /// Parse an expression. At the loosest level (`min_prec == 0`) this
    /// also handles range expressions, whose bounds are both optional.
    pub(crate) fn expression(&mut self, min_prec: u8) -> Result<Expr, ParseError> {
        if min_prec == 0 && self.at_range_op() {
            return self.open_start_range();
        }

        let left = self.binary_expr(min_prec)?;

        if min_prec == 0 && self.at_range_op() {
            let inclusive = self.check(TokenType::DotDotEqual);
            self.advance();
            // `a..=` with no end bound parses; whether it is usable is a
            // semantic-analysis question.
            let end = if self.token_starts_expr() {
                Some(self.binary_expr(0)?)
            } else {
                None
            };
            let span = left.span.merge(self.previous().span);
            return Ok(Expr {
                id: self.next_id(),
                kind: ExprKind::Range(Box::new(RangeExpr {
                    start: Some(left),
                    end,
                    inclusive,
                })),
                span,
            });
        }

        Ok(left)
    }

    fn at_range_op(&self) -> bool {
        self.check(TokenType::DotDot) || self.check(TokenType::DotDotEqual)
    }

    /// A range with no start bound: `..10`, `..=n`, or a bare `..`.
    fn open_start_range(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current().span;
        let inclusive = self.check(TokenType::DotDotEqual);
        self.advance();
        let end = if self.token_starts_expr() {
            Some(self.binary_expr(0)?)
        } else {
            None
        };
        let span = start_span.merge(self.previous().span);
        Ok(Expr {
            id: self.next_id(),
            kind: ExprKind::Range(Box::new(RangeExpr {
                start: None,
                end,
                inclusive,
            })),
            span,
        })
    }

    /// The binary tiers, assignment included, without ranges.
    fn binary_expr(&mut self, min_prec: u8) -> Result<Expr, ParseError> {
        let left = self.cast_expr()?;
        self.binary_expr_from(left, min_prec)
    }

    /// Precedence-climbing loop: given an already-parsed `left` operand,
    /// fold in binary operators binding tighter than `min_prec`.
    fn binary_expr_from(&mut self, mut left: Expr, min_prec: u8) -> Result<Expr, ParseError> {
        while self.current().ty.precedence() > min_prec {
            let op_ty = self.current().ty;

            if op_ty == TokenType::Eq {
                // Assignment: right-associative, and the left operand
                // must already have the shape of an assignment target.
                if !is_assign_target(&left) {
                    return Err(ParseError::new(
                        ParserError::InvalidAssignmentTarget {
                            span: left.span.into(),
                        },
                        left.span,
                    ));
                }
                self.advance();
                let value = self.expression(0)?;
                let span = left.span.merge(value.span);
                return Ok(Expr {
                    id: self.next_id(),
                    kind: ExprKind::Assign(Box::new(AssignExpr {
                        target: left,
                        value,
                    })),
                    span,
                });
            }

            let Some(op) = binary_op(op_ty) else {
                break;
            };
            let prec = op_ty.precedence();
            self.advance();
            let right = self.binary_expr(prec)?;
            let span = left.span.merge(right.span);

            left = Expr {
                id: self.next_id(),
                kind: ExprKind::Binary(Box::new(BinaryExpr { lhs: left, op, rhs: right })),
                span,
            };
        }

        Ok(left)
    }

    /// Casts chain left-associatively and bind tighter than every binary
    /// operator but looser than unary and postfix.
    fn cast_expr(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;
        while self.match_token(TokenType::KwAs) {
            let target_type = self.type_name()?;
            let span = expr.span.merge(self.previous().span);
            expr = Expr {
                id: self.next_id(),
                kind: ExprKind::Cast(Box::new(CastExpr {
                    operand: expr,
                    target_type,
                })),
                span,
            };
        }
        Ok(expr)
    }

    /// Unary prefix operators, right-associative.
    fn unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current().ty {
            TokenType::Minus => UnaryOp::Neg,
            TokenType::Plus => UnaryOp::Pos,
            TokenType::Bang => UnaryOp::Not,
            TokenType::Tilde => UnaryOp::BitNot,
            _ => return self.postfix(),
        };
        let op_span = self.current().span;
        self.advance();
        let operand = self.unary()?;
        let span = op_span.merge(operand.span);
        Ok(Expr {
            id: self.next_id(),
            kind: ExprKind::Unary(Box::new(UnaryExpr { op, operand })),
            span,
        })
    }

    /// Whether the current token can begin an expression. Used to decide
    /// if a range has an end bound. `{` is deliberately excluded so
    /// `for i in 0.. { ... }` reads the brace as the loop body.
    pub(super) fn token_starts_expr(&self) -> bool {
        matches!(
            self.current().ty,
            TokenType::IntLiteral
                | TokenType::FloatLiteral
                | TokenType::StringLiteral
                | TokenType::RawStringLiteral
                | TokenType::CharLiteral
                | TokenType::StrInterpStart
                | TokenType::Identifier
                | TokenType::KwTrue
                | TokenType::KwFalse
                | TokenType::KwIf
                | TokenType::KwMatch
                | TokenType::KwFor
                | TokenType::KwWhile
                | TokenType::LParen
                | TokenType::LBracket
                | TokenType::Minus
                | TokenType::Plus
                | TokenType::Bang
                | TokenType::Tilde
        )
    }

    /// Run `f` with struct literals re-enabled (inside parentheses,
    /// brackets, argument lists, and braced bodies).
    pub(crate) fn with_struct_literals<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.struct_literals_allowed;
        self.struct_literals_allowed = true;
        let out = f(self);
        self.struct_literals_allowed = saved;
        out
    }

    /// Run `f` with struct literals suppressed (header positions where a
    /// following `{` must read as a block).
    pub(crate) fn without_struct_literals<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.struct_literals_allowed;
        self.struct_literals_allowed = false;
        let out = f(self);
        self.struct_literals_allowed = saved;
        out
    }
}

/// Assignment targets are paths, field accesses, and index expressions;
/// anything else is rejected structurally.
fn is_assign_target(expr: &Expr) -> bool {
    matches!(
        expr.kind,
        ExprKind::Path(_) | ExprKind::Field(_) | ExprKind::Index(_)
    )
}
