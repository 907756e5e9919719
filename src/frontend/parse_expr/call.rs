// src/frontend/parse_expr/call.rs
//
// Postfix chains: function calls, index expressions, and field access,
// freely interleaved and left-associative.

use crate::frontend::ast::*;
use crate::frontend::parser::{ParseError, Parser};
use crate::frontend::TokenType;

impl<'src> Parser<'src> {
    pub(super) fn postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        loop {
            if self.match_token(TokenType::LParen) {
                expr = self.finish_call(expr)?;
            } else if self.match_token(TokenType::LBracket) {
                // Index expression: expr[index]
                let index = self.with_struct_literals(|p| p.expression(0))?;
                let end_span = self.current().span;
                self.consume(TokenType::RBracket, "expected ']' after index")?;

                let span = expr.span.merge(end_span);
                expr = Expr {
                    id: self.next_id(),
                    kind: ExprKind::Index(Box::new(IndexExpr { base: expr, index })),
                    span,
                };
            } else if self.match_token(TokenType::Dot) {
                // Field access after a call/index/grouping result. Dots
                // directly after an identifier are consumed by the path
                // grammar in primary() instead.
                let field_token = self.current().clone();
                self.consume(TokenType::Identifier, "expected field name after '.'")?;
                let field = self.interner.intern(&field_token.lexeme);

                let span = expr.span.merge(field_token.span);
                expr = Expr {
                    id: self.next_id(),
                    kind: ExprKind::Field(Box::new(FieldAccessExpr {
                        object: expr,
                        field,
                        field_span: field_token.span,
                    })),
                    span,
                };
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// Finish parsing a function call (after the opening paren).
    pub(super) fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();

        if !self.check(TokenType::RParen) {
            loop {
                args.push(self.with_struct_literals(|p| p.expression(0))?);
                if !self.match_token(TokenType::Comma) {
                    break;
                }
                // Allow trailing comma
                if self.check(TokenType::RParen) {
                    break;
                }
            }
        }

        let end_span = self.current().span;
        self.consume(TokenType::RParen, "expected ')' after arguments")?;

        let span = callee.span.merge(end_span);
        Ok(Expr {
            id: self.next_id(),
            kind: ExprKind::Call(Box::new(CallExpr { callee, args })),
            span,
        })
    }
}
