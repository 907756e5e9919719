// src/frontend/parse_expr/match_expr.rs

use crate::frontend::ast::*;
use crate::frontend::parser::{ParseError, Parser};
use crate::frontend::TokenType;

impl<'src> Parser<'src> {
    /// Parse a match expression.
    pub(super) fn match_expr(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'match'

        let scrutinee = self.without_struct_literals(|p| p.expression(0))?;

        self.consume(TokenType::LBrace, "expected '{' after match scrutinee")?;

        let arms = self.with_struct_literals(|p| -> Result<Vec<MatchArm>, ParseError> {
            let mut arms = Vec::new();
            while !p.check(TokenType::RBrace) && !p.check(TokenType::Eof) {
                arms.push(p.match_arm()?);
            }
            Ok(arms)
        })?;

        let end_span = self.current().span;
        self.consume(TokenType::RBrace, "expected '}' after match arms")?;

        Ok(Expr {
            id: self.next_id(),
            kind: ExprKind::Match(Box::new(MatchExpr { scrutinee, arms })),
            span: start_span.merge(end_span),
        })
    }

    /// One arm: `Pattern ('if' guard)? '=>' expr ','?`. The comma is
    /// optional after every arm, the final one included.
    fn match_arm(&mut self) -> Result<MatchArm, ParseError> {
        let start_span = self.current().span;

        let pattern = self.pattern()?;

        let guard = if self.match_token(TokenType::KwIf) {
            Some(self.expression(0)?)
        } else {
            None
        };

        self.consume(TokenType::FatArrow, "expected '=>' after pattern")?;

        let body = self.expression(0)?;
        let span = start_span.merge(body.span);

        self.match_token(TokenType::Comma);

        Ok(MatchArm {
            id: self.next_id(),
            pattern,
            guard,
            body,
            span,
        })
    }
}
