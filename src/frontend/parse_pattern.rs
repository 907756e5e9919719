// src/frontend/parse_pattern.rs
//
// Pattern parsing, shared by `let` bindings, `for` loops, and match
// arms. Or-patterns sit at the top; atoms are wildcard, literal, tuple,
// struct, and simple binding patterns.

use crate::errors::ParserError;
use crate::frontend::ast::*;
use crate::frontend::parser::{ParseError, Parser};
use crate::frontend::{Span, TokenType};

impl<'src> Parser<'src> {
    /// Parse a pattern: `Atom ('|' Atom)*`, collapsing to the bare atom
    /// when there is no alternation.
    pub(super) fn pattern(&mut self) -> Result<Pattern, ParseError> {
        let first = self.pattern_atom()?;
        if !self.check(TokenType::Pipe) {
            return Ok(first);
        }

        let start_span = first.span;
        let mut alternatives = vec![first];
        while self.match_token(TokenType::Pipe) {
            alternatives.push(self.pattern_atom()?);
        }
        let span = start_span.merge(self.previous().span);
        Ok(Pattern {
            id: self.next_id(),
            kind: PatternKind::Or { alternatives },
            span,
        })
    }

    fn pattern_atom(&mut self) -> Result<Pattern, ParseError> {
        let token = self.current().clone();

        match token.ty {
            // Wildcard: _
            TokenType::Identifier if token.lexeme == "_" => {
                self.advance();
                Ok(Pattern {
                    id: self.next_id(),
                    kind: PatternKind::Wildcard,
                    span: token.span,
                })
            }
            // A name: either a struct pattern's type (possibly dotted or
            // templated) when a '{' follows, or a simple binding.
            TokenType::Identifier => {
                let snapshot = self.snapshot();
                match self.type_name() {
                    Ok(type_name) if self.check(TokenType::LBrace) => {
                        return self.struct_pattern(type_name, token.span);
                    }
                    Ok(_) => self.rewind(snapshot),
                    Err(e) => self.restore(snapshot, &e),
                }

                self.advance();
                let name = self.interner.intern(&token.lexeme);
                Ok(Pattern {
                    id: self.next_id(),
                    kind: PatternKind::Simple { name },
                    span: token.span,
                })
            }
            // Tuple pattern; zero elements is the unit pattern
            TokenType::LParen => self.tuple_pattern(),
            // Literal patterns
            TokenType::IntLiteral
            | TokenType::FloatLiteral
            | TokenType::StringLiteral
            | TokenType::RawStringLiteral
            | TokenType::CharLiteral
            | TokenType::KwTrue
            | TokenType::KwFalse => {
                let expr = self.primary()?;
                Ok(Pattern {
                    id: self.next_id(),
                    span: expr.span,
                    kind: PatternKind::Literal(Box::new(expr)),
                })
            }
            // Negated numeric literal pattern: -5
            TokenType::Minus => {
                let start_span = token.span;
                self.advance();
                let operand = self.primary()?;
                if !matches!(operand.kind, ExprKind::Integer(_) | ExprKind::Float(_)) {
                    return Err(ParseError::new(
                        ParserError::ExpectedPattern {
                            found: self.previous().ty.as_str().to_string(),
                            span: operand.span.into(),
                        },
                        operand.span,
                    ));
                }
                let span = start_span.merge(operand.span);
                let expr = Expr {
                    id: self.next_id(),
                    kind: ExprKind::Unary(Box::new(UnaryExpr {
                        op: UnaryOp::Neg,
                        operand,
                    })),
                    span,
                };
                Ok(Pattern {
                    id: self.next_id(),
                    kind: PatternKind::Literal(Box::new(expr)),
                    span,
                })
            }
            _ => Err(ParseError::new(
                ParserError::ExpectedPattern {
                    found: token.ty.as_str().to_string(),
                    span: token.span.into(),
                },
                token.span,
            )),
        }
    }

    /// `(p, p, ...)`; or-patterns nest in element positions.
    fn tuple_pattern(&mut self) -> Result<Pattern, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume '('

        let mut elements = Vec::new();
        if !self.check(TokenType::RParen) {
            loop {
                elements.push(self.pattern()?);
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
        self.consume(TokenType::RParen, "expected ')' after tuple pattern")?;

        Ok(Pattern {
            id: self.next_id(),
            kind: PatternKind::Tuple { elements },
            span: start_span.merge(end_span),
        })
    }

    /// `Type { field, field: pat, .. }`. The rest marker must be the
    /// syntactically last element before '}'; a field or trailing comma
    /// after it is a structural error, enforced right here.
    fn struct_pattern(
        &mut self,
        type_name: TypeName,
        start_span: Span,
    ) -> Result<Pattern, ParseError> {
        self.consume(TokenType::LBrace, "expected '{' in struct pattern")?;

        let mut fields = Vec::new();
        let mut has_rest = false;

        loop {
            if self.check(TokenType::RBrace) {
                break;
            }
            if self.check(TokenType::DotDot) {
                self.advance();
                has_rest = true;
                if !self.check(TokenType::RBrace) {
                    let span = self.current().span;
                    return Err(ParseError::new(
                        ParserError::RestPatternNotLast { span: span.into() },
                        span,
                    ));
                }
                break;
            }

            let field_token = self.current().clone();
            self.consume(TokenType::Identifier, "expected field name in struct pattern")?;
            let name = self.interner.intern(&field_token.lexeme);

            // Shorthand binds the field name to itself
            let (pattern, end_span) = if self.match_token(TokenType::Colon) {
                let p = self.pattern()?;
                let end = p.span;
                (Some(p), end)
            } else {
                (None, field_token.span)
            };

            fields.push(FieldPattern {
                name,
                pattern,
                span: field_token.span.merge(end_span),
            });

            if !self.match_token(TokenType::Comma) {
                break;
            }
        }

        let end_span = self.current().span;
        self.consume(TokenType::RBrace, "expected '}' after struct pattern")?;

        Ok(Pattern {
            id: self.next_id(),
            kind: PatternKind::Struct(Box::new(StructPattern {
                type_name,
                fields,
                has_rest,
            })),
            span: start_span.merge(end_span),
        })
    }
}
