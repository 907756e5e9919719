// src/frontend/parse_expr/primary.rs
//
// Primary expressions: literals, paths, struct literals, grouping and
// tuples, arrays, block expressions, and the composite if/while/for
// expression forms.

use crate::errors::ParserError;
use crate::frontend::ast::*;
use crate::frontend::parser::{ParseError, Parser};
use crate::frontend::{Span, TokenType};

const INT_SUFFIXES: &[&str] = &["I16", "I32", "I64", "I8", "U16", "U32", "U64", "U8"];
const FLOAT_SUFFIXES: &[&str] = &["F32", "F64"];

/// Canonicalize an integer lexeme: strip underscores, lowercase the base
/// prefix, split off the suffix exactly as written. Digit case is kept.
fn clean_integer(lexeme: &str) -> IntegerLit {
    let (body, suffix) = split_suffix(lexeme, INT_SUFFIXES);
    let mut value: String = body.chars().filter(|&c| c != '_').collect();
    let lowered = {
        let bytes = value.as_bytes();
        if bytes.len() >= 2 && bytes[0] == b'0' {
            match bytes[1] {
                b'X' => Some("x"),
                b'O' => Some("o"),
                b'B' => Some("b"),
                _ => None,
            }
        } else {
            None
        }
    };
    if let Some(prefix) = lowered {
        value.replace_range(1..2, prefix);
    }
    IntegerLit {
        value,
        suffix: suffix.map(str::to_string),
    }
}

/// Canonicalize a float lexeme: `nan`/`inf` spellings lowercase, other
/// text kept as written minus underscores; suffix split off verbatim.
fn clean_float(lexeme: &str) -> FloatLit {
    let (body, suffix) = split_suffix(lexeme, FLOAT_SUFFIXES);
    let value = if body.eq_ignore_ascii_case("nan") || body.eq_ignore_ascii_case("inf") {
        body.to_ascii_lowercase()
    } else {
        body.chars().filter(|&c| c != '_').collect()
    };
    FloatLit {
        value,
        suffix: suffix.map(str::to_string),
    }
}

fn split_suffix<'a>(lexeme: &'a str, suffixes: &[&str]) -> (&'a str, Option<&'a str>) {
    for suffix in suffixes {
        if let Some(body) = lexeme.strip_suffix(suffix) {
            if !body.is_empty() {
                return (body, Some(&lexeme[body.len()..]));
            }
        }
    }
    (lexeme, None)
}

impl<'src> Parser<'src> {
    /// Check whether the `{` at the cursor opens a struct literal rather
    /// than a block: `Name { }` or `Name { field: ... }`. Field shorthand
    /// does not exist at the literal level, so `Name { x }` is a block.
    pub(crate) fn looks_like_struct_literal(&self) -> bool {
        match self.peek_next().ty {
            TokenType::RBrace => true,
            TokenType::Identifier => self.peek_nth(2).ty == TokenType::Colon,
            _ => false,
        }
    }

    /// Parse a primary expression.
    pub(crate) fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();

        match token.ty {
            TokenType::IntLiteral => {
                self.advance();
                Ok(Expr {
                    id: self.next_id(),
                    kind: ExprKind::Integer(clean_integer(&token.lexeme)),
                    span: token.span,
                })
            }
            TokenType::FloatLiteral => {
                self.advance();
                Ok(Expr {
                    id: self.next_id(),
                    kind: ExprKind::Float(clean_float(&token.lexeme)),
                    span: token.span,
                })
            }
            TokenType::KwTrue | TokenType::KwFalse => {
                self.advance();
                Ok(Expr {
                    id: self.next_id(),
                    kind: ExprKind::Bool(token.ty == TokenType::KwTrue),
                    span: token.span,
                })
            }
            TokenType::StringLiteral | TokenType::RawStringLiteral => {
                self.advance();
                // Stored verbatim, quotes and escapes included
                Ok(Expr {
                    id: self.next_id(),
                    kind: ExprKind::Str(StrLit {
                        text: token.lexeme.to_string(),
                    }),
                    span: token.span,
                })
            }
            TokenType::CharLiteral => {
                self.advance();
                Ok(Expr {
                    id: self.next_id(),
                    kind: ExprKind::Char(CharLit {
                        text: token.lexeme.to_string(),
                    }),
                    span: token.span,
                })
            }
            TokenType::StrInterpStart => self.parse_interpolated_string(),
            TokenType::Identifier => {
                let path = self.variable_name()?;

                // Struct literal: Type { field: value } (suppressed in
                // header positions so `match x {` keeps its body).
                if self.struct_literals_allowed
                    && self.check(TokenType::LBrace)
                    && self.looks_like_struct_literal()
                {
                    let start_span = path.span;
                    return self.struct_literal(path.into_type_name(), start_span);
                }

                Ok(Expr {
                    id: self.next_id(),
                    span: path.span,
                    kind: ExprKind::Path(path),
                })
            }
            TokenType::LParen => self.paren_expr(),
            TokenType::LBracket => self.array_literal(),
            TokenType::LBrace => {
                let block = self.block()?;
                Ok(Expr {
                    id: self.next_id(),
                    span: block.span,
                    kind: ExprKind::Block(Box::new(block)),
                })
            }
            TokenType::KwIf => self.if_expr(),
            TokenType::KwMatch => self.match_expr(),
            TokenType::KwWhile => self.while_expr(),
            TokenType::KwFor => self.for_expr(),
            TokenType::Error => Err(self.invalid_literal()),
            _ => Err(self.expected_expression()),
        }
    }

    /// `(` opens unit, grouping, or a tuple literal. A single element
    /// without a trailing comma is grouping (transparent, no node); with
    /// a trailing comma it is a one-element tuple.
    fn paren_expr(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume '('

        if self.check(TokenType::RParen) {
            let end_span = self.current().span;
            self.advance();
            return Ok(Expr {
                id: self.next_id(),
                kind: ExprKind::Unit,
                span: start_span.merge(end_span),
            });
        }

        let first = self.with_struct_literals(|p| p.expression(0))?;

        if self.check(TokenType::Comma) {
            let mut elements = vec![first];
            while self.match_token(TokenType::Comma) {
                if self.check(TokenType::RParen) {
                    break; // trailing comma
                }
                elements.push(self.with_struct_literals(|p| p.expression(0))?);
            }
            let end_span = self.current().span;
            self.consume(TokenType::RParen, "expected ')' after tuple elements")?;
            return Ok(Expr {
                id: self.next_id(),
                kind: ExprKind::Tuple(elements),
                span: start_span.merge(end_span),
            });
        }

        self.consume(TokenType::RParen, "expected ')' after expression")?;
        // Grouping is transparent; the inner expression is the result.
        Ok(first)
    }

    fn array_literal(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume '['

        let mut elements = Vec::new();
        if !self.check(TokenType::RBracket) {
            loop {
                elements.push(self.with_struct_literals(|p| p.expression(0))?);
                if !self.match_token(TokenType::Comma) {
                    break;
                }
                // Allow trailing comma
                if self.check(TokenType::RBracket) {
                    break;
                }
            }
        }

        let end_span = self.current().span;
        self.consume(TokenType::RBracket, "expected ']' after array elements")?;

        Ok(Expr {
            id: self.next_id(),
            kind: ExprKind::Array(elements),
            span: start_span.merge(end_span),
        })
    }

    /// Parse a struct literal body: `Type { field: value, ... }`.
    /// There is no field shorthand here; the `:` is mandatory.
    pub(super) fn struct_literal(
        &mut self,
        type_name: TypeName,
        start_span: Span,
    ) -> Result<Expr, ParseError> {
        self.consume(TokenType::LBrace, "expected '{'")?;

        let mut fields = Vec::new();
        while !self.check(TokenType::RBrace) && !self.check(TokenType::Eof) {
            let field_token = self.current().clone();
            self.consume(TokenType::Identifier, "expected field name")?;
            let name = self.interner.intern(&field_token.lexeme);

            self.consume(TokenType::Colon, "expected ':' after field name")?;
            let value = self.with_struct_literals(|p| p.expression(0))?;

            fields.push(FieldInit {
                name,
                span: field_token.span.merge(self.previous().span),
                value,
            });

            if !self.match_token(TokenType::Comma) {
                break;
            }
        }

        let end_span = self.current().span;
        self.consume(TokenType::RBrace, "expected '}' after struct literal")?;

        Ok(Expr {
            id: self.next_id(),
            kind: ExprKind::StructLiteral(Box::new(StructLiteralExpr { type_name, fields })),
            span: start_span.merge(end_span),
        })
    }

    /// `if cond { } else if cond { } else { }` with a flat else-if list.
    /// The condition is never parenthesized; `if (x) { }` is an error.
    pub(super) fn if_expr(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'if'

        if self.check(TokenType::LParen) {
            return Err(self.paren_condition_error());
        }
        let condition = self.without_struct_literals(|p| p.expression(0))?;
        let then_block = self.block()?;

        let mut else_ifs = Vec::new();
        let mut else_block = None;
        while self.match_token(TokenType::KwElse) {
            if self.match_token(TokenType::KwIf) {
                let elif_start = self.previous().span;
                if self.check(TokenType::LParen) {
                    return Err(self.paren_condition_error());
                }
                let cond = self.without_struct_literals(|p| p.expression(0))?;
                let block = self.block()?;
                let span = elif_start.merge(block.span);
                else_ifs.push(ElseIf {
                    condition: cond,
                    block,
                    span,
                });
            } else {
                else_block = Some(self.block()?);
                break;
            }
        }

        let span = start_span.merge(self.previous().span);
        Ok(Expr {
            id: self.next_id(),
            kind: ExprKind::If(Box::new(IfExpr {
                condition,
                then_block,
                else_ifs,
                else_block,
            })),
            span,
        })
    }

    fn paren_condition_error(&self) -> ParseError {
        let span = self.current().span;
        ParseError::new(
            ParserError::ParenthesizedCondition { span: span.into() },
            span,
        )
    }

    pub(super) fn while_expr(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'while'

        let condition = self.without_struct_literals(|p| p.expression(0))?;
        let body = self.block()?;
        let span = start_span.merge(body.span);

        Ok(Expr {
            id: self.next_id(),
            kind: ExprKind::While(Box::new(WhileExpr { condition, body })),
            span,
        })
    }

    pub(super) fn for_expr(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current().span;
        self.advance(); // consume 'for'

        let pattern = self.pattern()?;
        self.consume(TokenType::KwIn, "expected 'in' after loop pattern")?;
        let iterable = self.without_struct_literals(|p| p.expression(0))?;
        let body = self.block()?;
        let span = start_span.merge(body.span);

        Ok(Expr {
            id: self.next_id(),
            kind: ExprKind::For(Box::new(ForExpr {
                pattern,
                iterable,
                body,
            })),
            span,
        })
    }
}
