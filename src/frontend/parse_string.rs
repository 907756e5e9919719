// src/frontend/parse_string.rs
//
// Interpolated string assembly. The lexer hands the string over as a
// Start/Middle/End token sandwich with ordinary expression tokens in
// between; this module stitches the parts back together. Literal
// segments keep their escapes verbatim - decoding is deferred.

use crate::errors::ParserError;
use crate::frontend::ast::{Expr, ExprKind, StringPart};
use crate::frontend::parser::{ParseError, Parser};
use crate::frontend::TokenType;

impl<'src> Parser<'src> {
    /// Parse an interpolated string starting at a StrInterpStart token.
    pub(crate) fn parse_interpolated_string(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current().span;
        let mut parts = Vec::new();

        // Start token: "text{  ->  text
        let content = strip_delimiters(&self.current().lexeme);
        if !content.is_empty() {
            parts.push(StringPart::Literal(content));
        }
        self.advance();

        loop {
            // The embedded expression uses the full grammar, recursively
            // (nested interpolated strings included).
            let expr = self.with_struct_literals(|p| p.expression(0))?;
            parts.push(StringPart::Expr(Box::new(expr)));

            match self.current().ty {
                TokenType::StrInterpMiddle => {
                    // }text{ - more segments follow
                    let content = strip_delimiters(&self.current().lexeme);
                    if !content.is_empty() {
                        parts.push(StringPart::Literal(content));
                    }
                    self.advance();
                }
                TokenType::StrInterpEnd => {
                    // }text" - done
                    let content = strip_delimiters(&self.current().lexeme);
                    if !content.is_empty() {
                        parts.push(StringPart::Literal(content));
                    }
                    let end_span = self.current().span;
                    self.advance();
                    return Ok(Expr {
                        id: self.next_id(),
                        kind: ExprKind::Interp(parts),
                        span: start_span.merge(end_span),
                    });
                }
                _ => {
                    return Err(ParseError::new(
                        ParserError::UnterminatedInterpolation {
                            span: self.current().span.into(),
                        },
                        self.current().span,
                    ));
                }
            }
        }
    }
}

/// Drop the single structural delimiter byte from each end of an interp
/// token lexeme (`"`/`{`/`}`); everything between stays as written.
fn strip_delimiters(lexeme: &str) -> String {
    lexeme[1..lexeme.len() - 1].to_string()
}
