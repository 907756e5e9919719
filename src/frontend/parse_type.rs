// src/frontend/parse_type.rs
//
// The shared dotted-path grammar, instantiated for the type and value
// namespaces. Any segment in a path may carry template parameters, which
// recurse fully: `Container<I32>.Iterator<Forward>` is valid.

use crate::errors::ParserError;
use crate::frontend::ast::{PathSegment, TypeName, VariableName};
use crate::frontend::parser::{ParseError, Parser};
use crate::frontend::TokenType;

impl<'src> Parser<'src> {
    /// Parse a type-namespace path. In type position a `<` after an
    /// identifier is always a template parameter list.
    pub(super) fn type_name(&mut self) -> Result<TypeName, ParseError> {
        let start_span = self.current().span;
        let mut segments = vec![self.type_segment()?];
        while self.match_token(TokenType::Dot) {
            segments.push(self.type_segment()?);
        }
        Ok(TypeName {
            segments,
            span: start_span.merge(self.previous().span),
        })
    }

    fn type_segment(&mut self) -> Result<PathSegment, ParseError> {
        let token = self.current().clone();
        if token.ty != TokenType::Identifier {
            return Err(ParseError::new(
                ParserError::ExpectedType {
                    span: token.span.into(),
                },
                token.span,
            ));
        }
        self.advance();
        let name = self.interner.intern(&token.lexeme);
        let mut span = token.span;

        let type_args = if self.check(TokenType::Lt) {
            self.advance();
            let mut args = vec![self.type_name()?];
            while self.match_token(TokenType::Comma) {
                if self.check_gt() {
                    break; // trailing comma
                }
                args.push(self.type_name()?);
            }
            self.consume_gt()?;
            span = span.merge(self.previous().span);
            args
        } else {
            Vec::new()
        };

        Ok(PathSegment {
            name,
            type_args,
            span,
        })
    }

    /// Parse a value-namespace path in expression position. Template
    /// parameters after a segment are accepted via backtracking only when
    /// they parse completely and an unambiguous follower comes next.
    pub(super) fn variable_name(&mut self) -> Result<VariableName, ParseError> {
        let start_span = self.current().span;
        let mut segments = vec![self.value_segment()?];
        while self.check(TokenType::Dot) && self.peek_next().ty == TokenType::Identifier {
            self.advance();
            segments.push(self.value_segment()?);
        }
        Ok(VariableName {
            segments,
            span: start_span.merge(self.previous().span),
        })
    }

    fn value_segment(&mut self) -> Result<PathSegment, ParseError> {
        let token = self.current().clone();
        if token.ty != TokenType::Identifier {
            return Err(ParseError::new(
                ParserError::ExpectedIdentifier {
                    span: token.span.into(),
                },
                token.span,
            ));
        }
        self.advance();
        let name = self.interner.intern(&token.lexeme);
        let mut span = token.span;

        let type_args = if self.check(TokenType::Lt) {
            let args = self.try_parse_path_type_args()?;
            if !args.is_empty() {
                span = span.merge(self.previous().span);
            }
            args
        } else {
            Vec::new()
        };

        Ok(PathSegment {
            name,
            type_args,
            span,
        })
    }
}
