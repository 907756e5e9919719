// src/frontend/parse_generic.rs
//
// Generic type parameter lists and trait bounds. The exact same grammar
// serves fn, struct, enum, trait, and impl declarations.

use crate::frontend::ast::{TraitBound, TypeName, TypeParam};
use crate::frontend::parser::{ParseError, Parser};
use crate::frontend::TokenType;

impl<'src> Parser<'src> {
    /// Parse optional type parameters: `<T>`, `<T: Ord>`, `<A, B: Eq + Hash>`.
    /// Returns an empty Vec if no '<' is present.
    pub(super) fn type_params(&mut self) -> Result<Vec<TypeParam>, ParseError> {
        if !self.check(TokenType::Lt) {
            return Ok(Vec::new());
        }
        self.advance();

        let mut params = Vec::new();
        if !self.check_gt() {
            loop {
                params.push(self.type_param()?);
                if !self.match_token(TokenType::Comma) {
                    break;
                }
                // Allow trailing comma
                if self.check_gt() {
                    break;
                }
            }
        }
        self.consume_gt()?;
        Ok(params)
    }

    /// Parse a single type parameter: `T` or `T: Bound + Bound`.
    fn type_param(&mut self) -> Result<TypeParam, ParseError> {
        let name = self.type_name()?;
        let bounds = if self.match_token(TokenType::Colon) {
            self.bound_list()?
        } else {
            Vec::new()
        };
        let span = name.span.merge(self.previous().span);
        Ok(TypeParam { name, bounds, span })
    }

    /// Parse `Bound ('+' Bound)*`; each bound is a possibly-qualified
    /// type name. Shared between type parameters and trait associated
    /// types so the bound grammar cannot diverge between contexts.
    pub(super) fn bound_list(&mut self) -> Result<Vec<TraitBound>, ParseError> {
        let mut bounds = vec![self.trait_bound()?];
        while self.match_token(TokenType::Plus) {
            bounds.push(self.trait_bound()?);
        }
        Ok(bounds)
    }

    fn trait_bound(&mut self) -> Result<TraitBound, ParseError> {
        let name = self.type_name()?;
        Ok(TraitBound {
            span: name.span,
            name,
        })
    }

    /// Try to parse template arguments on a value-path segment:
    /// `ids<I32>.first()` or `make<Pair<A, B>>(x)`.
    ///
    /// `<` is ambiguous with comparison in expression position, so the
    /// arguments are accepted only when the whole list parses and is
    /// followed by `.`, `(`, or a struct-literal-shaped `{`. Otherwise
    /// the cursor is restored and the caller sees the `<` untouched.
    pub(super) fn try_parse_path_type_args(&mut self) -> Result<Vec<TypeName>, ParseError> {
        if !self.check(TokenType::Lt) {
            return Ok(Vec::new());
        }
        let snapshot = self.snapshot();
        self.advance(); // consume '<'

        let mut args = Vec::new();
        loop {
            match self.type_name() {
                Ok(ty) => args.push(ty),
                Err(e) => {
                    self.restore(snapshot, &e);
                    return Ok(Vec::new());
                }
            }
            if !self.match_token(TokenType::Comma) {
                break;
            }
            // Allow trailing comma
            if self.check_gt() {
                break;
            }
        }

        if !self.check_gt() {
            self.rewind(snapshot);
            return Ok(Vec::new());
        }
        self.consume_gt()?;

        let follows = match self.current().ty {
            TokenType::Dot | TokenType::LParen => true,
            TokenType::LBrace => self.struct_literals_allowed && self.looks_like_struct_literal(),
            _ => false,
        };
        if !follows {
            // This was comparison, not template arguments
            self.rewind(snapshot);
            return Ok(Vec::new());
        }

        Ok(args)
    }
}
