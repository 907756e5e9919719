// src/frontend/parser/mod.rs

use crate::errors::{LexerError, ParserError};
use crate::frontend::{ast::*, Interner, Lexer, Span, Token, TokenType};

/// Recursive-descent parser over a pre-lexed token vector.
///
/// The lexer runs to completion up front, so backtracking is a
/// snapshot/restore of a single integer cursor; a failed sub-rule leaves
/// no other side effects behind. The only state that survives a rollback
/// is the furthest-progress failure, kept for final diagnostics.
pub struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
    pub(super) interner: Interner,
    lexer_errors: Vec<LexerError>,
    next_node_id: u32,
    furthest: Option<ParseError>,
    /// Undo log for in-place token splits (`>>` -> `>` `>`), so a
    /// rolled-back attempt restores the token stream exactly.
    token_undo: Vec<(usize, Token<'src>)>,
    /// Cleared while parsing `if`/`while` conditions, `for` iterables and
    /// `match` scrutinees so the following `{` reads as the body, not a
    /// struct literal. Restored inside any parenthesized subexpression.
    pub(super) struct_literals_allowed: bool,
}

/// A saved cursor position for backtracking.
#[derive(Debug, Clone, Copy)]
pub(super) struct Snapshot {
    pos: usize,
    undo_len: usize,
}

/// A parse error wrapping a miette-enabled ParserError
#[derive(Debug, Clone)]
pub struct ParseError {
    pub error: ParserError,
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error
    pub fn new(error: ParserError, span: Span) -> Self {
        Self { error, span }
    }
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize();
        let lexer_errors = lexer.take_errors();
        Self {
            tokens,
            pos: 0,
            interner: Interner::new(),
            lexer_errors,
            next_node_id: 0,
            furthest: None,
            token_undo: Vec::new(),
            struct_literals_allowed: true,
        }
    }

    /// Generate a unique node ID
    pub(super) fn next_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    /// Parse a whole translation unit. This is the strict entry point:
    /// it fails unless every non-whitespace token is consumed, and on
    /// failure reports the deepest failure observed.
    pub fn parse_module(&mut self) -> Result<Module, ParseError> {
        let start_span = self.current().span;
        let result = self.module_items();
        match result {
            Ok(items) => {
                // The item loop only stops at Eof, but keep the
                // full-consumption contract explicit.
                if !self.check(TokenType::Eof) {
                    let span = self.current().span;
                    return Err(self.deepest(ParseError::new(
                        ParserError::TrailingInput { span: span.into() },
                        span,
                    )));
                }
                let span = if items.is_empty() {
                    start_span
                } else {
                    start_span.merge(self.previous().span)
                };
                Ok(Module { items, span })
            }
            Err(e) => Err(self.deepest(e)),
        }
    }

    fn module_items(&mut self) -> Result<Vec<Item>, ParseError> {
        let mut items = Vec::new();
        while !self.check(TokenType::Eof) {
            items.push(self.item()?);
        }
        Ok(items)
    }

    /// Lenient per-rule entry points, used for fine-grained testing.
    /// These leave trailing input unconsumed.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.expression(0)
    }

    pub fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        self.statement()
    }

    pub fn parse_item(&mut self) -> Result<Item, ParseError> {
        self.item()
    }

    pub fn parse_pattern(&mut self) -> Result<Pattern, ParseError> {
        self.pattern()
    }

    pub fn parse_type(&mut self) -> Result<TypeName, ParseError> {
        self.type_name()
    }

    /// True when the parser has consumed everything but Eof.
    pub fn at_end(&self) -> bool {
        self.check(TokenType::Eof)
    }

    /// Get a reference to the interner
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Consume the parser and return the interner
    pub fn into_interner(self) -> Interner {
        self.interner
    }

    /// Errors the lexer collected while tokenizing (for diagnostics).
    pub fn lexer_errors(&self) -> &[LexerError] {
        &self.lexer_errors
    }

    pub fn take_lexer_errors(&mut self) -> Vec<LexerError> {
        std::mem::take(&mut self.lexer_errors)
    }

    // -- token cursor -------------------------------------------------------

    pub(super) fn current(&self) -> &Token<'src> {
        &self.tokens[self.pos]
    }

    pub(super) fn previous(&self) -> &Token<'src> {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Peek one token past the current one.
    pub(super) fn peek_next(&self) -> &Token<'src> {
        let idx = (self.pos + 1).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Peek `n` tokens past the current one.
    pub(super) fn peek_nth(&self, n: usize) -> &Token<'src> {
        let idx = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Advance to the next token
    pub(super) fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Check if the current token matches the given type
    pub(super) fn check(&self, ty: TokenType) -> bool {
        self.current().ty == ty
    }

    /// Consume the current token if it matches, otherwise return false
    pub(super) fn match_token(&mut self, ty: TokenType) -> bool {
        if self.check(ty) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Require a token of the given type, or return an error
    pub(super) fn consume(&mut self, ty: TokenType, msg: &str) -> Result<(), ParseError> {
        if self.check(ty) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::new(
                ParserError::ExpectedToken {
                    expected: msg.to_string(),
                    found: self.current().ty.as_str().to_string(),
                    span: self.current().span.into(),
                },
                self.current().span,
            ))
        }
    }

    // -- backtracking -------------------------------------------------------

    /// Save the cursor before attempting an alternative production.
    pub(super) fn snapshot(&self) -> Snapshot {
        Snapshot {
            pos: self.pos,
            undo_len: self.token_undo.len(),
        }
    }

    /// Roll the cursor back after a failed attempt, retaining the failure
    /// as a candidate for the final "deepest failure" diagnostic.
    pub(super) fn restore(&mut self, snapshot: Snapshot, failure: &ParseError) {
        self.note_failure(failure);
        self.rewind(snapshot);
    }

    /// Roll the cursor back without an associated failure (the attempt
    /// was a lookahead that simply did not apply).
    pub(super) fn rewind(&mut self, snapshot: Snapshot) {
        while self.token_undo.len() > snapshot.undo_len {
            if let Some((index, token)) = self.token_undo.pop() {
                self.tokens[index] = token;
            }
        }
        self.pos = snapshot.pos;
    }

    /// Record a discarded failure if it progressed further than any seen.
    pub(super) fn note_failure(&mut self, failure: &ParseError) {
        let further = match &self.furthest {
            Some(f) => failure.span.start > f.span.start,
            None => true,
        };
        if further {
            self.furthest = Some(failure.clone());
        }
    }

    /// Pick the deeper of the bubbled error and the furthest recorded one.
    fn deepest(&self, bubbled: ParseError) -> ParseError {
        match &self.furthest {
            Some(f) if f.span.start > bubbled.span.start => f.clone(),
            _ => bubbled,
        }
    }

    // -- shared error constructors -----------------------------------------

    pub(super) fn expected_expression(&self) -> ParseError {
        let token = self.current();
        if token.ty == TokenType::Error {
            return self.invalid_literal();
        }
        ParseError::new(
            ParserError::ExpectedExpression {
                found: token.ty.as_str().to_string(),
                span: token.span.into(),
            },
            token.span,
        )
    }

    /// Bridge a lexer error token into an ordinary parse failure so that
    /// malformed literals surface exactly like expected-token failures.
    pub(super) fn invalid_literal(&self) -> ParseError {
        let token = self.current();
        ParseError::new(
            ParserError::InvalidLiteral {
                message: token.lexeme.to_string(),
                span: token.span.into(),
            },
            token.span,
        )
    }

    // -- '>' handling inside template parameter lists -----------------------

    /// In type-argument position a `>>` (or `>=`) token is two adjacent
    /// closers; split it instead of failing on `Vec<Vec<I32>>`.
    pub(super) fn check_gt(&self) -> bool {
        matches!(
            self.current().ty,
            TokenType::Gt | TokenType::GreaterGreater | TokenType::GtEq
        )
    }

    pub(super) fn consume_gt(&mut self) -> Result<(), ParseError> {
        match self.current().ty {
            TokenType::Gt => {
                self.advance();
                Ok(())
            }
            TokenType::GreaterGreater => {
                self.split_current(TokenType::Gt, ">");
                Ok(())
            }
            TokenType::GtEq => {
                self.split_current(TokenType::Eq, "=");
                Ok(())
            }
            _ => Err(ParseError::new(
                ParserError::ExpectedToken {
                    expected: "'>' after type arguments".to_string(),
                    found: self.current().ty.as_str().to_string(),
                    span: self.current().span.into(),
                },
                self.current().span,
            )),
        }
    }

    /// Replace the current two-character token with its one-character
    /// remainder, consuming the leading '>' in place. The original token
    /// goes on the undo log so backtracking can put it back.
    fn split_current(&mut self, remainder: TokenType, lexeme: &'static str) {
        let old = self.tokens[self.pos].clone();
        let span = Span::new_with_end(
            old.span.start + 1,
            old.span.end,
            old.span.line,
            old.span.column + 1,
            old.span.end_line,
            old.span.end_column,
        );
        self.token_undo.push((self.pos, old));
        self.tokens[self.pos] = Token::new(remainder, lexeme, span);
    }
}

#[cfg(test)]
mod tests;
