// src/frontend/lexer/strings.rs
//
// String, raw string, char, and interpolation scanning. All literal
// tokens keep their source text verbatim; escape decoding is deferred
// to later stages.

use crate::errors::LexerError;
use crate::frontend::{Token, TokenType};

use super::Lexer;

impl<'src> Lexer<'src> {
    /// Scan a string literal (basic, with interpolation start support).
    ///
    /// `{expr}` opens an interpolation; `{}` stays literal text; `\{`
    /// never opens one (the backslash consumes the brace below).
    pub(super) fn string(&mut self) -> Token<'src> {
        loop {
            match self.peek_byte() {
                None | Some(b'\n') => {
                    return self.error_unterminated_string();
                }
                Some(b'"') => {
                    self.advance();
                    return self.make_token(TokenType::StringLiteral);
                }
                Some(b'\\') => {
                    // Escape sequence - consume backslash and next char
                    self.advance();
                    if self.current < self.bytes.len() {
                        self.advance();
                    }
                }
                Some(b'{') => {
                    if self.bytes.get(self.current + 1) == Some(&b'}') {
                        // Empty braces are literal text, not interpolation
                        self.advance();
                        self.advance();
                    } else {
                        self.advance();
                        self.interp_depths.push(1);
                        return self.make_token(TokenType::StrInterpStart);
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Continue scanning after an interpolation expression closes.
    pub(super) fn string_interp_continue(&mut self) -> Token<'src> {
        // We just consumed '}', keep it in the token
        self.start = self.current - 1;
        self.start_line = self.line;
        self.start_column = self.column.saturating_sub(1);

        loop {
            match self.peek_byte() {
                None | Some(b'\n') => {
                    return self.error_unterminated_string();
                }
                Some(b'"') => {
                    self.advance();
                    self.interp_depths.pop();
                    return self.make_token(TokenType::StrInterpEnd);
                }
                Some(b'{') => {
                    if self.bytes.get(self.current + 1) == Some(&b'}') {
                        self.advance();
                        self.advance();
                    } else {
                        self.advance();
                        *self
                            .interp_depths
                            .last_mut()
                            .expect("interp continuation requires an active interpolation") = 1;
                        return self.make_token(TokenType::StrInterpMiddle);
                    }
                }
                Some(b'\\') => {
                    self.advance();
                    if self.current < self.bytes.len() {
                        self.advance();
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Scan a raw string literal. The leading 'r' has been consumed; the
    /// cursor sits on the hashes (if any) before the opening quote. The
    /// closing delimiter is '"' followed by exactly the same number of
    /// hashes; nothing inside is escaped.
    pub(super) fn raw_string(&mut self) -> Token<'src> {
        let mut hashes = 0usize;
        while self.peek_byte() == Some(b'#') {
            self.advance();
            hashes += 1;
        }
        self.advance(); // opening quote, guaranteed by raw_string_ahead

        loop {
            match self.peek_byte() {
                None => {
                    return self.error_unterminated_raw_string(hashes);
                }
                Some(b'"') => {
                    if self.hashes_follow(self.current + 1, hashes) {
                        self.advance();
                        for _ in 0..hashes {
                            self.advance();
                        }
                        return self.make_token(TokenType::RawStringLiteral);
                    }
                    // A quote with too few hashes is content
                    self.advance();
                }
                Some(b'\n') => {
                    // Raw strings span lines
                    self.current += 1;
                    self.line += 1;
                    self.column = 1;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    fn hashes_follow(&self, mut pos: usize, n: usize) -> bool {
        for _ in 0..n {
            if self.bytes.get(pos) != Some(&b'#') {
                return false;
            }
            pos += 1;
        }
        true
    }

    /// Scan a character literal: exactly one character or one escape
    /// sequence between single quotes.
    pub(super) fn char_literal(&mut self) -> Token<'src> {
        match self.peek_byte() {
            None | Some(b'\n') => {
                return self.error_invalid_char("unterminated character literal");
            }
            Some(b'\'') => {
                self.advance();
                return self.error_invalid_char("empty character literal");
            }
            Some(b'\\') => {
                self.advance();
                let escaped = self.advance();
                if escaped == Some('x') {
                    // \xHH - up to two hex digits belong to the escape
                    let mut digits = 0;
                    while digits < 2
                        && matches!(self.peek_byte(), Some(b) if b.is_ascii_hexdigit())
                    {
                        self.advance();
                        digits += 1;
                    }
                }
            }
            Some(_) => {
                // One character, multi-byte UTF-8 included
                self.advance();
            }
        }

        match self.peek_byte() {
            Some(b'\'') => {
                self.advance();
                self.make_token(TokenType::CharLiteral)
            }
            None | Some(b'\n') => self.error_invalid_char("unterminated character literal"),
            _ => {
                // Consume through the closing quote for a useful span
                while !matches!(self.peek_byte(), None | Some(b'\'') | Some(b'\n')) {
                    self.advance();
                }
                if self.peek_byte() == Some(b'\'') {
                    self.advance();
                }
                self.error_invalid_char("more than one character")
            }
        }
    }

    /// Create an error token and collect an error for an unterminated string.
    pub(super) fn error_unterminated_string(&mut self) -> Token<'src> {
        let span = self.token_span();
        tracing::debug!(
            line = self.start_line,
            col = self.start_column,
            "lexer error: unterminated string"
        );
        self.errors
            .push(LexerError::UnterminatedString { span: span.into() });
        Token::new(TokenType::Error, "unterminated string literal", span)
    }

    fn error_unterminated_raw_string(&mut self, hashes: usize) -> Token<'src> {
        let span = self.token_span();
        tracing::debug!(
            hashes,
            line = self.start_line,
            col = self.start_column,
            "lexer error: unterminated raw string"
        );
        self.errors.push(LexerError::UnterminatedRawString {
            hashes,
            span: span.into(),
        });
        Token::new(TokenType::Error, "unterminated raw string literal", span)
    }

    fn error_invalid_char(&mut self, reason: &str) -> Token<'src> {
        let span = self.token_span();
        tracing::debug!(
            reason,
            line = self.start_line,
            col = self.start_column,
            "lexer error: invalid character literal"
        );
        self.errors.push(LexerError::InvalidCharLiteral {
            reason: reason.to_string(),
            span: span.into(),
        });
        Token::new(
            TokenType::Error,
            format!("invalid character literal: {}", reason),
            span,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_kept_verbatim() {
        let mut lexer = Lexer::new("\"a\\n\\t\\\\ \\\" \\x41 b\"");
        let t = lexer.next_token();
        assert_eq!(t.ty, TokenType::StringLiteral);
        assert_eq!(t.lexeme, "\"a\\n\\t\\\\ \\\" \\x41 b\"");
    }

    #[test]
    fn escaped_quote_does_not_terminate() {
        let mut lexer = Lexer::new("\"say \\\"hi\\\"\"");
        let t = lexer.next_token();
        assert_eq!(t.ty, TokenType::StringLiteral);
        assert_eq!(lexer.next_token().ty, TokenType::Eof);
    }

    #[test]
    fn unterminated_string_at_newline() {
        let mut lexer = Lexer::new("\"hello\nworld\"");
        assert_eq!(lexer.next_token().ty, TokenType::Error);
        assert!(lexer.has_errors());
    }

    #[test]
    fn interp_tokens_carry_delimiters() {
        let mut lexer = Lexer::new("\"sum: {a + b} done\"");
        let start = lexer.next_token();
        assert_eq!(start.ty, TokenType::StrInterpStart);
        assert_eq!(start.lexeme, "\"sum: {");
        assert_eq!(lexer.next_token().ty, TokenType::Identifier);
        assert_eq!(lexer.next_token().ty, TokenType::Plus);
        assert_eq!(lexer.next_token().ty, TokenType::Identifier);
        let end = lexer.next_token();
        assert_eq!(end.ty, TokenType::StrInterpEnd);
        assert_eq!(end.lexeme, "} done\"");
    }

    #[test]
    fn braces_inside_interpolation_balance() {
        // The expression may itself contain braces
        let mut lexer = Lexer::new("\"v: {if x { 1 } else { 2 }}\"");
        assert_eq!(lexer.next_token().ty, TokenType::StrInterpStart);
        let mut depth = 0;
        loop {
            let t = lexer.next_token();
            match t.ty {
                TokenType::LBrace => depth += 1,
                TokenType::RBrace => depth -= 1,
                TokenType::StrInterpEnd => break,
                TokenType::Eof => panic!("interpolation never closed"),
                _ => {}
            }
        }
        assert_eq!(depth, 0);
        assert_eq!(lexer.next_token().ty, TokenType::Eof);
    }

    #[test]
    fn raw_string_spans_lines() {
        let source = "r\"line one\nline two\"";
        let mut lexer = Lexer::new(source);
        let t = lexer.next_token();
        assert_eq!(t.ty, TokenType::RawStringLiteral);
        assert_eq!(t.lexeme, source);
        assert_eq!(t.span.end_line, 2);
    }

    #[test]
    fn raw_string_backslashes_are_content() {
        let source = "r#\"no \\n escapes \" here\"#";
        let mut lexer = Lexer::new(source);
        let t = lexer.next_token();
        assert_eq!(t.ty, TokenType::RawStringLiteral);
        assert_eq!(t.lexeme, source);
    }

    #[test]
    fn char_escape_quote() {
        let mut lexer = Lexer::new("'\\''");
        let t = lexer.next_token();
        assert_eq!(t.ty, TokenType::CharLiteral);
        assert_eq!(t.lexeme, "'\\''");
    }
}
