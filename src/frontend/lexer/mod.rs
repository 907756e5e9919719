// src/frontend/lexer/mod.rs

mod numbers;
mod strings;

use crate::errors::LexerError;
use crate::frontend::{Span, Token, TokenType};

/// Smallest byte value that starts a multi-byte UTF-8 sequence (non-ASCII).
const UTF8_MULTIBYTE: u8 = 0x80;

#[derive(Clone)]
pub struct Lexer<'src> {
    pub(crate) source: &'src str,
    pub(crate) bytes: &'src [u8],
    pub(crate) current: usize,
    pub(crate) start: usize,
    pub(crate) line: u32,
    pub(crate) column: u32,
    pub(crate) start_column: u32,
    pub(crate) start_line: u32,
    // Interpolation state: one brace-depth counter per nested interpolated
    // string, so interpolations may themselves contain interpolated strings.
    pub(crate) interp_depths: Vec<u32>,
    // Error collection
    pub(crate) errors: Vec<LexerError>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_column: 1,
            start_line: 1,
            interp_depths: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Lex the entire source into a token vector ending in `Eof`.
    pub fn tokenize(&mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.ty == TokenType::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Take all collected errors, leaving the internal list empty.
    pub fn take_errors(&mut self) -> Vec<LexerError> {
        std::mem::take(&mut self.errors)
    }

    /// Check if any errors have been collected.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the source string being lexed.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Get the next token from the source
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_trivia();

        self.start = self.current;
        self.start_column = self.column;
        self.start_line = self.line;

        let Some(c) = self.advance() else {
            return self.make_token(TokenType::Eof);
        };

        match c {
            '(' => self.make_token(TokenType::LParen),
            ')' => self.make_token(TokenType::RParen),
            '{' => {
                if let Some(depth) = self.interp_depths.last_mut() {
                    *depth += 1;
                }
                self.make_token(TokenType::LBrace)
            }
            '}' => {
                if let Some(depth) = self.interp_depths.last_mut() {
                    if *depth > 0 {
                        *depth -= 1;
                        if *depth == 0 {
                            return self.string_interp_continue();
                        }
                    }
                }
                self.make_token(TokenType::RBrace)
            }
            '[' => self.make_token(TokenType::LBracket),
            ']' => self.make_token(TokenType::RBracket),
            ',' => self.make_token(TokenType::Comma),
            ';' => self.make_token(TokenType::Semicolon),
            ':' => self.make_token(TokenType::Colon),
            '+' => self.make_token(TokenType::Plus),
            '-' => self.make_token(TokenType::Minus),
            '*' => self.make_token(TokenType::Star),
            '/' => self.make_token(TokenType::Slash),
            '%' => self.make_token(TokenType::Percent),
            '^' => self.make_token(TokenType::Caret),
            '~' => self.make_token(TokenType::Tilde),
            '=' => {
                if self.match_byte(b'=') {
                    self.make_token(TokenType::EqEq)
                } else if self.match_byte(b'>') {
                    self.make_token(TokenType::FatArrow)
                } else {
                    self.make_token(TokenType::Eq)
                }
            }
            '!' => {
                if self.match_byte(b'=') {
                    self.make_token(TokenType::BangEq)
                } else {
                    self.make_token(TokenType::Bang)
                }
            }
            '&' => {
                if self.match_byte(b'&') {
                    self.make_token(TokenType::AmpAmp)
                } else {
                    self.make_token(TokenType::Ampersand)
                }
            }
            '|' => {
                if self.match_byte(b'|') {
                    self.make_token(TokenType::PipePipe)
                } else {
                    self.make_token(TokenType::Pipe)
                }
            }
            '<' => {
                if self.match_byte(b'<') {
                    self.make_token(TokenType::LessLess)
                } else if self.match_byte(b'=') {
                    self.make_token(TokenType::LtEq)
                } else {
                    self.make_token(TokenType::Lt)
                }
            }
            '>' => {
                if self.match_byte(b'>') {
                    self.make_token(TokenType::GreaterGreater)
                } else if self.match_byte(b'=') {
                    self.make_token(TokenType::GtEq)
                } else {
                    self.make_token(TokenType::Gt)
                }
            }
            '.' => {
                if self.match_byte(b'.') {
                    if self.match_byte(b'=') {
                        self.make_token(TokenType::DotDotEqual)
                    } else {
                        self.make_token(TokenType::DotDot)
                    }
                } else {
                    self.make_token(TokenType::Dot)
                }
            }

            '"' => self.string(),
            '\'' => self.char_literal(),

            c if c.is_ascii_digit() => self.number(),

            // Raw string literal: r"..." or r#"..."# (any number of hashes)
            'r' if self.raw_string_ahead() => self.raw_string(),

            // Identifier or keyword (supports Unicode XID)
            c if c == '_' || unicode_ident::is_xid_start(c) => self.identifier(),

            _ => self.error_unexpected_char(c),
        }
    }

    /// Skip whitespace (including newlines) and both comment forms.
    /// An unterminated block comment consumes to end of input.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek_byte() {
                Some(b' ') | Some(b'\t') | Some(b'\r') => {
                    self.current += 1;
                    self.column += 1;
                }
                Some(b'\n') => {
                    self.current += 1;
                    self.line += 1;
                    self.column = 1;
                }
                Some(b'/') => match self.bytes.get(self.current + 1) {
                    Some(b'/') => self.skip_line_comment(),
                    Some(b'*') => self.skip_block_comment(),
                    _ => break,
                },
                _ => break,
            }
        }
    }

    /// Skip a line comment (everything until newline or EOF).
    #[inline]
    fn skip_line_comment(&mut self) {
        while self.current < self.bytes.len() && self.bytes[self.current] != b'\n' {
            self.current += 1;
            self.column += 1;
        }
    }

    /// Skip a block comment. Unterminated comments run to end of input.
    fn skip_block_comment(&mut self) {
        // Consume the opening "/*"
        self.current += 2;
        self.column += 2;
        while self.current < self.bytes.len() {
            match self.bytes[self.current] {
                b'*' if self.bytes.get(self.current + 1) == Some(&b'/') => {
                    self.current += 2;
                    self.column += 2;
                    return;
                }
                b'\n' => {
                    self.current += 1;
                    self.line += 1;
                    self.column = 1;
                }
                _ => {
                    self.current += 1;
                    self.column += 1;
                }
            }
        }
    }

    /// Advance to the next character and return it.
    /// Fast path for ASCII bytes (no UTF-8 decoding needed).
    #[inline]
    pub(crate) fn advance(&mut self) -> Option<char> {
        if self.current >= self.bytes.len() {
            return None;
        }
        let b = self.bytes[self.current];
        if b < UTF8_MULTIBYTE {
            self.current += 1;
            self.column += 1;
            Some(b as char)
        } else {
            let remaining = &self.source[self.current..];
            let c = remaining.chars().next().expect("non-empty source slice");
            self.current += c.len_utf8();
            self.column += 1;
            Some(c)
        }
    }

    /// Peek at the next byte directly (for ASCII-only comparisons).
    #[inline]
    pub(crate) fn peek_byte(&self) -> Option<u8> {
        self.bytes.get(self.current).copied()
    }

    /// Consume the next character if it matches the expected byte.
    #[inline]
    fn match_byte(&mut self, expected: u8) -> bool {
        debug_assert!(expected < UTF8_MULTIBYTE, "match_byte only works for ASCII");
        if self.current < self.bytes.len() && self.bytes[self.current] == expected {
            self.current += 1;
            self.column += 1;
            true
        } else {
            false
        }
    }

    /// Create a token from start to current position
    pub(crate) fn make_token(&self, ty: TokenType) -> Token<'src> {
        let lexeme = &self.source[self.start..self.current];
        Token::new(ty, lexeme, self.token_span())
    }

    /// The span covering the token currently being scanned.
    pub(crate) fn token_span(&self) -> Span {
        Span::new_with_end(
            self.start,
            self.current,
            self.start_line,
            self.start_column,
            self.line,
            self.column,
        )
    }

    /// Create an error token and collect an error for an unexpected character.
    fn error_unexpected_char(&mut self, c: char) -> Token<'src> {
        let span = self.token_span();
        tracing::debug!(char = %c, line = self.start_line, col = self.start_column, "lexer error: unexpected character");
        self.errors.push(LexerError::UnexpectedCharacter {
            ch: c,
            span: span.into(),
        });
        Token::new(TokenType::Error, format!("unexpected character '{}'", c), span)
    }

    /// True if the bytes at the cursor complete a raw string opener:
    /// zero or more '#' characters followed by '"'. The 'r' itself has
    /// already been consumed.
    fn raw_string_ahead(&self) -> bool {
        let mut pos = self.current;
        while self.bytes.get(pos) == Some(&b'#') {
            pos += 1;
        }
        self.bytes.get(pos) == Some(&b'"')
    }

    /// Scan an identifier or keyword (supports Unicode XID).
    /// Uses a byte-level fast path for ASCII identifier characters.
    ///
    /// The keyword boundary rule falls out of maximal munch: `fn_hello`
    /// scans as one identifier and only then fails the keyword lookup.
    fn identifier(&mut self) -> Token<'src> {
        while self.current < self.bytes.len() {
            let b = self.bytes[self.current];
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.current += 1;
                self.column += 1;
            } else if b >= UTF8_MULTIBYTE {
                let remaining = &self.source[self.current..];
                let c = remaining.chars().next().expect("non-empty source slice");
                if unicode_ident::is_xid_continue(c) {
                    self.current += c.len_utf8();
                    self.column += 1;
                } else {
                    break;
                }
            } else {
                break;
            }
        }

        let text = &self.source[self.start..self.current];
        if Self::is_float_special(text) {
            return self.make_token(TokenType::FloatLiteral);
        }
        let ty = TokenType::keyword_type(text).unwrap_or(TokenType::Identifier);
        self.make_token(ty)
    }

    /// Check whether identifier text spells a special float literal:
    /// case-insensitive `nan`/`inf`, optionally followed by an exact
    /// `F32`/`F64` suffix. Anything longer (`nancy`, `info`, `nanF32x`)
    /// stays an identifier.
    fn is_float_special(text: &str) -> bool {
        let rest = match text.get(..3) {
            Some(head) if head.eq_ignore_ascii_case("nan") || head.eq_ignore_ascii_case("inf") => {
                &text[3..]
            }
            _ => return false,
        };
        rest.is_empty() || rest == "F32" || rest == "F64"
    }
}
