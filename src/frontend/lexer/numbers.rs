// src/frontend/lexer/numbers.rs
//
// Number literal lexing: integers (decimal, hex, octal, binary), floats
// (decimal point, scientific notation), underscore separators, and
// directly-attached type suffixes (42I32, 3.5F64).

use crate::errors::LexerError;
use crate::frontend::{Token, TokenType};

use super::Lexer;

const INT_SUFFIXES: &[&str] = &["I16", "I32", "I64", "I8", "U16", "U32", "U64", "U8"];
const FLOAT_SUFFIXES: &[&str] = &["F32", "F64"];

impl<'src> Lexer<'src> {
    /// Scan a number literal (integer or float).
    ///
    /// Shape: `0[xob]` prefixed radix literals, or decimal with optional
    /// fraction and exponent. Underscores separate digit groups and must
    /// be surrounded by digits on both sides within each segment. A bare
    /// leading zero followed by another digit is rejected. Suffixes
    /// attach with no whitespace.
    pub(super) fn number(&mut self) -> Token<'src> {
        // The first digit has already been consumed by next_token().
        if self.bytes[self.start] == b'0' {
            match self.peek_byte() {
                Some(b'x') | Some(b'X') => return self.radix_literal(16),
                Some(b'o') | Some(b'O') => return self.radix_literal(8),
                Some(b'b') | Some(b'B') => return self.radix_literal(2),
                _ => {}
            }
        }

        // Decimal integer part (continue after the first digit)
        self.consume_digit_run(10);
        let int_part = &self.source[self.start..self.current];
        if int_part.len() > 1 && int_part.starts_with('0') {
            return self.error_invalid_number("leading zero requires a base prefix");
        }
        if let Err(reason) = validate_underscores(int_part) {
            return self.error_invalid_number(reason);
        }

        let mut is_float = false;

        // Fraction: a '.' is a decimal point only when not immediately
        // followed by another '.', so `0..10` stays integer-range-integer.
        // A trailing dot (`5.`) is accepted.
        if self.peek_byte() == Some(b'.') && self.bytes.get(self.current + 1) != Some(&b'.') {
            self.advance();
            is_float = true;
            let frac_start = self.current;
            self.consume_digit_run(10);
            let frac = &self.source[frac_start..self.current];
            if !frac.is_empty() {
                if let Err(reason) = validate_underscores(frac) {
                    return self.error_invalid_number(reason);
                }
            }
        }

        // Exponent: e/E with optional sign and its own digit segment.
        if matches!(self.peek_byte(), Some(b'e') | Some(b'E')) {
            self.advance();
            is_float = true;
            if matches!(self.peek_byte(), Some(b'+') | Some(b'-')) {
                self.advance();
            }
            let exp_start = self.current;
            self.consume_digit_run(10);
            let exp = &self.source[exp_start..self.current];
            if exp.is_empty() {
                return self.error_invalid_number("missing exponent digits");
            }
            if let Err(reason) = validate_underscores(exp) {
                return self.error_invalid_number(reason);
            }
        }

        let suffixes = if is_float { FLOAT_SUFFIXES } else { INT_SUFFIXES };
        self.consume_suffix(suffixes);

        if self.literal_boundary_violated() {
            return self.consume_run_and_error();
        }

        let ty = if is_float {
            TokenType::FloatLiteral
        } else {
            TokenType::IntLiteral
        };
        self.make_token(ty)
    }

    /// Scan a radix-prefixed integer: 0x.., 0o.., 0b..
    fn radix_literal(&mut self, radix: u32) -> Token<'src> {
        self.advance(); // consume the prefix letter
        let digits_start = self.current;
        self.consume_digit_run(radix);
        let digits = &self.source[digits_start..self.current];
        if digits.chars().all(|c| c == '_') {
            // Covers both "0x" (empty) and "0x_".
            return self.error_invalid_number("missing digits after base prefix");
        }
        if let Err(reason) = validate_underscores(digits) {
            return self.error_invalid_number(reason);
        }

        self.consume_suffix(INT_SUFFIXES);

        if self.literal_boundary_violated() {
            return self.consume_run_and_error();
        }
        self.make_token(TokenType::IntLiteral)
    }

    /// Consume a run of digits (in the given radix) and underscores.
    fn consume_digit_run(&mut self, radix: u32) {
        while let Some(b) = self.peek_byte() {
            if (b as char).is_digit(radix) || b == b'_' {
                self.current += 1;
                self.column += 1;
            } else {
                break;
            }
        }
    }

    /// Consume a type suffix if one directly follows the digits.
    fn consume_suffix(&mut self, suffixes: &[&str]) {
        let rest = &self.source[self.current..];
        for suffix in suffixes {
            if rest.starts_with(suffix) {
                self.current += suffix.len();
                self.column += suffix.len() as u32;
                return;
            }
        }
    }

    /// A numeric literal must not be immediately followed by an
    /// identifier-continuation character (`0b12`, `42I32x`, `5x`).
    fn literal_boundary_violated(&self) -> bool {
        matches!(self.peek_byte(), Some(b) if b.is_ascii_alphanumeric() || b == b'_')
    }

    /// Consume the trailing identifier-like run so the error span covers
    /// the whole malformed literal, then report it.
    fn consume_run_and_error(&mut self) -> Token<'src> {
        while self.literal_boundary_violated() {
            self.current += 1;
            self.column += 1;
        }
        self.error_invalid_number("invalid digit or suffix in numeric literal")
    }

    /// Create an error token and collect an error for an invalid number.
    pub(super) fn error_invalid_number(&mut self, reason: &str) -> Token<'src> {
        let span = self.token_span();
        tracing::debug!(
            reason,
            line = self.start_line,
            col = self.start_column,
            "lexer error: invalid number"
        );
        self.errors.push(LexerError::InvalidNumber {
            reason: reason.to_string(),
            span: span.into(),
        });
        Token::new(
            TokenType::Error,
            format!("malformed numeric literal: {}", reason),
            span,
        )
    }
}

/// Underscores must sit between digits: no leading or trailing underscore
/// and no doubled underscore within a digit segment.
fn validate_underscores(segment: &str) -> Result<(), &'static str> {
    if segment.starts_with('_') {
        return Err("underscore must be preceded by a digit");
    }
    if segment.ends_with('_') {
        return Err("underscore must be followed by a digit");
    }
    if segment.contains("__") {
        return Err("doubled underscore in digit group");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LexerError;

    fn lex_one(source: &str) -> Token<'_> {
        Lexer::new(source).next_token()
    }

    fn assert_invalid(source: &str) {
        let mut lexer = Lexer::new(source);
        let t = lexer.next_token();
        assert_eq!(t.ty, TokenType::Error, "{source} should be rejected");
        let errors = lexer.take_errors();
        assert!(
            matches!(&errors[0], LexerError::InvalidNumber { .. }),
            "{source}"
        );
    }

    #[test]
    fn lex_decimal_integers() {
        for source in ["0", "7", "42", "1_000_000", "99_99"] {
            let t = lex_one(source);
            assert_eq!(t.ty, TokenType::IntLiteral, "{source}");
            assert_eq!(t.lexeme, source);
        }
    }

    #[test]
    fn lex_radix_integers() {
        for source in ["0xFF", "0X1A2B", "0xDEAD_BEEF", "0o777", "0O17", "0b1010", "0B1111_0000"] {
            let t = lex_one(source);
            assert_eq!(t.ty, TokenType::IntLiteral, "{source}");
            assert_eq!(t.lexeme, source);
        }
    }

    #[test]
    fn lex_integer_suffixes() {
        for source in ["42I32", "0xFFU8", "1_000U64", "7I8", "0b11U16"] {
            let t = lex_one(source);
            assert_eq!(t.ty, TokenType::IntLiteral, "{source}");
            assert_eq!(t.lexeme, source);
        }
    }

    #[test]
    fn lex_floats() {
        for source in ["3.14", "5.", "1_000.5", "3.14_15", "1e10", "1.5e-3", "2E+6", "1e0", "2.5F32", "1e3F64"] {
            let t = lex_one(source);
            assert_eq!(t.ty, TokenType::FloatLiteral, "{source}");
            assert_eq!(t.lexeme, source);
        }
    }

    #[test]
    fn leading_dot_is_not_a_float() {
        let mut lexer = Lexer::new(".5");
        assert_eq!(lexer.next_token().ty, TokenType::Dot);
        assert_eq!(lexer.next_token().ty, TokenType::IntLiteral);
    }

    #[test]
    fn range_dots_do_not_start_a_fraction() {
        let mut lexer = Lexer::new("0..10");
        let t = lexer.next_token();
        assert_eq!(t.ty, TokenType::IntLiteral);
        assert_eq!(t.lexeme, "0");
        assert_eq!(lexer.next_token().ty, TokenType::DotDot);
        assert_eq!(lexer.next_token().ty, TokenType::IntLiteral);
    }

    #[test]
    fn reject_leading_zero() {
        assert_invalid("0123");
        assert_invalid("0_1");
        assert_invalid("00");
    }

    #[test]
    fn reject_underscore_adjacency() {
        assert_invalid("1__0");
        assert_invalid("1000_");
        assert_invalid("0x_FF");
        assert_invalid("0xFF_");
        assert_invalid("1._5");
        assert_invalid("1.5_");
        assert_invalid("1e_5");
        assert_invalid("1e5_");
    }

    #[test]
    fn reject_missing_radix_digits() {
        assert_invalid("0x");
        assert_invalid("0b");
        assert_invalid("0o");
    }

    #[test]
    fn reject_invalid_digit_for_base() {
        assert_invalid("0b12");
        assert_invalid("0o78");
        assert_invalid("0xFG");
    }

    #[test]
    fn reject_bad_suffix_boundary() {
        assert_invalid("42I32x");
        assert_invalid("5F32"); // float suffix on an integer literal
        assert_invalid("1.5I32"); // integer suffix on a float literal
        assert_invalid("2ever");
    }

    #[test]
    fn literal_followed_by_operator_is_fine() {
        let mut lexer = Lexer::new("0xFF+1");
        assert_eq!(lexer.next_token().lexeme, "0xFF");
        assert_eq!(lexer.next_token().ty, TokenType::Plus);
        assert_eq!(lexer.next_token().lexeme, "1");
        assert!(!lexer.has_errors());
    }

    #[test]
    fn underscore_runs_in_each_segment() {
        let t = lex_one("1_0.2_5e1_0");
        assert_eq!(t.ty, TokenType::FloatLiteral);
        assert_eq!(t.lexeme, "1_0.2_5e1_0");
    }
}
