// src/errors/lexer.rs
//! Lexer errors (E0xxx).

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum LexerError {
    #[error("unexpected character '{ch}'")]
    #[diagnostic(code(E0001))]
    UnexpectedCharacter {
        ch: char,
        #[label("unexpected character")]
        span: SourceSpan,
    },

    #[error("unterminated string literal")]
    #[diagnostic(code(E0002), help("add a closing '\"' to terminate the string"))]
    UnterminatedString {
        #[label("string starts here")]
        span: SourceSpan,
    },

    #[error("unterminated raw string literal")]
    #[diagnostic(
        code(E0003),
        help("close the raw string with '\"' followed by {hashes} '#' character(s)")
    )]
    UnterminatedRawString {
        hashes: usize,
        #[label("raw string starts here")]
        span: SourceSpan,
    },

    #[error("invalid character literal: {reason}")]
    #[diagnostic(
        code(E0004),
        help("character literals hold exactly one character or escape sequence")
    )]
    InvalidCharLiteral {
        reason: String,
        #[label("invalid character literal")]
        span: SourceSpan,
    },

    #[error("malformed numeric literal: {reason}")]
    #[diagnostic(code(E0005))]
    InvalidNumber {
        reason: String,
        #[label("invalid number")]
        span: SourceSpan,
    },
}
