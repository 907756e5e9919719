// src/errors/parser.rs
//! Parser errors (E1xxx).

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ParserError {
    #[error("expected expression, found '{found}'")]
    #[diagnostic(code(E1001))]
    ExpectedExpression {
        found: String,
        #[label("expected expression")]
        span: SourceSpan,
    },

    #[error("expected '{expected}', found '{found}'")]
    #[diagnostic(code(E1002))]
    ExpectedToken {
        expected: String,
        found: String,
        #[label("unexpected token")]
        span: SourceSpan,
    },

    #[error("expected type name")]
    #[diagnostic(code(E1004))]
    ExpectedType {
        #[label("expected type")]
        span: SourceSpan,
    },

    #[error("expected identifier")]
    #[diagnostic(code(E1005))]
    ExpectedIdentifier {
        #[label("expected identifier")]
        span: SourceSpan,
    },

    #[error("expected pattern, found '{found}'")]
    #[diagnostic(
        code(E1006),
        help("patterns can be literals (1, \"hello\"), names, '_', tuples, or Type {{ .. }}")
    )]
    ExpectedPattern {
        found: String,
        #[label("expected pattern")]
        span: SourceSpan,
    },

    #[error("invalid assignment target")]
    #[diagnostic(
        code(E1007),
        help("only a name, field access, or index expression can be assigned to")
    )]
    InvalidAssignmentTarget {
        #[label("cannot assign to this expression")]
        span: SourceSpan,
    },

    #[error("parenthesized condition")]
    #[diagnostic(
        code(E1008),
        help("write `if cond {{ ... }}` without parentheses around the condition")
    )]
    ParenthesizedCondition {
        #[label("remove these parentheses")]
        span: SourceSpan,
    },

    #[error("'..' must be the last element of a struct pattern")]
    #[diagnostic(code(E1009), help("move the rest marker to the end and drop any trailing comma"))]
    RestPatternNotLast {
        #[label("content after '..'")]
        span: SourceSpan,
    },

    #[error("unterminated string interpolation")]
    #[diagnostic(code(E1010))]
    UnterminatedInterpolation {
        #[label("interpolation never closed")]
        span: SourceSpan,
    },

    #[error("{message}")]
    #[diagnostic(code(E1011))]
    InvalidLiteral {
        message: String,
        #[label("invalid literal")]
        span: SourceSpan,
    },

    #[error("trailing input after module items")]
    #[diagnostic(code(E1012), help("remove the extra text or make it a declaration"))]
    TrailingInput {
        #[label("unconsumed input starts here")]
        span: SourceSpan,
    },
}
