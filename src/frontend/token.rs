// src/frontend/token.rs

/// Single source of truth for keyword-to-token mapping.
///
/// Each entry `"text" => Variant` generates:
/// - A match arm in `TokenType::keyword_type`: `"text" => Some(TokenType::Variant)`
/// - A match arm in `TokenType::as_str`:       `Self::Variant => "text"`
macro_rules! define_keywords {
    ( $( $text:literal => $variant:ident ),+ $(,)? ) => {
        impl TokenType {
            /// Check if a string is a keyword and return its token type.
            pub fn keyword_type(text: &str) -> Option<TokenType> {
                match text {
                    $( $text => Some(TokenType::$variant), )+
                    _ => None,
                }
            }

            /// String representation for keyword tokens (used by `as_str`).
            fn keyword_as_str(&self) -> Option<&'static str> {
                match self {
                    $( Self::$variant => Some($text), )+
                    _ => None,
                }
            }
        }
    };
}

define_keywords! {
    "fn"       => KwFn,
    "return"   => KwReturn,
    "let"      => KwLet,
    "mut"      => KwMut,
    "if"       => KwIf,
    "else"     => KwElse,
    "match"    => KwMatch,
    "for"      => KwFor,
    "in"       => KwIn,
    "while"    => KwWhile,
    "break"    => KwBreak,
    "continue" => KwContinue,
    "struct"   => KwStruct,
    "enum"     => KwEnum,
    "trait"    => KwTrait,
    "impl"     => KwImpl,
    "type"     => KwType,
    "as"       => KwAs,
    "true"     => KwTrue,
    "false"    => KwFalse,
}

/// All token types in the Stoat language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    // Literals
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    RawStringLiteral, // r"..." / r#"..."#
    CharLiteral,
    StrInterpStart,  // "text{
    StrInterpMiddle, // }text{
    StrInterpEnd,    // }text"
    Identifier,

    // Keywords
    KwFn,
    KwReturn,
    KwLet,
    KwMut,
    KwIf,
    KwElse,
    KwMatch,
    KwFor,
    KwIn,
    KwWhile,
    KwBreak,
    KwContinue,
    KwStruct,
    KwEnum,
    KwTrait,
    KwImpl,
    KwType,
    KwAs,
    KwTrue,
    KwFalse,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Eq,
    EqEq,
    BangEq,
    Bang,
    AmpAmp,   // &&
    PipePipe, // ||
    Lt,
    Gt,
    LtEq,
    GtEq,
    Ampersand,      // &
    Pipe,           // |
    Caret,          // ^
    Tilde,          // ~
    LessLess,       // <<
    GreaterGreater, // >>

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    DotDot,      // ..
    DotDotEqual, // ..=
    FatArrow,    // =>

    // Special
    Eof,
    Error,
}

impl TokenType {
    /// Get string representation for error messages
    pub fn as_str(&self) -> &'static str {
        // Keywords are defined once in `define_keywords!`; delegate to the
        // generated helper so they never diverge from `keyword_type()`.
        if let Some(s) = self.keyword_as_str() {
            return s;
        }
        match self {
            Self::IntLiteral => "integer",
            Self::FloatLiteral => "float",
            Self::StringLiteral => "string",
            Self::RawStringLiteral => "raw string",
            Self::CharLiteral => "character",
            Self::StrInterpStart => "string interpolation",
            Self::StrInterpMiddle => "string interpolation",
            Self::StrInterpEnd => "string interpolation",
            Self::Identifier => "identifier",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Eq => "=",
            Self::EqEq => "==",
            Self::BangEq => "!=",
            Self::Bang => "!",
            Self::AmpAmp => "&&",
            Self::PipePipe => "||",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::LessLess => "<<",
            Self::GreaterGreater => ">>",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::DotDot => "..",
            Self::DotDotEqual => "..=",
            Self::FatArrow => "=>",
            Self::Eof => "end of file",
            Self::Error => "error",
            // All keyword variants are handled by `keyword_as_str()` above.
            _ => unreachable!("keyword variant not covered by define_keywords! macro"),
        }
    }

    /// Get precedence for binary operators (precedence climbing).
    ///
    /// Assignment is the loosest binding level; each tier below binds
    /// tighter. Zero means "not a binary operator at this position".
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Eq => 1,                                        // assignment
            Self::PipePipe => 2,                                  // logical or
            Self::AmpAmp => 3,                                    // logical and
            Self::EqEq | Self::BangEq => 4,                       // equality
            Self::Lt | Self::Gt | Self::LtEq | Self::GtEq => 5,   // relational
            Self::Pipe => 6,                                      // bitwise or
            Self::Caret => 7,                                     // bitwise xor
            Self::Ampersand => 8,                                 // bitwise and
            Self::LessLess | Self::GreaterGreater => 9,           // shifts
            Self::Plus | Self::Minus => 10,                       // additive
            Self::Star | Self::Slash | Self::Percent => 11,       // multiplicative
            _ => 0,
        }
    }
}

/// Source location span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,    // Byte offset
    pub end: usize,      // Byte offset (exclusive)
    pub line: u32,       // Start line (1-indexed)
    pub column: u32,     // Start column (1-indexed)
    pub end_line: u32,   // End line (1-indexed)
    pub end_column: u32, // End column (1-indexed, exclusive)
}

impl Span {
    /// Create a new span with explicit end position
    pub fn new_with_end(
        start: usize,
        end: usize,
        line: u32,
        column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Self {
            start,
            end,
            line,
            column,
            end_line,
            end_column,
        }
    }

    /// Create a new span, computing end position for single-line tokens
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        let length = end.saturating_sub(start);
        Self {
            start,
            end,
            line,
            column,
            end_line: line,
            end_column: column + length as u32,
        }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
            line: self.line,
            column: self.column,
            end_line: other.end_line,
            end_column: other.end_column,
        }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.end.saturating_sub(span.start)).into()
    }
}

/// A token with its location in source code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub ty: TokenType,
    pub lexeme: std::borrow::Cow<'src, str>,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(ty: TokenType, lexeme: impl Into<std::borrow::Cow<'src, str>>, span: Span) -> Self {
        Self {
            ty,
            lexeme: lexeme.into(),
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_with_end_position() {
        let span = Span::new(0, 5, 1, 1);
        assert_eq!(span.start, 0);
        assert_eq!(span.end, 5);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 1);
        assert_eq!(span.end_line, 1);
        // end_column should be column + length = 1 + 5 = 6
        assert_eq!(span.end_column, 6);
    }

    #[test]
    fn span_merge_preserves_end_position() {
        let span1 = Span::new_with_end(0, 5, 1, 1, 1, 6);
        let span2 = Span::new_with_end(10, 15, 2, 3, 2, 8);
        let merged = span1.merge(span2);

        assert_eq!(merged.start, 0);
        assert_eq!(merged.line, 1);
        assert_eq!(merged.column, 1);
        assert_eq!(merged.end, 15);
        assert_eq!(merged.end_line, 2);
        assert_eq!(merged.end_column, 8);
    }

    #[test]
    fn keyword_type_round_trips_as_str() {
        for text in ["fn", "match", "impl", "as", "continue"] {
            let ty = TokenType::keyword_type(text).unwrap();
            assert_eq!(ty.as_str(), text);
        }
        assert_eq!(TokenType::keyword_type("func"), None);
        assert_eq!(TokenType::keyword_type("matches"), None);
    }

    #[test]
    fn precedence_ladder_ordering() {
        // multiplicative binds tighter than additive, additive tighter
        // than shifts, equality tighter than logical-and, etc.
        assert!(TokenType::Star.precedence() > TokenType::Plus.precedence());
        assert!(TokenType::Plus.precedence() > TokenType::LessLess.precedence());
        assert!(TokenType::LessLess.precedence() > TokenType::Ampersand.precedence());
        assert!(TokenType::Ampersand.precedence() > TokenType::Caret.precedence());
        assert!(TokenType::Caret.precedence() > TokenType::Pipe.precedence());
        assert!(TokenType::Pipe.precedence() > TokenType::Lt.precedence());
        assert!(TokenType::Lt.precedence() > TokenType::EqEq.precedence());
        assert!(TokenType::EqEq.precedence() > TokenType::AmpAmp.precedence());
        assert!(TokenType::AmpAmp.precedence() > TokenType::PipePipe.precedence());
        assert!(TokenType::PipePipe.precedence() > TokenType::Eq.precedence());
        assert_eq!(TokenType::DotDot.precedence(), 0);
    }
}
