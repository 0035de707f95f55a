//! Lexical tokens produced by the tokenizer.

use std::fmt;

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// Numeric literal; lexeme always matches `-?[0-9]+(\.[0-9]+)?`.
    Number,
    /// Binary, prefix or postfix operator symbol.
    Operator,
    /// Function name.
    Function,
    /// Named constant (`pi`, `e`).
    Constant,
    /// Free variable name (maximal run of letters).
    Variable,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Argument separator `;`.
    Semicolon,
    /// Raw string payload; only the selector argument of a three-argument
    /// function produces this.
    Text,
}

/// Smallest lexical unit of an expression: a kind plus its source lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) lexeme: String,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub(crate) fn number(lexeme: impl Into<String>) -> Self {
        Token::new(TokenKind::Number, lexeme)
    }

    pub(crate) fn operator(lexeme: impl Into<String>) -> Self {
        Token::new(TokenKind::Operator, lexeme)
    }

    pub(crate) fn function(lexeme: impl Into<String>) -> Self {
        Token::new(TokenKind::Function, lexeme)
    }

    pub(crate) fn left_paren() -> Self {
        Token::new(TokenKind::LeftParen, "(")
    }

    pub(crate) fn right_paren() -> Self {
        Token::new(TokenKind::RightParen, ")")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
