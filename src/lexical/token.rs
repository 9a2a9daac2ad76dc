//! Contains the [`Token`] struct and its related types.

use std::{collections::HashMap, fmt::Display, sync::OnceLock};

use derive_more::From;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use strum::IntoEnumIterator;
use strum_macros::{Display as StrumDisplay, EnumIter};

/// Is an enumeration of every lexical category of the Lox programming language.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Gets the reserved spelling of a keyword kind, or `None` for any other kind.
    #[must_use]
    pub fn as_keyword_str(self) -> Option<&'static str> {
        let spelling = match self {
            Self::And => "and",
            Self::Class => "class",
            Self::Else => "else",
            Self::False => "false",
            Self::Fun => "fun",
            Self::For => "for",
            Self::If => "if",
            Self::Nil => "nil",
            Self::Or => "or",
            Self::Print => "print",
            Self::Return => "return",
            Self::Super => "super",
            Self::This => "this",
            Self::True => "true",
            Self::Var => "var",
            Self::While => "while",
            _ => return None,
        };

        Some(spelling)
    }

    /// Looks up the keyword kind spelled exactly as `word`.
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        static STRING_KEYWORD_MAP: OnceLock<HashMap<&'static str, TokenKind>> = OnceLock::new();
        let map = STRING_KEYWORD_MAP.get_or_init(|| {
            Self::iter()
                .filter_map(|kind| kind.as_keyword_str().map(|spelling| (spelling, kind)))
                .collect()
        });

        map.get(word).copied()
    }

    /// Iterates over all keyword kinds.
    pub fn keywords() -> impl Iterator<Item = Self> {
        Self::iter().filter(|kind| kind.is_keyword())
    }

    /// Whether the kind is a reserved keyword.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        self.as_keyword_str().is_some()
    }

    /// Whether tokens of this kind carry a [`Literal`].
    #[must_use]
    pub fn carries_literal(self) -> bool {
        matches!(self, Self::String | Self::Number)
    }
}

/// The parsed value of a string or number literal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, From, EnumAsInner)]
pub enum Literal {
    /// Content of a string literal without the surrounding quotes.
    String(String),
    /// Value of a number literal.
    Number(f64),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(content) => write!(f, "{content}"),
            Self::Number(value) => write!(f, "{value:?}"),
        }
    }
}

/// Represents a classified lexeme of the source code.
///
/// Equality compares the kind, the lexeme and the literal; the line is ignored.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct Token {
    /// Get the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Get the exact source text of the token.
    #[get = "pub"]
    lexeme: String,

    /// Get the literal value, present only for strings and numbers.
    #[get = "pub"]
    literal: Option<Literal>,

    /// Get the line on which the token starts (starts at 1).
    #[get_copy = "pub"]
    line: usize,
}

impl Token {
    /// Creates a token whose kind carries no literal.
    ///
    /// # Panics
    /// In debug builds, if `kind` is [`TokenKind::String`] or [`TokenKind::Number`].
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        debug_assert!(
            !kind.carries_literal(),
            "{kind} tokens must be created with their literal"
        );

        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    /// Creates a [`TokenKind::String`] token.
    #[must_use]
    pub fn string(lexeme: impl Into<String>, content: impl Into<String>, line: usize) -> Self {
        Self {
            kind: TokenKind::String,
            lexeme: lexeme.into(),
            literal: Some(Literal::String(content.into())),
            line,
        }
    }

    /// Creates a [`TokenKind::Number`] token.
    #[must_use]
    pub fn number(lexeme: impl Into<String>, value: f64, line: usize) -> Self {
        Self {
            kind: TokenKind::Number,
            lexeme: lexeme.into(),
            literal: Some(Literal::Number(value)),
            line,
        }
    }

    /// Creates the end of input sentinel.
    #[must_use]
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    /// Whether the token is the end of input sentinel.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexeme == other.lexeme && self.literal == other.literal
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token{{type={}, lexeme='{}', literal=", self.kind, self.lexeme)?;

        match &self.literal {
            Some(literal) => write!(f, "{literal}")?,
            None => write!(f, "null")?,
        }

        write!(f, "}}")
    }
}
