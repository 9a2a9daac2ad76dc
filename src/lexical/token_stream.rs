//! Contains the [`TokenStream`] struct.

use std::fmt::{Debug, Display};

use derive_more::Deref;
use itertools::Itertools;

use crate::base::Handler;

use super::{
    scanner::Scanner,
    token::{Token, TokenKind},
    Error,
};

/// Is the ordered list of [`Token`]s of one source buffer, always ending with
/// [`TokenKind::Eof`].
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// parser.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl Debug for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl Display for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens.iter().join("\n"))
    }
}

impl TokenStream {
    /// Tokenizes the given source code.
    ///
    /// Lexical errors are sent to `handler`; the stream then simply lacks the malformed
    /// lexemes.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all, fields(source_len = source.len()))]
    pub fn tokenize(source: &str, handler: &impl Handler<Error>) -> Self {
        let tokens = Scanner::new(source, handler).scan_tokens();

        Self { tokens }
    }

    /// Kinds of the tokens, in order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(Token::kind)
    }

    /// Dissolves this struct into its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> {
        self.tokens
    }
}
