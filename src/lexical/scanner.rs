//! Contains the [`Scanner`], the state machine turning source text into [`Token`]s.

use crate::base::{source::SourceIterator, Handler};

use super::{
    token::{Token, TokenKind},
    Error,
};

/// Is an error that can occur when invoking the [`Scanner::scan_token`] method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
#[allow(missing_docs)]
pub enum TokenizeError {
    #[error("a lexical error was reported to the handler and the lexeme was discarded.")]
    Reported(Error),

    #[error("the scanner is at the end of the source code.")]
    EndOfSource,
}

/// Scans a single source buffer into a sequence of [`Token`]s.
///
/// The scanner reads the buffer once, left to right, and never fails: malformed lexemes are
/// reported to the handler and skipped, and the output always ends with one
/// [`TokenKind::Eof`] token.
#[derive(Debug)]
pub struct Scanner<'a, H> {
    iter: SourceIterator<'a>,
    handler: &'a H,
    line: usize,
}

impl<'a, H: Handler<Error>> Scanner<'a, H> {
    /// Creates a scanner over `source` that reports diagnostics to `handler`.
    #[must_use]
    pub fn new(source: &'a str, handler: &'a H) -> Self {
        Self {
            iter: SourceIterator::new(source),
            handler,
            line: 1,
        }
    }

    /// Scans the whole buffer.
    ///
    /// This calls [`Self::scan_token()`] repeatedly until the end of the source is reached and
    /// appends the end of input sentinel.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all, fields(source_len = self.iter.source().len()))]
    pub fn scan_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            match self.scan_token() {
                Ok(Some(token)) => {
                    tracing::trace!(kind = %token.kind(), line = token.line(), "scanned token");
                    tokens.push(token);
                }
                Ok(None) => {}
                Err(TokenizeError::EndOfSource) => break,
                Err(TokenizeError::Reported(error)) => {
                    tracing::debug!(
                        line = error.line(),
                        "recovered from lexical error: {}",
                        error.message()
                    );
                }
            }
        }

        tokens.push(Token::eof(self.line));

        tracing::debug!("Scanned {} tokens over {} lines", tokens.len(), self.line);

        tokens
    }

    /// Scans the next lexeme.
    ///
    /// Returns `Ok(None)` when the lexeme is whitespace or a comment.
    ///
    /// # Errors
    /// - [`TokenizeError::EndOfSource`] - There is nothing left to scan.
    /// - [`TokenizeError::Reported`] - The lexeme was malformed; the error has already been
    ///   sent to the handler.
    pub fn scan_token(&mut self) -> Result<Option<Token>, TokenizeError> {
        let (start, character) = self.iter.next().ok_or(TokenizeError::EndOfSource)?;

        let kind = match character {
            ' ' | '\t' | '\r' => return Ok(None),
            '\n' => {
                self.line += 1;
                return Ok(None);
            }
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '!' => self.either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => return self.handle_slash(start),
            '"' => return self.handle_string_literal(start).map(Some),
            character if character.is_ascii_digit() => {
                return Ok(Some(self.handle_numeric_literal(start)));
            }
            character if Self::is_first_identifier_character(character) => {
                return Ok(Some(self.handle_identifier_and_keyword(start)));
            }
            character => {
                return Err(self.report(Error::UnexpectedCharacter {
                    line: self.line,
                    character,
                }))
            }
        };

        Ok(Some(self.make_token(kind, start)))
    }

    /// Sends the error to the handler and wraps it for the scanning loop.
    fn report(&self, error: Error) -> TokenizeError {
        self.handler.receive(error);
        TokenizeError::Reported(error)
    }

    /// Creates a token without literal from `start` to the current position.
    fn make_token(&mut self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, self.iter.slice_from(start), self.line)
    }

    /// Picks `matched` and consumes the next character if it is `expected`.
    fn either(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) -> TokenKind {
        if self.iter.next_if_eq(expected) {
            matched
        } else {
            otherwise
        }
    }

    /// Checks if the given character is a valid first character of an identifier.
    fn is_first_identifier_character(character: char) -> bool {
        character == '_' || character.is_ascii_alphabetic()
    }

    /// Checks if the given character is a valid character of an identifier.
    fn is_identifier_character(character: char) -> bool {
        character == '_' || character.is_ascii_alphanumeric()
    }

    /// Handles a sequence starting with a slash.
    fn handle_slash(&mut self, start: usize) -> Result<Option<Token>, TokenizeError> {
        // Line comment
        if self.iter.next_if_eq('/') {
            self.iter.walk(|character| character != '\n');
            Ok(None)
        }
        // Block comment
        else if self.iter.next_if_eq('*') {
            self.handle_block_comment().map(|()| None)
        }
        // Just a single slash
        else {
            Ok(Some(self.make_token(TokenKind::Slash, start)))
        }
    }

    /// Skips a block comment whose `/*` has already been consumed.
    fn handle_block_comment(&mut self) -> Result<(), TokenizeError> {
        let start_line = self.line;

        while let Some((_, character)) = self.iter.next() {
            match character {
                '*' if self.iter.next_if_eq('/') => return Ok(()),
                '\n' => self.line += 1,
                _ => {}
            }
        }

        Err(self.report(Error::UnterminatedComment { line: start_line }))
    }

    /// Handles a sequence of characters that are enclosed in double quotes.
    fn handle_string_literal(&mut self, start: usize) -> Result<Token, TokenizeError> {
        let start_line = self.line;

        while let Some((_, character)) = self.iter.next() {
            match character {
                '"' => {
                    let lexeme = self.iter.slice_from(start);
                    let content = &lexeme[1..lexeme.len() - 1];

                    return Ok(Token::string(lexeme, content, start_line));
                }
                '\n' => self.line += 1,
                _ => {}
            }
        }

        Err(self.report(Error::UnterminatedString { line: start_line }))
    }

    /// Handles a sequence of digits with an optional fractional part.
    fn handle_numeric_literal(&mut self, start: usize) -> Token {
        self.iter.walk(|character| character.is_ascii_digit());

        // A dot only belongs to the number when a digit follows it.
        if let (Some((_, '.')), Some((_, digit))) = (self.iter.peek(), self.iter.peek_second()) {
            if digit.is_ascii_digit() {
                self.iter.next();
                self.iter.walk(|character| character.is_ascii_digit());
            }
        }

        let lexeme = self.iter.slice_from(start);
        let value = lexeme
            .parse::<f64>()
            .expect("ascii digits with an optional fraction always parse");

        Token::number(lexeme, value, self.line)
    }

    /// Handles a contiguous sequence of characters that are valid in an identifier.
    fn handle_identifier_and_keyword(&mut self, start: usize) -> Token {
        self.iter.walk(Self::is_identifier_character);

        let word = self.iter.slice_from(start);

        // Checks if the word is a keyword
        let kind = TokenKind::keyword(word).unwrap_or(TokenKind::Identifier);

        Token::new(kind, word, self.line)
    }
}
