//! Module for walking over the characters of a source buffer.

use std::{
    iter::{Iterator, Peekable},
    str::CharIndices,
};

use getset::CopyGetters;

/// Iterator iterating over the characters in a source buffer that can be peeked at.
///
/// Items are `(byte index, character)` pairs. The buffer is never copied; lookahead clones
/// the underlying cursor, which only holds a position into the buffer.
#[derive(Debug, Clone, CopyGetters)]
pub struct SourceIterator<'a> {
    /// Get the source buffer that the iterator is iterating over.
    #[get_copy = "pub"]
    source: &'a str,
    iterator: Peekable<CharIndices<'a>>,
}

impl<'a> SourceIterator<'a> {
    /// Creates an iterator positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            iterator: source.char_indices().peekable(),
        }
    }

    /// Peek at the next character in the source buffer.
    pub fn peek(&mut self) -> Option<(usize, char)> {
        self.iterator.peek().copied()
    }

    /// Peek at the character after the next one.
    #[must_use]
    pub fn peek_second(&self) -> Option<(usize, char)> {
        let mut lookahead = self.iterator.clone();
        lookahead.next();
        lookahead.next()
    }

    /// Consumes the next character only if it equals `expected`.
    pub fn next_if_eq(&mut self, expected: char) -> bool {
        match self.peek() {
            Some((_, character)) if character == expected => {
                self.next();
                true
            }
            _ => false,
        }
    }

    /// Increments the iterator while the predicate returns true.
    pub fn walk(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some((_, character)) = self.peek() {
            if !predicate(character) {
                break;
            }

            self.next();
        }
    }

    /// Byte index of the next unread character, or the buffer length at the end.
    pub fn offset(&mut self) -> usize {
        self.peek().map_or(self.source.len(), |(index, _)| index)
    }

    /// Whether every character has been consumed.
    pub fn is_at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// The text from `start` up to the current position.
    pub fn slice_from(&mut self, start: usize) -> &'a str {
        let end = self.offset();
        &self.source[start..end]
    }
}

impl<'a> Iterator for SourceIterator<'a> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        self.iterator.next()
    }
}
