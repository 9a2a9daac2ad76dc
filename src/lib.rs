//! The `Lox` lexical front end.
//!
//! Turns the source code of the `Lox` scripting language into the token sequence consumed by
//! its parser.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod lexical;

use base::{Error, Handler, Result, SilentHandler};
use lexical::token_stream::TokenStream;

/// Converts the given source code to tokens.
///
/// Every lexical error is passed on to `handler`.
///
/// # Errors
/// - [`Error::LexicalErrors`]: at least one lexical error was reported, so the tokens must not
///   be parsed.
pub fn tokenize(source: &str, handler: &impl Handler<lexical::Error>) -> Result<TokenStream> {
    let counter = Counter {
        inner: handler,
        count: SilentHandler::new(),
    };

    let tokens = TokenStream::tokenize(source, &counter);

    match counter.count.count() {
        0 => Ok(tokens),
        count => Err(Error::LexicalErrors(count)),
    }
}

/// Forwards diagnostics while counting them.
#[derive(Debug)]
struct Counter<'a, H> {
    inner: &'a H,
    count: SilentHandler,
}

impl<'a, H: Handler<lexical::Error>> Handler<lexical::Error> for Counter<'a, H> {
    fn receive(&self, error: lexical::Error) {
        self.count.receive(error);
        self.inner.receive(error);
    }
}
