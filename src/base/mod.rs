//! The base module contains the functionality shared by the lexical analysis.

pub mod source;

mod error;
#[doc(inline)]
pub use error::{Error, Result};

mod diagnostic;
pub use diagnostic::{Handler, PrintHandler, SilentHandler, Storage, VoidHandler};

pub mod log;
