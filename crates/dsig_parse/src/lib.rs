//! Parser for D-Bus type signatures.
//!
//! Turns signature text such as `"a{sv}(ii)"` into the sequence of top-level
//! [`TypeNode`]s it describes, or reports the first grammar error found.
//!
//! ```text
//! let nodes = dsig_parse::parse("a(ii)")?;
//! assert_eq!(nodes.len(), 1);
//! ```
//!
//! Parsing is all-or-nothing: on error no partial tree escapes. Struct and
//! dict-entry field counts are not checked unless [`ParseOptions`] enables
//! the corresponding [`StrictChecks`].

mod error;
mod options;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use options::{ParseOptions, StrictChecks};

use dsig_types::TypeNode;

/// Parse `text` with permissive options.
pub fn parse(text: &str) -> Result<Vec<TypeNode>, ParseError> {
    parse_with(text, ParseOptions::permissive())
}

/// Parse `text`, applying the strict checks enabled in `options`.
#[tracing::instrument(level = "trace", skip(options), fields(strict = options.is_strict()))]
pub fn parse_with(text: &str, options: ParseOptions) -> Result<Vec<TypeNode>, ParseError> {
    parser::Parser::new(text, options).parse_signature()
}
