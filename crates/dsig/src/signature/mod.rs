//! The `Signature` facade.

use std::fmt;
use std::hash::{Hash, Hasher};

use dsig_parse::{ParseError, ParseOptions};
use dsig_types::{SignatureIterator, Tree, TypeNode};

#[cfg(feature = "serde")]
mod serde_impl;

/// Signature text together with its parsed type tree.
///
/// The tree is rebuilt whenever the text changes, so `raw`, `root` and
/// `error` always describe the same parse. An invalid signature has an
/// empty tree.
///
/// Iterators borrow the signature, so it cannot be reassigned while any
/// iterator over it is alive.
///
/// Equality and hashing use the text alone, so the same text parsed with
/// different options compares equal.
#[derive(Clone, Debug, Default)]
pub struct Signature {
    raw: String,
    options: ParseOptions,
    root: Vec<TypeNode>,
    error: Option<ParseError>,
}

impl Signature {
    /// Parse `text` with permissive options.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_options(text, ParseOptions::permissive())
    }

    /// Parse `text`, enforcing the strict checks in `options`.
    pub fn with_options(text: impl Into<String>, options: ParseOptions) -> Self {
        let mut signature = Self {
            raw: text.into(),
            options,
            root: Vec::new(),
            error: None,
        };
        signature.reparse();
        signature
    }

    /// Replace the text and re-parse it with the same options.
    pub fn assign(&mut self, text: impl Into<String>) {
        self.raw = text.into();
        self.reparse();
    }

    fn reparse(&mut self) {
        match dsig_parse::parse_with(&self.raw, self.options) {
            Ok(root) => {
                self.root = root;
                self.error = None;
            }
            Err(error) => {
                tracing::debug!(
                    signature = %self.raw,
                    code = error.code(),
                    %error,
                    "unable to parse signature"
                );
                self.root = Vec::new();
                self.error = Some(error);
            }
        }
        tracing::trace!(signature = %self.raw, valid = self.is_valid(), "parsed signature");
    }

    /// The signature text, exactly as given.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Why the text was rejected, if it was.
    #[inline]
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// `true` if the signature describes exactly one complete type.
    pub fn is_singleton(&self) -> bool {
        self.is_valid() && self.root.len() == 1
    }

    /// Number of top-level types.
    #[inline]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// `true` if there are no top-level types (empty or invalid text).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// The top-level types.
    #[inline]
    pub fn nodes(&self) -> &[TypeNode] {
        &self.root
    }

    /// Iterator at the first top-level type. Invalid and empty signatures
    /// start at the end.
    pub fn begin(&self) -> SignatureIterator<'_> {
        if self.is_valid() {
            SignatureIterator::new(&self.root)
        } else {
            SignatureIterator::end()
        }
    }

    pub fn end(&self) -> SignatureIterator<'_> {
        SignatureIterator::end()
    }

    #[inline]
    pub fn iter(&self) -> SignatureIterator<'_> {
        self.begin()
    }

    /// Indented tree view, one type per line.
    pub fn tree(&self) -> Tree<'_> {
        Tree::new(&self.root)
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Signature {}

impl Hash for Signature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for Signature {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Signature {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl<'a> IntoIterator for &'a Signature {
    type Item = &'a TypeNode;
    type IntoIter = SignatureIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}
