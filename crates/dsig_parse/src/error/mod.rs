//! Parse error types.
//!
//! A [`ParseError`] pairs a [`ParseErrorKind`] with the byte offset where it
//! was detected. Parsing stops at the first error.
//!
//! # Diagnostic Codes
//!
//! Every kind has a stable code for tooling and log filtering:
//! - S0001: unmatched container end
//! - S0002: unterminated container
//! - S0003: unknown type tag
//! - S0004..S0006: strict-mode shape violations

use std::fmt;

use dsig_types::{ContainerKind, TypeTag};

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// `)` or `}` whose enclosing container does not match, including one at
    /// the top level.
    UnmatchedContainerEnd { container: ContainerKind },
    /// Input ended inside an open struct or dict entry, or after an `a` with
    /// no element type.
    UnterminatedContainer {
        container: ContainerKind,
        opened_at: usize,
    },
    /// A character that is not a signature symbol.
    UnknownTypeTag { found: char },
    /// Strict mode: a dict entry without exactly two fields.
    DictEntryArity { found: usize },
    /// Strict mode: a dict entry whose key is not a basic type.
    DictEntryKeyNotBasic { found: TypeTag },
    /// Strict mode: a struct with no fields.
    EmptyStruct,
}

impl ParseErrorKind {
    /// Stable diagnostic code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnmatchedContainerEnd { .. } => "S0001",
            Self::UnterminatedContainer { .. } => "S0002",
            Self::UnknownTypeTag { .. } => "S0003",
            Self::DictEntryArity { .. } => "S0004",
            Self::DictEntryKeyNotBasic { .. } => "S0005",
            Self::EmptyStruct => "S0006",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedContainerEnd { container } => {
                write!(f, "unmatched {container} end")
            }
            Self::UnterminatedContainer {
                container: ContainerKind::Array,
                opened_at,
            } => write!(
                f,
                "missing ARRAY element type (array opened at offset {opened_at})"
            ),
            Self::UnterminatedContainer {
                container,
                opened_at,
            } => write!(f, "missing {container} end (opened at offset {opened_at})"),
            Self::UnknownTypeTag { found } => write!(f, "unknown type tag {found:?}"),
            Self::DictEntryArity { found } => {
                write!(f, "DICT_ENTRY must have exactly 2 fields, found {found}")
            }
            Self::DictEntryKeyNotBasic { found } => {
                write!(f, "DICT_ENTRY key must be a basic type, found {found}")
            }
            Self::EmptyStruct => f.write_str("STRUCT must have at least one field"),
        }
    }
}

/// A signature grammar error at a byte offset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} at offset {pos}")]
pub struct ParseError {
    kind: ParseErrorKind,
    pos: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, pos: usize) -> Self {
        Self { kind, pos }
    }

    #[inline]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Byte offset into the signature text.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}
