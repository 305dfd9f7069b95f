//! Recursive-descent signature parser.
//!
//! One call of [`Parser::parse_sequence`] handles one nesting level. The
//! enclosing container, if any, is passed down as a [`Frame`] and decides
//! how the level ends:
//!
//! - top level: at end of input
//! - array element: after exactly one complete type
//! - struct / dict entry: at the matching `)` / `}`; end of input is an error
//!
//! Struct and dict-entry delimiters never become nodes: `(` produces a
//! `TypeNode::Struct` holding the fields parsed up to its `)`.

use dsig_types::{ContainerKind, TypeNode, TypeTag};

use crate::error::{ParseError, ParseErrorKind};
use crate::options::{ParseOptions, StrictChecks};
use dsig_stack::ensure_sufficient_stack;

/// The container whose contents a nesting level is parsing.
#[derive(Copy, Clone, Debug)]
struct Frame {
    kind: ContainerKind,
    /// Byte offset of the `a`, `(` or `{` that opened it.
    opened_at: usize,
}

pub(crate) struct Parser<'a> {
    source: &'a str,
    pos: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(source: &'a str, options: ParseOptions) -> Self {
        Self {
            source,
            pos: 0,
            options,
        }
    }

    /// Parse the whole input as a sequence of top-level types.
    pub(crate) fn parse_signature(mut self) -> Result<Vec<TypeNode>, ParseError> {
        self.parse_sequence(None)
    }

    #[inline]
    fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    #[inline]
    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn parse_sequence(&mut self, parent: Option<Frame>) -> Result<Vec<TypeNode>, ParseError> {
        ensure_sufficient_stack(|| self.parse_sequence_inner(parent))
    }

    fn parse_sequence_inner(
        &mut self,
        parent: Option<Frame>,
    ) -> Result<Vec<TypeNode>, ParseError> {
        let mut nodes = Vec::new();

        while let Some(c) = self.current() {
            let start = self.pos;
            let Some(tag) = TypeTag::from_code(c) else {
                return Err(ParseError::new(
                    ParseErrorKind::UnknownTypeTag { found: c },
                    start,
                ));
            };
            self.bump(c);

            let node = match tag {
                TypeTag::Array => self.parse_array(start)?,
                TypeTag::StructBegin => {
                    TypeNode::Struct(self.parse_fields(ContainerKind::Struct, start)?)
                }
                TypeTag::DictEntryBegin => {
                    TypeNode::DictEntry(self.parse_fields(ContainerKind::DictEntry, start)?)
                }
                TypeTag::StructEnd => {
                    return Self::close(parent, ContainerKind::Struct, start, nodes);
                }
                TypeTag::DictEntryEnd => {
                    return Self::close(parent, ContainerKind::DictEntry, start, nodes);
                }
                tag => {
                    debug_assert!(tag.is_terminal(), "unexpected symbol tag {tag}");
                    TypeNode::Terminal(tag)
                }
            };
            nodes.push(node);

            if matches!(
                parent,
                Some(Frame {
                    kind: ContainerKind::Array,
                    ..
                })
            ) {
                return Ok(nodes);
            }
        }

        match parent {
            // An array frame that reaches end of input has no element yet.
            Some(frame) => Err(ParseError::new(
                ParseErrorKind::UnterminatedContainer {
                    container: frame.kind,
                    opened_at: frame.opened_at,
                },
                self.pos,
            )),
            None => Ok(nodes),
        }
    }

    /// Handle a `)` or `}` at `pos`: it closes the current level only if the
    /// level belongs to the same kind of container.
    fn close(
        parent: Option<Frame>,
        closing: ContainerKind,
        pos: usize,
        nodes: Vec<TypeNode>,
    ) -> Result<Vec<TypeNode>, ParseError> {
        match parent {
            Some(frame) if frame.kind == closing => Ok(nodes),
            _ => Err(ParseError::new(
                ParseErrorKind::UnmatchedContainerEnd { container: closing },
                pos,
            )),
        }
    }

    fn parse_array(&mut self, opened_at: usize) -> Result<TypeNode, ParseError> {
        let frame = Frame {
            kind: ContainerKind::Array,
            opened_at,
        };
        let mut element = self.parse_sequence(Some(frame))?;
        match element.pop() {
            Some(element) => Ok(TypeNode::array(element)),
            None => Err(ParseError::new(
                ParseErrorKind::UnterminatedContainer {
                    container: ContainerKind::Array,
                    opened_at,
                },
                self.pos,
            )),
        }
    }

    fn parse_fields(
        &mut self,
        kind: ContainerKind,
        opened_at: usize,
    ) -> Result<Vec<TypeNode>, ParseError> {
        tracing::trace!(%kind, opened_at, "open container");
        let fields = self.parse_sequence(Some(Frame { kind, opened_at }))?;
        self.check_shape(kind, &fields, opened_at)?;
        Ok(fields)
    }

    /// Apply the enabled strict checks to a closed struct or dict entry.
    fn check_shape(
        &self,
        kind: ContainerKind,
        fields: &[TypeNode],
        opened_at: usize,
    ) -> Result<(), ParseError> {
        let checks = self.options.checks();
        let violation = match kind {
            ContainerKind::Struct
                if checks.contains(StrictChecks::NON_EMPTY_STRUCT) && fields.is_empty() =>
            {
                Some(ParseErrorKind::EmptyStruct)
            }
            ContainerKind::DictEntry
                if checks.contains(StrictChecks::DICT_ENTRY_ARITY) && fields.len() != 2 =>
            {
                Some(ParseErrorKind::DictEntryArity {
                    found: fields.len(),
                })
            }
            ContainerKind::DictEntry if checks.contains(StrictChecks::DICT_ENTRY_KEY_BASIC) => {
                fields
                    .first()
                    .filter(|key| !key.is_basic())
                    .map(|key| ParseErrorKind::DictEntryKeyNotBasic { found: key.tag() })
            }
            _ => None,
        };
        violation.map_or(Ok(()), |kind| Err(ParseError::new(kind, opened_at)))
    }
}
