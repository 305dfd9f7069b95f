//! Parsed type tree.
//!
//! A [`TypeNode`] is one complete type. Sibling sequencing is expressed by
//! the slice that holds the node (a signature's top-level types, or a
//! container's fields), and nesting by the container variants themselves.
//! Only container variants carry children, so a basic type with children is
//! unrepresentable.
//!
//! Nesting depth is unbounded. Every recursive walk here runs each level
//! through [`ensure_sufficient_stack`], and dropping a tree is iterative.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use dsig_stack::ensure_sufficient_stack;

use crate::{ContainerKind, TypeTag};

/// One complete type in a signature.
pub enum TypeNode {
    /// A type without children: a basic type or `VARIANT`.
    ///
    /// The tag always satisfies [`TypeTag::is_terminal`].
    Terminal(TypeTag),
    /// `a` followed by exactly one element type.
    Array(Box<TypeNode>),
    /// `(` fields `)`.
    Struct(Vec<TypeNode>),
    /// `{` fields `}`.
    DictEntry(Vec<TypeNode>),
}

impl TypeNode {
    /// Create a terminal node, or `None` if `tag` is not terminal.
    pub fn terminal(tag: TypeTag) -> Option<Self> {
        tag.is_terminal().then_some(Self::Terminal(tag))
    }

    /// Create an array node over `element`.
    pub fn array(element: TypeNode) -> Self {
        Self::Array(Box::new(element))
    }

    /// The tag of this node. Struct and dict-entry nodes report the synthetic
    /// container tags, never their delimiters.
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::Terminal(tag) => *tag,
            Self::Array(_) => TypeTag::Array,
            Self::Struct(_) => TypeTag::Struct,
            Self::DictEntry(_) => TypeTag::DictEntry,
        }
    }

    /// The container kind, or `None` for terminal nodes.
    pub fn container_kind(&self) -> Option<ContainerKind> {
        match self {
            Self::Terminal(_) => None,
            Self::Array(_) => Some(ContainerKind::Array),
            Self::Struct(_) => Some(ContainerKind::Struct),
            Self::DictEntry(_) => Some(ContainerKind::DictEntry),
        }
    }

    #[inline]
    pub fn is_container(&self) -> bool {
        !matches!(self, Self::Terminal(_))
    }

    #[inline]
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Terminal(tag) if tag.is_basic())
    }

    /// The nested sequence: the single element of an array, the fields of a
    /// struct or dict entry, nothing for terminals.
    pub fn children(&self) -> &[TypeNode] {
        match self {
            Self::Terminal(_) => &[],
            Self::Array(element) => std::slice::from_ref(element),
            Self::Struct(fields) | Self::DictEntry(fields) => fields,
        }
    }

    /// Render this type as signature text.
    pub fn signature(&self) -> String {
        let mut buf = String::new();
        self.write_signature(&mut buf);
        buf
    }

    /// Render this type as signature text into an existing buffer.
    pub fn write_signature(&self, buf: &mut String) {
        ensure_sufficient_stack(|| match self {
            Self::Terminal(tag) => buf.push(tag.code()),
            Self::Array(element) => {
                buf.push('a');
                element.write_signature(buf);
            }
            Self::Struct(fields) => {
                buf.push('(');
                fields.iter().for_each(|f| f.write_signature(buf));
                buf.push(')');
            }
            Self::DictEntry(fields) => {
                buf.push('{');
                fields.iter().for_each(|f| f.write_signature(buf));
                buf.push('}');
            }
        });
    }

    /// Move nested containers out of `self` onto `pending`.
    fn detach_children(&mut self, pending: &mut Vec<TypeNode>) {
        match self {
            Self::Array(element) if element.is_container() => {
                // The placeholder is freed with the box right after.
                pending.push(mem::replace(&mut **element, Self::Terminal(TypeTag::Invalid)));
            }
            Self::Struct(fields) | Self::DictEntry(fields) => pending.append(fields),
            Self::Terminal(_) | Self::Array(_) => {}
        }
    }
}

impl Drop for TypeNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl Clone for TypeNode {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Self::Terminal(tag) => Self::Terminal(*tag),
            Self::Array(element) => Self::Array(element.clone()),
            Self::Struct(fields) => Self::Struct(fields.clone()),
            Self::DictEntry(fields) => Self::DictEntry(fields.clone()),
        })
    }
}

impl PartialEq for TypeNode {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Self::Terminal(a), Self::Terminal(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Struct(a), Self::Struct(b)) | (Self::DictEntry(a), Self::DictEntry(b)) => {
                a == b
            }
            _ => false,
        })
    }
}

impl Eq for TypeNode {}

impl Hash for TypeNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ensure_sufficient_stack(|| {
            mem::discriminant(self).hash(state);
            match self {
                Self::Terminal(tag) => tag.hash(state),
                Self::Array(element) => element.hash(state),
                Self::Struct(fields) | Self::DictEntry(fields) => fields.hash(state),
            }
        });
    }
}

impl fmt::Debug for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Self::Terminal(tag) => f.debug_tuple("Terminal").field(tag).finish(),
            Self::Array(element) => f.debug_tuple("Array").field(element).finish(),
            Self::Struct(fields) => f.debug_tuple("Struct").field(fields).finish(),
            Self::DictEntry(fields) => f.debug_tuple("DictEntry").field(fields).finish(),
        })
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

/// Indented, one-node-per-line view of a node sequence.
///
/// ```text
/// ARRAY
///   DICT_ENTRY
///     STRING
///     VARIANT
/// INT32
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Tree<'a> {
    nodes: &'a [TypeNode],
}

impl<'a> Tree<'a> {
    pub fn new(nodes: &'a [TypeNode]) -> Self {
        Self { nodes }
    }

    fn write_level(out: &mut String, nodes: &[TypeNode], depth: usize) {
        ensure_sufficient_stack(|| {
            for node in nodes {
                for _ in 0..depth {
                    out.push_str("  ");
                }
                out.push_str(node.tag().name());
                out.push('\n');
                Self::write_level(out, node.children(), depth + 1);
            }
        });
    }
}

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        Self::write_level(&mut out, self.nodes, 0);
        f.write_str(&out)
    }
}
