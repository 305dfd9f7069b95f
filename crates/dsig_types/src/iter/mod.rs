//! Cursor over a parsed node sequence.
//!
//! Marshaling code walks a signature one complete type at a time and, for
//! containers, descends into the element or field sequence with
//! [`SignatureIterator::recurse`]. The iterator borrows the tree; it never
//! owns or mutates a node, so any number of iterators may walk the same tree
//! from any number of threads.

use std::iter::FusedIterator;

use crate::{TypeNode, TypeTag};

/// Failure of an iterator operation.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum IterError {
    /// The iterator is at the end sentinel.
    #[error("signature iterator is at the end")]
    AtEnd,
    /// `recurse` was called on a type without children.
    #[error("cannot recurse into {tag}: not a container type")]
    NotContainer { tag: TypeTag },
}

/// Non-owning cursor over a sequence of sibling types.
///
/// The end sentinel is an iterator with no remaining nodes. Two iterators
/// are equal when they point at the same node, or are both at the end.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignatureIterator<'a> {
    /// Current node followed by its remaining siblings.
    rest: &'a [TypeNode],
}

impl<'a> SignatureIterator<'a> {
    /// Iterator positioned at the first node of `nodes`.
    pub fn new(nodes: &'a [TypeNode]) -> Self {
        Self { rest: nodes }
    }

    /// The end sentinel.
    pub fn end() -> Self {
        Self { rest: &[] }
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// The node under the cursor.
    #[inline]
    pub fn current(&self) -> Option<&'a TypeNode> {
        self.rest.first()
    }

    pub fn current_tag(&self) -> Result<TypeTag, IterError> {
        self.current().map(TypeNode::tag).ok_or(IterError::AtEnd)
    }

    /// Signature text of the complete type under the cursor.
    pub fn signature(&self) -> Result<String, IterError> {
        self.current().map(TypeNode::signature).ok_or(IterError::AtEnd)
    }

    /// Move to the next sibling. Advancing the end sentinel is a no-op.
    pub fn advance(&mut self) {
        if let Some((_, rest)) = self.rest.split_first() {
            self.rest = rest;
        }
    }

    /// Iterator over the element type of an array, or the fields of a struct
    /// or dict entry. An empty struct yields an iterator already at the end.
    pub fn recurse(&self) -> Result<SignatureIterator<'a>, IterError> {
        let node = self.current().ok_or(IterError::AtEnd)?;
        if !node.is_container() {
            return Err(IterError::NotContainer { tag: node.tag() });
        }
        Ok(SignatureIterator::new(node.children()))
    }
}

impl PartialEq for SignatureIterator<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current(), other.current()) {
            (Some(a), Some(b)) => std::ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Eq for SignatureIterator<'_> {}

#[allow(
    clippy::copy_iterator,
    reason = "cursors are positions; copying one snapshots the walk"
)]
impl<'a> Iterator for SignatureIterator<'a> {
    type Item = &'a TypeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current()?;
        self.advance();
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rest.len(), Some(self.rest.len()))
    }
}

impl ExactSizeIterator for SignatureIterator<'_> {}

impl FusedIterator for SignatureIterator<'_> {}
