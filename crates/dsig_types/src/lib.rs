//! Type model for D-Bus signatures.
//!
//! This crate is the shared vocabulary between the signature parser
//! (`dsig_parse`) and consumers that marshal values against a parsed
//! signature:
//!
//! - [`TypeTag`]: one grammar symbol, mapped from a single signature character
//! - [`TypeNode`]: one complete type in a parsed signature tree
//! - [`SignatureIterator`]: a non-owning cursor over a node sequence
//!
//! # Ownership
//!
//! A parsed signature is a `Vec<TypeNode>` of top-level types. Containers own
//! their children directly (`Box` for array elements, `Vec` for struct and
//! dict-entry fields), so the tree has exactly one owner per node and is
//! dropped deterministically with its root sequence.

mod iter;
mod node;
mod tag;

pub use iter::{IterError, SignatureIterator};
pub use node::{Tree, TypeNode};
pub use tag::{ContainerKind, TypeTag};

// Size assertions to prevent accidental regressions.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{TypeNode, TypeTag};
    // Largest variant is Struct/DictEntry with Vec<TypeNode> (24) + discriminant.
    const _: () = assert!(std::mem::size_of::<TypeNode>() <= 32);
    const _: () = assert!(std::mem::size_of::<TypeTag>() == 1);
}
