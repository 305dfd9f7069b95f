//! Type tags for signature symbols.
//!
//! Each character of a signature maps to exactly one [`TypeTag`]. The tag's
//! discriminant is the ASCII code of that character, so converting back to
//! the signature character is a cast.
//!
//! # Tag Categories
//!
//! - Basic types: fixed-size integers, booleans, doubles and the string-like
//!   types (`s`, `o`, `g`). `h` (unix fd) is basic as well.
//! - `v`: variant, a terminal type whose content is only known at runtime.
//! - Containers: `a` (array), and the synthetic `Struct` / `DictEntry` tags.
//! - Delimiters: `(` `)` `{` `}`. These never appear in a parsed tree; the
//!   parser collapses a begin/end pair into the synthetic container tag.

use std::fmt;

/// Signature symbol discriminant.
///
/// The discriminant is the ASCII code of the signature character.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TypeTag {
    /// Not a type. Never produced by the parser.
    Invalid = 0,

    // === Basic types ===
    /// 8-bit unsigned integer.
    Byte = b'y',
    /// Boolean, marshaled as a 32-bit value.
    Boolean = b'b',
    /// 16-bit signed integer.
    Int16 = b'n',
    /// 16-bit unsigned integer.
    Uint16 = b'q',
    /// 32-bit signed integer.
    Int32 = b'i',
    /// 32-bit unsigned integer.
    Uint32 = b'u',
    /// 64-bit signed integer.
    Int64 = b'x',
    /// 64-bit unsigned integer.
    Uint64 = b't',
    /// IEEE 754 double.
    Double = b'd',
    /// UTF-8 string.
    String = b's',
    /// Object path.
    ObjectPath = b'o',
    /// Type signature.
    Signature = b'g',
    /// Index into the out-of-band file descriptor array.
    UnixFd = b'h',

    // === Variant ===
    /// Self-describing value.
    Variant = b'v',

    // === Containers ===
    /// Array prefix; followed by exactly one element type.
    Array = b'a',
    /// Struct, collapsed from a `(` ... `)` pair.
    Struct = b'r',
    /// Dict entry, collapsed from a `{` ... `}` pair.
    DictEntry = b'e',

    // === Delimiters ===
    /// `(`
    StructBegin = b'(',
    /// `)`
    StructEnd = b')',
    /// `{`
    DictEntryBegin = b'{',
    /// `}`
    DictEntryEnd = b'}',
}

impl TypeTag {
    /// Map a signature character to its tag.
    ///
    /// Returns `None` for characters that are not signature symbols. The codes
    /// of the synthetic container tags (`r`, `e`) are not symbols: structs and
    /// dict entries are only spelled with their delimiters.
    pub const fn from_code(c: char) -> Option<Self> {
        let tag = match c {
            'y' => Self::Byte,
            'b' => Self::Boolean,
            'n' => Self::Int16,
            'q' => Self::Uint16,
            'i' => Self::Int32,
            'u' => Self::Uint32,
            'x' => Self::Int64,
            't' => Self::Uint64,
            'd' => Self::Double,
            's' => Self::String,
            'o' => Self::ObjectPath,
            'g' => Self::Signature,
            'h' => Self::UnixFd,
            'v' => Self::Variant,
            'a' => Self::Array,
            '(' => Self::StructBegin,
            ')' => Self::StructEnd,
            '{' => Self::DictEntryBegin,
            '}' => Self::DictEntryEnd,
            _ => return None,
        };
        Some(tag)
    }

    /// The signature character for this tag (`'\0'` for `Invalid`).
    #[inline]
    pub const fn code(self) -> char {
        self as u8 as char
    }

    /// Check if this tag is a basic type (valid as a dict-entry key).
    #[inline]
    pub const fn is_basic(self) -> bool {
        matches!(
            self,
            Self::Byte
                | Self::Boolean
                | Self::Int16
                | Self::Uint16
                | Self::Int32
                | Self::Uint32
                | Self::Int64
                | Self::Uint64
                | Self::Double
                | Self::String
                | Self::ObjectPath
                | Self::Signature
                | Self::UnixFd
        )
    }

    /// Check if this tag is a complete type with no children.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        self.is_basic() || matches!(self, Self::Variant)
    }

    /// Check if this tag is a container type.
    #[inline]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Struct | Self::DictEntry)
    }

    /// Check if this tag is a struct or dict-entry delimiter.
    #[inline]
    pub const fn is_delimiter(self) -> bool {
        matches!(
            self,
            Self::StructBegin | Self::StructEnd | Self::DictEntryBegin | Self::DictEntryEnd
        )
    }

    /// Get the name of this tag as a static string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "INVALID",
            Self::Byte => "BYTE",
            Self::Boolean => "BOOLEAN",
            Self::Int16 => "INT16",
            Self::Uint16 => "UINT16",
            Self::Int32 => "INT32",
            Self::Uint32 => "UINT32",
            Self::Int64 => "INT64",
            Self::Uint64 => "UINT64",
            Self::Double => "DOUBLE",
            Self::String => "STRING",
            Self::ObjectPath => "OBJECT_PATH",
            Self::Signature => "SIGNATURE",
            Self::UnixFd => "UNIX_FD",
            Self::Variant => "VARIANT",
            Self::Array => "ARRAY",
            Self::Struct => "STRUCT",
            Self::DictEntry => "DICT_ENTRY",
            Self::StructBegin => "STRUCT_BEGIN",
            Self::StructEnd => "STRUCT_END",
            Self::DictEntryBegin => "DICT_ENTRY_BEGIN",
            Self::DictEntryEnd => "DICT_ENTRY_END",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The three kinds of container a signature can nest.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ContainerKind {
    Array,
    Struct,
    DictEntry,
}

impl ContainerKind {
    /// The tag a parsed node of this kind carries.
    pub const fn tag(self) -> TypeTag {
        match self {
            Self::Array => TypeTag::Array,
            Self::Struct => TypeTag::Struct,
            Self::DictEntry => TypeTag::DictEntry,
        }
    }

    /// The container kind a container tag stands for.
    pub const fn from_tag(tag: TypeTag) -> Option<Self> {
        match tag {
            TypeTag::Array => Some(Self::Array),
            TypeTag::Struct | TypeTag::StructBegin | TypeTag::StructEnd => Some(Self::Struct),
            TypeTag::DictEntry | TypeTag::DictEntryBegin | TypeTag::DictEntryEnd => {
                Some(Self::DictEntry)
            }
            _ => None,
        }
    }

    /// The delimiter that closes this container. Arrays have none.
    pub const fn closing(self) -> Option<TypeTag> {
        match self {
            Self::Array => None,
            Self::Struct => Some(TypeTag::StructEnd),
            Self::DictEntry => Some(TypeTag::DictEntryEnd),
        }
    }

    /// Get the name of this container kind.
    pub const fn name(self) -> &'static str {
        self.tag().name()
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
