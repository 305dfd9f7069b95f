//! Parser configuration.
//!
//! The grammar alone accepts any number of struct and dict-entry fields.
//! The message bus itself is stricter about container shapes; callers that
//! want those rules enforced at parse time opt in through [`StrictChecks`].

use bitflags::bitflags;

bitflags! {
    /// Container shape rules enforced on top of the grammar.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct StrictChecks: u8 {
        /// A dict entry has exactly two fields (key, value).
        const DICT_ENTRY_ARITY = 1 << 0;
        /// A dict entry's key is a basic type.
        const DICT_ENTRY_KEY_BASIC = 1 << 1;
        /// A struct has at least one field.
        const NON_EMPTY_STRUCT = 1 << 2;
    }
}

/// Options for [`parse_with`](crate::parse_with).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseOptions {
    checks: StrictChecks,
}

impl ParseOptions {
    /// Grammar only. This is the default.
    pub const fn permissive() -> Self {
        Self {
            checks: StrictChecks::empty(),
        }
    }

    /// Every shape rule in [`StrictChecks`].
    pub const fn strict() -> Self {
        Self {
            checks: StrictChecks::all(),
        }
    }

    pub const fn with_checks(checks: StrictChecks) -> Self {
        Self { checks }
    }

    #[inline]
    pub const fn checks(self) -> StrictChecks {
        self.checks
    }

    #[inline]
    pub const fn is_strict(self) -> bool {
        !self.checks.is_empty()
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::permissive()
    }
}

#[cfg(test)]
mod tests;
