//! D-Bus type signatures.
//!
//! [`Signature`] owns signature text and the type tree parsed from it.
//! Parsing never fails loudly: a malformed signature is an ordinary value
//! whose [`is_valid`](Signature::is_valid) is `false`, and the reason is
//! logged through `tracing` and kept in [`Signature::error`].
//!
//! ```text
//! let sig = Signature::new("a{sv}");
//! assert!(sig.is_valid() && sig.is_singleton());
//!
//! let mut it = sig.begin();
//! assert_eq!(it.current_tag()?, TypeTag::Array);
//! let entry = it.recurse()?;
//! assert_eq!(entry.current_tag()?, TypeTag::DictEntry);
//! ```
//!
//! # Logging
//!
//! Parse failures are logged at `debug`, every parse outcome at `trace`.
//! The `dsig` binary installs a subscriber when `RUST_LOG` is set; library
//! users bring their own.

pub mod commands;
mod signature;

use std::sync::Once;

pub use dsig_parse::{ParseError, ParseErrorKind, ParseOptions, StrictChecks};
pub use dsig_types::{ContainerKind, IterError, SignatureIterator, Tree, TypeNode, TypeTag};
pub use signature::Signature;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostic output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=dsig=debug` to see why
/// signatures are rejected, or `RUST_LOG=trace` for every parse.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
