//! Command implementations for the `dsig` binary.
//!
//! Each command writes its report to the given writer and returns whether
//! every signature it looked at was valid.

use std::io::{self, Write};

use dsig_parse::ParseOptions;

use crate::Signature;

/// Command-line operands after flags have been split off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub options: ParseOptions,
    pub signatures: Vec<String>,
}

/// Split `--strict` from signature operands.
///
/// A lone `--` ends flag parsing, so signatures that look like flags can
/// still be checked.
pub fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut options = ParseOptions::permissive();
    let mut signatures = Vec::new();
    let mut flags_done = false;

    for arg in args {
        if flags_done {
            signatures.push(arg.clone());
        } else if arg == "--strict" {
            options = ParseOptions::strict();
        } else if arg == "--" {
            flags_done = true;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            signatures.push(arg.clone());
        }
    }

    Ok(Invocation {
        options,
        signatures,
    })
}

/// Report validity of each signature, one per line.
pub fn check(
    signatures: &[String],
    options: ParseOptions,
    out: &mut impl Write,
) -> io::Result<bool> {
    let mut all_valid = true;
    for text in signatures {
        let sig = Signature::with_options(text.as_str(), options);
        match sig.error() {
            None => writeln!(out, "{text:?}: valid ({} top-level types)", sig.len())?,
            Some(error) => {
                all_valid = false;
                writeln!(out, "{text:?}: invalid [{}] {error}", error.code())?;
            }
        }
    }
    Ok(all_valid)
}

/// Print the parsed tree of one signature.
pub fn tree(text: &str, options: ParseOptions, out: &mut impl Write) -> io::Result<bool> {
    let sig = Signature::with_options(text, options);
    match sig.error() {
        None => {
            write!(out, "{}", sig.tree())?;
            Ok(true)
        }
        Some(error) => {
            writeln!(out, "{text:?}: invalid [{}] {error}", error.code())?;
            Ok(false)
        }
    }
}
