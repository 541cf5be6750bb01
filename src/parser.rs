//! Argument parsing against a flag registry.

use crate::registry::{Registry, Value};
use std::num::IntErrorKind;
use thiserror::Error;

/// Errors that can occur during argument parsing.
///
/// Each variant carries the name of the offending flag, without its leading
/// dash. The first error aborts the parse; flags matched earlier in the same
/// pass keep whatever values were already assigned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("-{0}: unknown flag")]
    UnknownFlag(String),

    #[error("-{0}: no value provided")]
    MissingValue(String),

    #[error("-{0}: invalid number")]
    InvalidNumber(String),

    #[error("-{0}: integer overflow")]
    IntegerOverflow(String),
}

impl ParseError {
    /// The name of the flag that triggered the error.
    pub fn flag_name(&self) -> &str {
        match self {
            ParseError::UnknownFlag(name)
            | ParseError::MissingValue(name)
            | ParseError::InvalidNumber(name)
            | ParseError::IntegerOverflow(name) => name,
        }
    }
}

/// Result of parsing arguments: the leftover positional suffix of the input,
/// or the first error encountered.
pub type ParseResult<'a> = Result<&'a [String], ParseError>;

/// Parse command-line arguments against the registry.
///
/// The first element of `args` is the program name and is always skipped.
/// Flags seen on the command line update their registry entries in place:
/// a boolean flag is set to true by its presence alone, while string and
/// integer flags consume exactly one following token as their value.
///
/// Returns the leftover positional arguments: everything from the first
/// token that does not start with `-` (that token included), or everything
/// after a bare `--` terminator (the terminator excluded).
///
/// Note the asymmetry: an unknown flag aborts the whole parse immediately,
/// while a non-dash token ends flag scanning cleanly and lands in the
/// leftovers. Parsing is not transactional; on error, values assigned
/// earlier in the same pass are kept.
pub fn parse_args<'a>(registry: &mut Registry, args: &'a [String]) -> ParseResult<'a> {
    let mut rest = match args.split_first() {
        Some((_program, rest)) => rest,
        None => return Ok(&[]),
    };

    while let Some((token, tail)) = rest.split_first() {
        if !token.starts_with('-') {
            // Positional: this token and everything after it are leftovers.
            return Ok(rest);
        }
        if token == "--" {
            // Terminator: consumed, not part of the leftovers.
            return Ok(tail);
        }
        rest = tail;

        let name = &token[1..];
        let flag = registry
            .find_mut(name)
            .ok_or_else(|| ParseError::UnknownFlag(name.to_string()))?;

        match &mut flag.value {
            Value::Bool(present) => *present = true,
            Value::Str(current) => {
                let (value, tail) = rest
                    .split_first()
                    .ok_or_else(|| ParseError::MissingValue(name.to_string()))?;
                *current = Some(value.clone());
                rest = tail;
            }
            Value::U64(current) => {
                let (value, tail) = rest
                    .split_first()
                    .ok_or_else(|| ParseError::MissingValue(name.to_string()))?;
                *current = parse_uint64(name, value)?;
                rest = tail;
            }
        }
    }

    Ok(rest)
}

/// Parse a value token as a full-token base-10 unsigned 64-bit integer.
/// Trailing non-digit characters reject the whole token.
fn parse_uint64(name: &str, token: &str) -> Result<u64, ParseError> {
    token.parse::<u64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => ParseError::IntegerOverflow(name.to_string()),
        _ => ParseError::InvalidNumber(name.to_string()),
    })
}
