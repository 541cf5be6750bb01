//! A shared process-wide flag registry.
//!
//! The explicit [`Registry`] is the primary API; this module mirrors it over
//! one shared instance so a program can declare flags next to where they are
//! used without threading a registry through the call graph. Access is
//! serialized with a mutex, so declaration and parsing from multiple threads
//! simply queue; a single parse call is atomic with respect to readers, but
//! interleaving whole parse passes across threads is still on the caller.

use crate::help;
use crate::parser::{self, ParseError};
use crate::registry::{FlagKind, FlagRef, Registry};
use std::sync::{Mutex, OnceLock};

static REGISTRY: OnceLock<Mutex<Registry>> = OnceLock::new();

fn with_registry<R>(f: impl FnOnce(&mut Registry) -> R) -> R {
    let lock = REGISTRY.get_or_init(|| Mutex::new(Registry::new()));
    // A poisoned lock only means another thread panicked mid-call; the
    // registry itself is still structurally valid.
    let mut registry = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut registry)
}

/// Declare a boolean flag on the process-wide registry.
pub fn declare_bool(name: &str, default: bool, description: &str) -> FlagRef<bool> {
    with_registry(|r| r.declare_bool(name, default, description))
}

/// Declare an unsigned 64-bit integer flag on the process-wide registry.
pub fn declare_uint64(name: &str, default: u64, description: &str) -> FlagRef<u64> {
    with_registry(|r| r.declare_uint64(name, default, description))
}

/// Declare a string flag on the process-wide registry.
pub fn declare_string(name: &str, default: Option<&str>, description: &str) -> FlagRef<Option<String>> {
    with_registry(|r| r.declare_string(name, default, description))
}

/// Parse `args` against the process-wide registry.
///
/// Same contract as [`parser::parse_args`]: the first element is the program
/// name and is skipped, and the returned slice is the leftover positional
/// suffix of `args`.
pub fn parse(args: &[String]) -> Result<&[String], ParseError> {
    with_registry(|r| parser::parse_args(r, args))
}

/// Parse the process's own argument vector, as obtained from
/// [`std::env::args`]. Leftovers are returned by value.
pub fn parse_from_env() -> Result<Vec<String>, ParseError> {
    let args: Vec<String> = std::env::args().collect();
    parse(&args).map(|rest| rest.to_vec())
}

/// Current value of a flag declared on the process-wide registry.
pub fn get<T: FlagKind>(flag: FlagRef<T>) -> T {
    with_registry(|r| r.get(flag))
}

/// Name of a flag declared on the process-wide registry.
pub fn name_of<T>(flag: FlagRef<T>) -> String {
    with_registry(|r| r.name_of(flag).to_string())
}

/// Options listing for the process-wide registry.
pub fn options_text() -> String {
    with_registry(|r| help::options_text(r))
}
