//! miniflag - Go-style command-line flag parsing.
//!
//! Declare typed flags against a [`Registry`], parse the process argument
//! vector with [`parse_args`], then read the updated values back through the
//! [`FlagRef`] handles returned at declaration. The parser hands back the
//! leftover positional arguments; [`help`] renders the usage listing and
//! error lines, and [`global`] mirrors the API over one shared process-wide
//! registry for programs that prefer declaring flags in place.

pub mod global;
pub mod help;
pub mod parser;
pub mod registry;

pub use help::{error_line, options_text, write_error, write_options};
pub use parser::{parse_args, ParseError, ParseResult};
pub use registry::{Flag, FlagKind, FlagRef, Registry, Value, MAX_FLAGS};
