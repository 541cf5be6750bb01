//! Usage listing and error line rendering.

use crate::parser::ParseError;
use crate::registry::{Registry, Value};
use std::io::{self, Write};

/// Render the options listing for every declared flag, in declaration order.
///
/// Each flag prints its name, its description, and a default line. The
/// default is shown only when it carries information: a boolean default
/// appears only when it is true, a numeric default always appears, and a
/// string default appears only when one was given.
///
/// Rendering is a pure read; calling it twice produces identical output.
pub fn options_text(registry: &Registry) -> String {
    let mut out = String::new();

    for flag in registry.iter() {
        out.push_str(&format!("    -{}\n", flag.name()));
        out.push_str(&format!("        {}\n", flag.description()));
        match flag.default_value() {
            Value::Bool(true) => out.push_str("        Default: true\n"),
            Value::Bool(false) => {}
            Value::U64(n) => out.push_str(&format!("        Default: {}\n", n)),
            Value::Str(Some(s)) => out.push_str(&format!("        Default: {}\n", s)),
            Value::Str(None) => {}
        }
    }

    out
}

/// Write the options listing to `out` (e.g. stderr).
pub fn write_options<W: Write>(registry: &Registry, out: &mut W) -> io::Result<()> {
    out.write_all(options_text(registry).as_bytes())
}

/// Render a parse error as a single report line, e.g.
/// `ERROR: -count: invalid number`.
pub fn error_line(error: &ParseError) -> String {
    format!("ERROR: {}\n", error)
}

/// Write the error report line to `out` (e.g. stderr).
pub fn write_error<W: Write>(error: &ParseError, out: &mut W) -> io::Result<()> {
    out.write_all(error_line(error).as_bytes())
}
