//! Flag declarations and typed value storage.

use std::marker::PhantomData;

/// Maximum number of flags one registry can hold.
pub const MAX_FLAGS: usize = 256;

/// The value held by a flag, tagged by its declared type.
///
/// The tag is fixed at declaration time; parsing only ever replaces the
/// payload inside the declared variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A presence switch (e.g. `-verbose`). Seeing the flag sets it to true;
    /// there is no command-line syntax for setting it back to false.
    Bool(bool),
    /// A base-10 unsigned 64-bit integer (e.g. `-count 42`).
    U64(u64),
    /// Free-form text. The default may be absent; a parsed value never is.
    Str(Option<String>),
}

/// One declared flag: name, help text, current value, and default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) value: Value,
    pub(crate) default: Value,
}

impl Flag {
    /// The flag's name, without its leading dash.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The help text supplied at declaration.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The current value, reflecting the most recent parse.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The value the flag was declared with.
    pub fn default_value(&self) -> &Value {
        &self.default
    }
}

/// Typed handle to a declared flag.
///
/// Returned by the `declare_*` methods. Pass it back to [`Registry::get`]
/// to read the current value after parsing, or to [`Registry::name_of`] to
/// recover the flag's name. Handles are plain indices into the registry
/// that issued them: using a handle against a different registry panics
/// (out of range or declared-type mismatch) instead of reading the wrong
/// flag silently.
#[derive(Debug)]
pub struct FlagRef<T> {
    index: usize,
    _kind: PhantomData<fn() -> T>,
}

// Handles are always copyable; the phantom type never holds a T.
impl<T> Clone for FlagRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FlagRef<T> {}

mod sealed {
    pub trait Sealed {}

    impl Sealed for bool {}
    impl Sealed for u64 {}
    impl Sealed for Option<String> {}
}

/// The Rust types a flag can hold: `bool`, `u64`, and `Option<String>`.
///
/// Sealed; the set of flag types is closed by design.
pub trait FlagKind: sealed::Sealed + Sized {
    #[doc(hidden)]
    fn read(value: &Value) -> Self;
}

impl FlagKind for bool {
    fn read(value: &Value) -> Self {
        match value {
            Value::Bool(b) => *b,
            other => panic!("flag handle type mismatch: expected a boolean flag, found {other:?}"),
        }
    }
}

impl FlagKind for u64 {
    fn read(value: &Value) -> Self {
        match value {
            Value::U64(n) => *n,
            other => panic!("flag handle type mismatch: expected an integer flag, found {other:?}"),
        }
    }
}

impl FlagKind for Option<String> {
    fn read(value: &Value) -> Self {
        match value {
            Value::Str(s) => s.clone(),
            other => panic!("flag handle type mismatch: expected a string flag, found {other:?}"),
        }
    }
}

/// An ordered collection of declared flags.
///
/// Flags are appended in declaration order and live for the registry's
/// lifetime; there is no removal. Declaration is expected to happen once at
/// startup, so declaration-time violations (empty name, duplicate name,
/// capacity overflow) are programming errors and panic rather than returning
/// a recoverable error.
#[derive(Debug, Default)]
pub struct Registry {
    flags: Vec<Flag>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { flags: Vec::new() }
    }

    /// Declare a boolean flag with the given default and help text.
    pub fn declare_bool(&mut self, name: &str, default: bool, description: &str) -> FlagRef<bool> {
        self.declare(name, description, Value::Bool(default))
    }

    /// Declare an unsigned 64-bit integer flag.
    pub fn declare_uint64(&mut self, name: &str, default: u64, description: &str) -> FlagRef<u64> {
        self.declare(name, description, Value::U64(default))
    }

    /// Declare a string flag. The default may be absent.
    pub fn declare_string(
        &mut self,
        name: &str,
        default: Option<&str>,
        description: &str,
    ) -> FlagRef<Option<String>> {
        self.declare(name, description, Value::Str(default.map(str::to_owned)))
    }

    fn declare<T: FlagKind>(&mut self, name: &str, description: &str, default: Value) -> FlagRef<T> {
        assert!(!name.is_empty(), "flag name must not be empty");
        assert!(
            self.find(name).is_none(),
            "duplicate flag name: -{name}"
        );
        assert!(
            self.flags.len() < MAX_FLAGS,
            "flag registry is full ({MAX_FLAGS} flags)"
        );

        let index = self.flags.len();
        self.flags.push(Flag {
            name: name.to_owned(),
            description: description.to_owned(),
            value: default.clone(),
            default,
        });

        FlagRef {
            index,
            _kind: PhantomData,
        }
    }

    /// The current value of the flag behind `flag`.
    ///
    /// # Panics
    ///
    /// Panics if `flag` was issued by a different registry.
    pub fn get<T: FlagKind>(&self, flag: FlagRef<T>) -> T {
        T::read(&self.flag_at(flag.index).value)
    }

    /// The name of the flag behind `flag`, without its leading dash.
    ///
    /// # Panics
    ///
    /// Panics if `flag` was issued by a different registry.
    pub fn name_of<T>(&self, flag: FlagRef<T>) -> &str {
        &self.flag_at(flag.index).name
    }

    /// Number of declared flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// True when no flags have been declared.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Iterate over declared flags in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Flag> {
        self.flags.iter()
    }

    fn find(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|f| f.name == name)
    }

    pub(crate) fn find_mut(&mut self, name: &str) -> Option<&mut Flag> {
        self.flags.iter_mut().find(|f| f.name == name)
    }

    fn flag_at(&self, index: usize) -> &Flag {
        match self.flags.get(index) {
            Some(flag) => flag,
            None => panic!("flag handle does not belong to this registry"),
        }
    }
}
