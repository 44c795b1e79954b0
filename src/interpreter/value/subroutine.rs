use std::{fmt, rc::Rc};

use crate::ast::SubroutineDef;

/// The built-in subroutines every program can call.
///
/// Natives are resolved by name after the active and global tables have been
/// searched, so a program may shadow them with its own bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeSubroutine {
    /// `print(x)`
    Print,
    /// `input()` / `input(prompt)`
    Input,
    /// `random(min, max)`
    Random,
    /// `str(x)`
    Str,
    /// `int(x)`
    Int,
    /// `float(x)`
    Float,
    /// `bool(x)`
    Bool,
    /// `asc(s)`
    Asc,
    /// `chr(n)`
    Chr,
}

impl NativeSubroutine {
    /// Every native, in documentation order.
    pub const ALL: [Self; 9] = [Self::Print,
                                Self::Input,
                                Self::Random,
                                Self::Str,
                                Self::Int,
                                Self::Float,
                                Self::Bool,
                                Self::Asc,
                                Self::Chr];

    /// Looks a native up by the name programs call it with.
    ///
    /// # Example
    /// ```
    /// use erl::interpreter::value::subroutine::NativeSubroutine;
    ///
    /// assert_eq!(NativeSubroutine::from_name("chr"), Some(NativeSubroutine::Chr));
    /// assert_eq!(NativeSubroutine::from_name("sin"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|native| native.name() == name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Input => "input",
            Self::Random => "random",
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Asc => "asc",
            Self::Chr => "chr",
        }
    }
}

/// A callable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Subroutine {
    /// A `procedure` or `function` defined in the program.
    User(Rc<SubroutineDef>),
    /// A built-in.
    Native(NativeSubroutine),
}

impl fmt::Display for Subroutine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(def) => write!(f, "<{} {}>", def.kind, def.name),
            Self::Native(native) => write!(f, "<native {}>", native.name()),
        }
    }
}
