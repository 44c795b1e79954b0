use std::collections::HashMap;

use crate::{
    ast::Position,
    error::ErlError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// One named entry in a [`SymbolTable`].
///
/// A slot is created the first time a name is assigned in a table. Once a
/// `const` assignment has succeeded the slot is sealed: every later
/// assignment to the same name in the same table fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    name:              String,
    value:             Option<Value>,
    is_constant:       bool,
    has_been_declared: bool,
}

impl Slot {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name:              name.into(),
               value:             None,
               is_constant:       false,
               has_been_declared: false, }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    #[must_use]
    pub const fn is_constant(&self) -> bool {
        self.is_constant
    }

    /// Stores `value`, enforcing the constant-once rule.
    ///
    /// `constant` is the `const` qualifier written at this assignment. The
    /// first successful constant assignment seals the slot.
    ///
    /// # Errors
    /// Returns [`ErlError::Identifier`] when the slot already holds a
    /// declared constant.
    ///
    /// # Example
    /// ```
    /// use erl::{
    ///     ast::Position,
    ///     interpreter::{symbol_table::Slot, value::core::Value},
    /// };
    ///
    /// let mut slot = Slot::new("limit");
    /// slot.set(Value::Integer(1), false, Position::default()).unwrap();
    /// assert!(!slot.is_constant());
    /// slot.set(Value::Integer(2), true, Position::default()).unwrap();
    /// assert!(slot.is_constant());
    ///
    /// let error = slot.set(Value::Integer(3), false, Position::default()).unwrap_err();
    /// assert_eq!(error.message(), format!("Cannot reassign constant '{}'", slot.name()));
    /// assert_eq!(slot.value(), Some(&Value::Integer(2)));
    /// ```
    pub fn set(&mut self, value: Value, constant: bool, position: Position) -> EvalResult<()> {
        if self.has_been_declared {
            return Err(ErlError::identifier(&self.name,
                                            format!("Cannot reassign constant '{}'",
                                                    self.name),
                                            position));
        }
        if constant {
            self.is_constant = true;
            self.has_been_declared = true;
        }
        self.value = Some(value);
        Ok(())
    }
}

/// A name → slot mapping.
///
/// The interpreter keeps exactly two of these alive: the global table for the
/// whole run and, while a subroutine executes, that invocation's call scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    slots: HashMap<String, Slot>,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if the slot exists and is assigned.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.slots.get(name).and_then(Slot::value)
    }

    /// Returns the slot for `name`, creating an unassigned one if needed.
    pub fn slot_mut(&mut self, name: &str) -> &mut Slot {
        self.slots
            .entry(name.to_string())
            .or_insert_with(|| Slot::new(name))
    }

    /// Assigns `value` to `name` in this table.
    ///
    /// # Errors
    /// Propagates the constant violation from [`Slot::set`].
    pub fn assign(&mut self,
                  name: &str,
                  value: Value,
                  constant: bool,
                  position: Position)
                  -> EvalResult<()> {
        self.slot_mut(name).set(value, constant, position)
    }

    /// Reads `name`, failing with an identifier error when it has no value.
    ///
    /// # Example
    /// ```
    /// use erl::{
    ///     ast::Position,
    ///     error::ErrorKind,
    ///     interpreter::{symbol_table::SymbolTable, value::core::Value},
    /// };
    ///
    /// let mut table = SymbolTable::new();
    /// let err = table.get("x", Position::default()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Identifier);
    ///
    /// table.assign("x", Value::Integer(7), false, Position::default()).unwrap();
    /// assert_eq!(table.get("x", Position::default()).unwrap(), &Value::Integer(7));
    /// ```
    pub fn get(&self, name: &str, position: Position) -> EvalResult<&Value> {
        self.lookup(name)
            .ok_or_else(|| ErlError::undeclared(name, position))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}
