// src/table/record.rs

use std::fmt;

/// One (name, modulus) pair selected from the input table.
///
/// The modulus stays text: it may be far larger than any machine integer
/// and the external program parses it itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulusRecord {
    pub name: String,
    pub value: String,
}

impl ModulusRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ModulusRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.value)
    }
}
