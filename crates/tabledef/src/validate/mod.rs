//! Rule engines for spec validation.
//!
//! Invalidity is data, not a fault: every engine returns a [`Verdict`]
//! carrying the complete error set for its input, so a caller can surface
//! every problem at once instead of round-tripping one error at a time.
//! Nothing here panics or returns `Err` for a representable spec.

mod column;
mod identifier;
mod table;

pub use column::validate_column;
pub use identifier::{validate_identifier, IdentifierKind, MAX_TABLE_NAME_LENGTH};
pub use table::{validate_columns, validate_schema, validate_table};

use serde::{Deserialize, Serialize};

/// Validation result: valid iff no errors were collected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the spec passed every check.
    pub valid: bool,

    /// Human-readable error messages, caller-correctable.
    pub errors: Vec<String>,
}

impl Verdict {
    /// A passing verdict.
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// A failing verdict with a single error.
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![error.into()],
        }
    }

    /// Record a violation.
    pub fn push(&mut self, error: impl Into<String>) {
        self.valid = false;
        self.errors.push(error.into());
    }

    /// Absorb another verdict, prefixing each of its errors.
    pub fn absorb_prefixed(&mut self, other: Verdict, prefix: &str) {
        for error in other.errors {
            self.push(format!("{}{}", prefix, error));
        }
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::ok()
    }
}
