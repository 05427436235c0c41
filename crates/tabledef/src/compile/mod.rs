//! DDL compilation.
//!
//! Turns validated specs into statement text. The compiler is the second
//! half of the validate-then-compile contract: it assumes validity and will
//! produce malformed output for specs that were never run through the rule
//! engines. It never executes anything - an external execution layer runs
//! the statements inside its own transaction.

pub mod fragment;

mod postgres;

pub use postgres::{
    column_comments, create_schema, create_table, create_table_script, drop_schema, drop_table,
    table_comment, DropBehavior,
};
