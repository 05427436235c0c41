//! # tabledef
//!
//! Table/schema description model, validator, and PostgreSQL DDL compiler.
//!
//! This library is the core of a table-designer backend: a caller (an HTTP
//! handler, a CLI, a migration script) builds a [`TableSpec`] or
//! [`SchemaSpec`], runs it through the rule engines, and compiles the
//! validated spec into DDL text for an execution layer to run inside a
//! transaction:
//!
//! - **Identifier rules** - lexical checks for schema/table/column names
//! - **Column rule engine** - per-column semantic checks, all violations in
//!   one pass
//! - **Table rule engine** - whole-table invariants (primary-key
//!   cardinality, duplicate names)
//! - **DDL compiler** - deterministic CREATE/DROP TABLE, CREATE/DROP SCHEMA,
//!   and COMMENT statement generation
//!
//! The core is stateless and pure: no connections, no I/O, no shared mutable
//! state. Validation results are data ([`Verdict`]), not errors.
//!
//! ## Example
//!
//! ```rust
//! use tabledef::{compile, validate, TableSpec};
//!
//! let spec = TableSpec::from_yaml(
//!     "name: articles\n\
//!      columns:\n\
//!      - {name: id, sql_type: SERIAL, is_primary: true}\n\
//!      - {name: title, sql_type: VARCHAR, length: 100, is_required: true}\n",
//! )?;
//!
//! let verdict = validate::validate_table(&spec);
//! assert!(verdict.valid);
//!
//! let ddl = compile::create_table(&spec);
//! assert!(ddl.starts_with("CREATE TABLE public.articles"));
//! # Ok::<(), tabledef::DdlError>(())
//! ```

pub mod compile;
pub mod error;
pub mod spec;
pub mod validate;

// Re-exports for convenient access
pub use compile::DropBehavior;
pub use error::{DdlError, Result};
pub use spec::{ColumnSpec, ColumnType, ForeignKeyRef, SchemaSpec, TableSpec};
pub use validate::Verdict;
