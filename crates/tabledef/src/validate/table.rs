//! Whole-table and schema rule engines.

use super::column::validate_column;
use super::identifier::{validate_identifier, IdentifierKind};
use super::Verdict;
use crate::spec::{ColumnSpec, SchemaSpec, TableSpec};

/// Validate a column list against the whole-table invariants.
///
/// Collects the complete error set: primary-key cardinality, duplicate
/// names, and every per-column violation prefixed with the column's 1-based
/// position. An empty list short-circuits with a single error - there is no
/// point running per-column checks on nothing.
pub fn validate_columns(columns: &[ColumnSpec]) -> Verdict {
    if columns.is_empty() {
        return Verdict::fail("at least one column required");
    }

    let mut verdict = Verdict::ok();

    match columns.iter().filter(|c| c.is_primary).count() {
        1 => {}
        0 => verdict.push("exactly one primary key required"),
        _ => verdict.push("only one primary key permitted"),
    }

    if let Some(message) = duplicate_names(columns) {
        verdict.push(message);
    }

    for (i, col) in columns.iter().enumerate() {
        verdict.absorb_prefixed(validate_column(col), &format!("Column {}: ", i + 1));
    }

    verdict
}

/// Validate a full table spec: table name, containing schema shape, and the
/// column list.
///
/// The containing schema is only shape-checked; reserved names such as
/// `public` are legal here, they are reserved for newly *created* schemas
/// only (see [`validate_schema`]).
pub fn validate_table(table: &TableSpec) -> Verdict {
    let mut verdict = Verdict::ok();

    if let Err(e) = validate_identifier(&table.name, IdentifierKind::Table) {
        verdict.push(e);
    }
    if let Err(e) = validate_identifier(&table.schema, IdentifierKind::Column) {
        verdict.push(format!("schema: {}", e));
    }

    let columns = validate_columns(&table.columns);
    for error in columns.errors {
        verdict.push(error);
    }

    verdict
}

/// Validate a schema spec (a newly created schema name).
pub fn validate_schema(schema: &SchemaSpec) -> Verdict {
    match validate_identifier(&schema.name, IdentifierKind::Schema) {
        Ok(()) => Verdict::ok(),
        Err(e) => Verdict::fail(e),
    }
}

/// Case-insensitive duplicate detection.
///
/// Every name that collides with an earlier one is reported once, in a
/// single combined message.
fn duplicate_names(columns: &[ColumnSpec]) -> Option<String> {
    let mut seen: Vec<String> = Vec::with_capacity(columns.len());
    let mut duplicates: Vec<String> = Vec::new();

    for col in columns {
        let lower = col.name.to_lowercase();
        if seen.contains(&lower) {
            if !duplicates.contains(&lower) {
                duplicates.push(lower);
            }
        } else {
            seen.push(lower);
        }
    }

    if duplicates.is_empty() {
        None
    } else {
        Some(format!("duplicate column names: {}", duplicates.join(", ")))
    }
}
