//! PostgreSQL DDL generation.
//!
//! Pure, deterministic string builders: the same spec always compiles to
//! byte-identical output, and nothing here executes SQL or re-validates.
//! Callers must run a spec through the rule engines first - compiling an
//! invalid spec yields undefined (but non-panicking) output.
//!
//! Identifier handling is asymmetric on purpose: `create_table` embeds bare
//! names, which is safe because validated names match
//! `^[A-Za-z][A-Za-z0-9_]*$`, while the schema and drop statements quote via
//! [`fragment`](super::fragment) to preserve case.

use super::fragment;
use crate::spec::{ColumnSpec, SchemaSpec, TableSpec};
use tracing::{debug, warn};

/// Drop behavior for DROP TABLE / DROP SCHEMA.
///
/// RESTRICT is the default: the drop fails if dependent objects exist, and
/// a caller has to ask for CASCADE explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropBehavior {
    #[default]
    Restrict,
    Cascade,
}

impl DropBehavior {
    fn sql(self) -> &'static str {
        match self {
            DropBehavior::Restrict => "RESTRICT",
            DropBehavior::Cascade => "CASCADE",
        }
    }
}

/// Compile a CREATE SCHEMA statement, plus a COMMENT ON SCHEMA statement on
/// its own line when a description is present.
pub fn create_schema(schema: &SchemaSpec) -> String {
    let mut sql = format!("CREATE SCHEMA IF NOT EXISTS {};", fragment::ident(&schema.name));

    if let Some(description) = non_empty(&schema.description) {
        sql.push('\n');
        sql.push_str(&format!(
            "COMMENT ON SCHEMA {} IS {};",
            fragment::ident(&schema.name),
            fragment::literal(description)
        ));
    }

    debug!("compiled CREATE SCHEMA for {}", schema.name);
    sql
}

/// Compile a DROP SCHEMA statement.
pub fn drop_schema(name: &str, behavior: DropBehavior) -> String {
    format!("DROP SCHEMA {} {};", fragment::ident(name), behavior.sql())
}

/// Compile a CREATE TABLE statement.
///
/// Columns render in spec order. Primary keys use the trailing
/// table-constraint form `PRIMARY KEY (c1, ...)` over all flagged columns,
/// so composite keys are representable here even though the table rule
/// engine restricts specs to exactly one. Foreign-key clauses follow the
/// primary-key clause, in column order.
pub fn create_table(table: &TableSpec) -> String {
    let mut parts: Vec<String> = table.columns.iter().map(render_column).collect();

    let pk: Vec<&str> = table
        .columns
        .iter()
        .filter(|c| c.is_primary)
        .map(|c| c.name.as_str())
        .collect();
    if !pk.is_empty() {
        parts.push(format!("PRIMARY KEY ({})", pk.join(", ")));
    }

    for col in &table.columns {
        if let Some(fk) = &col.references {
            parts.push(format!(
                "FOREIGN KEY ({}) REFERENCES {}({})",
                col.name, fk.table, fk.column
            ));
        }
    }

    let sql = format!(
        "CREATE TABLE {}.{} ({});",
        table.schema,
        table.name,
        parts.join(", ")
    );
    debug!("compiled CREATE TABLE for {}", table.full_name());
    sql
}

/// Compile a DROP TABLE statement.
pub fn drop_table(schema: &str, table: &str, behavior: DropBehavior) -> String {
    format!(
        "DROP TABLE {} {};",
        fragment::qualify(schema, table),
        behavior.sql()
    )
}

/// Compile the COMMENT ON TABLE statement, if the spec carries a description.
pub fn table_comment(table: &TableSpec) -> Option<String> {
    non_empty(&table.description).map(|description| {
        format!(
            "COMMENT ON TABLE {} IS {};",
            fragment::qualify(&table.schema, &table.name),
            fragment::literal(description)
        )
    })
}

/// Compile COMMENT ON COLUMN statements for every commented column, in
/// column order.
pub fn column_comments(table: &TableSpec) -> Vec<String> {
    table
        .columns
        .iter()
        .filter_map(|col| {
            non_empty(&col.comment).map(|comment| {
                format!(
                    "COMMENT ON COLUMN {}.{} IS {};",
                    fragment::qualify(&table.schema, &table.name),
                    fragment::ident(&col.name),
                    fragment::literal(comment)
                )
            })
        })
        .collect()
}

/// Compile the full creation script for a table: CREATE TABLE followed by
/// any comment statements. The caller is expected to run the whole script
/// inside a single transaction so a partial failure rolls back atomically.
pub fn create_table_script(table: &TableSpec) -> Vec<String> {
    let mut statements = vec![create_table(table)];
    statements.extend(table_comment(table));
    statements.extend(column_comments(table));
    statements
}

fn render_column(col: &ColumnSpec) -> String {
    let column_type = col.column_type();
    let mut sql = format!("{} {}", col.name, column_type.sql_name());

    if column_type.takes_length() {
        if let Some(len) = col.length {
            sql.push_str(&format!("({})", len));
        }
    }

    // A primary key is implicitly NOT NULL and unique; repeating the
    // clauses would be redundant.
    if col.is_required && !col.is_primary {
        sql.push_str(" NOT NULL");
    }
    if col.is_unique && !col.is_primary {
        sql.push_str(" UNIQUE");
    }

    if let Some(default) = col.default_value.as_deref() {
        if !column_type.is_serial() {
            sql.push_str(&format!(" DEFAULT {}", render_default(default)));
        }
    }

    sql
}

/// Render a default-value literal.
///
/// Numeric-looking strings are emitted bare and pre-quoted strings pass
/// through verbatim; everything else is wrapped as a string literal. This is
/// a best-effort heuristic, not type-aware formatting: a function-call
/// default such as `CURRENT_TIMESTAMP` gets quoted into a plain string,
/// which is semantically wrong - a known limitation, surfaced with a
/// warning rather than silently changed.
fn render_default(value: &str) -> String {
    if is_numeric_literal(value) {
        return value.to_string();
    }
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        return value.to_string();
    }
    warn!(
        "default value '{}' is neither numeric nor quoted; emitting it as a string literal",
        value
    );
    fragment::literal(value)
}

/// Whether a string looks like a bare numeric literal.
fn is_numeric_literal(value: &str) -> bool {
    let body = value.strip_prefix('-').unwrap_or(value);
    if body.is_empty() {
        return false;
    }
    let mut seen_dot = false;
    for c in body.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    body.chars().any(|c| c.is_ascii_digit())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
