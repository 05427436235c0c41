//! Statement fragments: identifier quoting and literal quoting.
//!
//! This module is the only sanctioned path for embedding names and values in
//! generated statements, so the identifier-vs-literal distinction stays
//! visible at every call site. Identifiers cannot be passed as parameters in
//! prepared statements - only data values can - which is why quoting has to
//! happen at generation time at all.

/// Quote an identifier for PostgreSQL.
///
/// Doubles embedded double quotes and wraps in double quotes, preserving
/// case and making the name safe to embed regardless of content.
pub fn ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Qualify a table name with its schema, both quoted.
pub fn qualify(schema: &str, table: &str) -> String {
    format!("{}.{}", ident(schema), ident(table))
}

/// Quote a string value as a SQL literal.
///
/// Doubles embedded single quotes. Sufficient for comments and simple
/// defaults; executing callers that accept untrusted descriptions should
/// prefer binding them as parameters over interpolation.
pub fn literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
