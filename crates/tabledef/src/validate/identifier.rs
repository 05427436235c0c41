//! Lexical rules for schema, table, and column names.
//!
//! Names that pass these rules match `^[A-Za-z][A-Za-z0-9_]*$` and can be
//! embedded in generated statements without quoting. The compiler relies on
//! this invariant.

/// Maximum table name length (PostgreSQL identifier limit: 63 bytes).
pub const MAX_TABLE_NAME_LENGTH: usize = 63;

/// Schema names that must not be created by users.
///
/// These are reserved for *newly created* schemas only; `public` remains a
/// legal containing schema for tables.
const RESERVED_SCHEMA_NAMES: &[&str] = &["public", "information_schema", "pg_catalog", "pg_toast"];

/// What the name names; selects kind-specific checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// A newly created schema: shape plus reserved-name check.
    Schema,
    /// A table: shape plus the 63-character engine limit.
    Table,
    /// A column: shape only.
    Column,
}

/// Validate a name against the lexical rules.
///
/// Returns the single error message on failure. Pure function over its
/// arguments.
pub fn validate_identifier(name: &str, kind: IdentifierKind) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name required".to_string());
    }

    if !has_identifier_shape(name) {
        return Err(
            "must start with a letter and contain only letters, digits, underscore".to_string(),
        );
    }

    match kind {
        IdentifierKind::Schema => {
            let lower = name.to_lowercase();
            if RESERVED_SCHEMA_NAMES.contains(&lower.as_str()) {
                return Err(format!("'{}' is a reserved schema name", name));
            }
        }
        IdentifierKind::Table => {
            if name.len() > MAX_TABLE_NAME_LENGTH {
                return Err("name too long".to_string());
            }
        }
        IdentifierKind::Column => {}
    }

    Ok(())
}

fn has_identifier_shape(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Shape tests
    // =========================================================================

    #[test]
    fn test_accepts_normal_names() {
        assert!(validate_identifier("users", IdentifierKind::Table).is_ok());
        assert!(validate_identifier("my_table", IdentifierKind::Table).is_ok());
        assert!(validate_identifier("Table123", IdentifierKind::Table).is_ok());
        assert!(validate_identifier("c", IdentifierKind::Column).is_ok());
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        for kind in [
            IdentifierKind::Schema,
            IdentifierKind::Table,
            IdentifierKind::Column,
        ] {
            let err = validate_identifier("", kind).unwrap_err();
            assert_eq!(err, "name required");
            let err = validate_identifier("   ", kind).unwrap_err();
            assert_eq!(err, "name required");
        }
    }

    #[test]
    fn test_rejects_leading_digit_or_underscore() {
        assert!(validate_identifier("1table", IdentifierKind::Table).is_err());
        assert!(validate_identifier("_table", IdentifierKind::Table).is_err());
    }

    #[test]
    fn test_rejects_special_characters() {
        let err = validate_identifier("my-table", IdentifierKind::Table).unwrap_err();
        assert!(err.contains("must start with a letter"));
        assert!(validate_identifier("my table", IdentifierKind::Column).is_err());
        assert!(validate_identifier("users;drop", IdentifierKind::Table).is_err());
        assert!(validate_identifier("caf\u{e9}", IdentifierKind::Column).is_err());
    }

    // =========================================================================
    // Kind-specific tests
    // =========================================================================

    #[test]
    fn test_schema_reserved_names() {
        for name in ["public", "information_schema", "pg_catalog", "pg_toast"] {
            let err = validate_identifier(name, IdentifierKind::Schema).unwrap_err();
            assert!(err.contains("reserved"), "{} should be reserved", name);
        }
        // Case-insensitive
        assert!(validate_identifier("PUBLIC", IdentifierKind::Schema).is_err());
        assert!(validate_identifier("Pg_Catalog", IdentifierKind::Schema).is_err());
    }

    #[test]
    fn test_reserved_names_allowed_for_other_kinds() {
        assert!(validate_identifier("public", IdentifierKind::Table).is_ok());
        assert!(validate_identifier("pg_catalog", IdentifierKind::Column).is_ok());
    }

    #[test]
    fn test_table_length_limit() {
        let max_name = "a".repeat(MAX_TABLE_NAME_LENGTH);
        assert!(validate_identifier(&max_name, IdentifierKind::Table).is_ok());

        let long_name = "a".repeat(MAX_TABLE_NAME_LENGTH + 1);
        let err = validate_identifier(&long_name, IdentifierKind::Table).unwrap_err();
        assert_eq!(err, "name too long");
    }

    #[test]
    fn test_no_length_limit_for_schema_and_column() {
        let long_name = "a".repeat(MAX_TABLE_NAME_LENGTH + 1);
        assert!(validate_identifier(&long_name, IdentifierKind::Schema).is_ok());
        assert!(validate_identifier(&long_name, IdentifierKind::Column).is_ok());
    }
}
