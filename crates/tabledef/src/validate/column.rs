//! Per-column rule engine.

use super::identifier::{validate_identifier, IdentifierKind};
use super::Verdict;
use crate::spec::{ColumnSpec, ColumnType};

/// Length bounds for VARCHAR/CHAR.
const MIN_CHAR_LENGTH: u32 = 1;
const MAX_CHAR_LENGTH: u32 = 65_535;

/// Validate a single column, collecting every violation.
///
/// Does not short-circuit: one call surfaces all problems with the column.
/// Types outside the known vocabulary are accepted structurally; length and
/// default checks do not apply to them.
pub fn validate_column(col: &ColumnSpec) -> Verdict {
    let mut verdict = Verdict::ok();

    if let Err(e) = validate_identifier(&col.name, IdentifierKind::Column) {
        verdict.push(e);
    }

    let column_type = col.column_type();
    check_length(col, &column_type, &mut verdict);
    check_default(col, &column_type, &mut verdict);
    check_references(col, &mut verdict);

    verdict
}

fn check_length(col: &ColumnSpec, column_type: &ColumnType, verdict: &mut Verdict) {
    match column_type {
        ColumnType::Varchar => match col.length {
            None => verdict.push(format!(
                "VARCHAR requires a length between {} and {}",
                MIN_CHAR_LENGTH, MAX_CHAR_LENGTH
            )),
            Some(len) if !(MIN_CHAR_LENGTH..=MAX_CHAR_LENGTH).contains(&len) => {
                verdict.push(format!(
                    "VARCHAR length must be between {} and {} (got {})",
                    MIN_CHAR_LENGTH, MAX_CHAR_LENGTH, len
                ));
            }
            Some(_) => {}
        },
        // CHAR without a length falls back to the engine default of 1.
        ColumnType::Char => {
            if let Some(len) = col.length {
                if !(MIN_CHAR_LENGTH..=MAX_CHAR_LENGTH).contains(&len) {
                    verdict.push(format!(
                        "CHAR length must be between {} and {} (got {})",
                        MIN_CHAR_LENGTH, MAX_CHAR_LENGTH, len
                    ));
                }
            }
        }
        _ => {}
    }
}

fn check_default(col: &ColumnSpec, column_type: &ColumnType, verdict: &mut Verdict) {
    let Some(default) = col.default_value.as_deref() else {
        return;
    };

    match column_type {
        ColumnType::Varchar => {
            if !is_quoted_literal(default) {
                verdict.push(
                    "default value for VARCHAR must be wrapped in single quotes".to_string(),
                );
            }
        }
        ColumnType::Boolean => {
            if !default.eq_ignore_ascii_case("true") && !default.eq_ignore_ascii_case("false") {
                verdict.push(format!(
                    "default value '{}' is not a valid boolean literal (expected true or false)",
                    default
                ));
            }
        }
        t if t.is_integer() => {
            if default.parse::<i64>().is_err() {
                verdict.push(format!(
                    "default value '{}' is not a valid integer literal",
                    default
                ));
            }
        }
        _ => {}
    }
}

fn check_references(col: &ColumnSpec, verdict: &mut Verdict) {
    let Some(fk) = col.references.as_ref() else {
        return;
    };

    if let Err(e) = validate_identifier(&fk.table, IdentifierKind::Column) {
        verdict.push(format!("referenced table {}", e));
    }
    if let Err(e) = validate_identifier(&fk.column, IdentifierKind::Column) {
        verdict.push(format!("referenced column {}", e));
    }
}

/// Whether a literal is wrapped in single quotes ('...').
fn is_quoted_literal(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ForeignKeyRef;

    fn make_column(name: &str, sql_type: &str) -> ColumnSpec {
        ColumnSpec {
            name: name.to_string(),
            sql_type: sql_type.to_string(),
            length: None,
            is_primary: false,
            is_required: false,
            is_unique: false,
            default_value: None,
            references: None,
            comment: None,
        }
    }

    #[test]
    fn test_valid_integer_column() {
        let verdict = validate_column(&make_column("id", "INTEGER"));
        assert!(verdict.valid);
        assert!(verdict.errors.is_empty());
    }

    #[test]
    fn test_bad_name_reported() {
        let verdict = validate_column(&make_column("1st", "INTEGER"));
        assert!(!verdict.valid);
        assert!(verdict.errors[0].contains("must start with a letter"));
    }

    // =========================================================================
    // Length checks
    // =========================================================================

    #[test]
    fn test_varchar_requires_length() {
        let verdict = validate_column(&make_column("title", "VARCHAR"));
        assert!(!verdict.valid);
        assert!(verdict.errors[0].contains("length"));
    }

    #[test]
    fn test_varchar_length_bounds() {
        let mut col = make_column("title", "varchar");
        col.length = Some(0);
        assert!(!validate_column(&col).valid);

        col.length = Some(1);
        assert!(validate_column(&col).valid);

        col.length = Some(65_535);
        assert!(validate_column(&col).valid);

        col.length = Some(65_536);
        let verdict = validate_column(&col);
        assert!(!verdict.valid);
        assert!(verdict.errors[0].contains("length"));
    }

    #[test]
    fn test_char_length_optional_but_bounded() {
        let mut col = make_column("code", "CHAR");
        assert!(validate_column(&col).valid);

        col.length = Some(10);
        assert!(validate_column(&col).valid);

        col.length = Some(0);
        assert!(!validate_column(&col).valid);
    }

    #[test]
    fn test_length_ignored_for_other_types() {
        let mut col = make_column("n", "INTEGER");
        col.length = Some(10);
        assert!(validate_column(&col).valid);
    }

    // =========================================================================
    // Default checks
    // =========================================================================

    #[test]
    fn test_varchar_default_must_be_quoted() {
        let mut col = make_column("status", "VARCHAR");
        col.length = Some(20);
        col.default_value = Some("draft".to_string());
        let verdict = validate_column(&col);
        assert!(!verdict.valid);
        assert!(verdict.errors[0].contains("single quotes"));

        col.default_value = Some("'draft'".to_string());
        assert!(validate_column(&col).valid);
    }

    #[test]
    fn test_integer_default_must_parse() {
        let mut col = make_column("count", "INTEGER");
        col.default_value = Some("0".to_string());
        assert!(validate_column(&col).valid);

        col.default_value = Some("-42".to_string());
        assert!(validate_column(&col).valid);

        col.default_value = Some("zero".to_string());
        let verdict = validate_column(&col);
        assert!(!verdict.valid);
        assert!(verdict.errors[0].contains("integer"));
    }

    #[test]
    fn test_boolean_default() {
        let mut col = make_column("active", "BOOLEAN");
        col.default_value = Some("true".to_string());
        assert!(validate_column(&col).valid);

        col.default_value = Some("FALSE".to_string());
        assert!(validate_column(&col).valid);

        col.default_value = Some("yes".to_string());
        assert!(!validate_column(&col).valid);
    }

    #[test]
    fn test_unknown_type_accepted_without_checks() {
        let mut col = make_column("doc", "tsvector");
        col.length = Some(99);
        col.default_value = Some("anything goes".to_string());
        assert!(validate_column(&col).valid);
    }

    // =========================================================================
    // Reference checks
    // =========================================================================

    #[test]
    fn test_reference_names_shape_checked() {
        let mut col = make_column("article_id", "INTEGER");
        col.references = Some(ForeignKeyRef {
            table: "articles".to_string(),
            column: "id".to_string(),
        });
        assert!(validate_column(&col).valid);

        col.references = Some(ForeignKeyRef {
            table: "".to_string(),
            column: "1bad".to_string(),
        });
        let verdict = validate_column(&col);
        assert_eq!(verdict.errors.len(), 2);
        assert!(verdict.errors[0].contains("referenced table"));
        assert!(verdict.errors[1].contains("referenced column"));
    }

    // =========================================================================
    // Accumulation
    // =========================================================================

    #[test]
    fn test_all_violations_collected() {
        let mut col = make_column("", "VARCHAR");
        col.default_value = Some("bare".to_string());
        let verdict = validate_column(&col);
        // Bad name, missing length, unquoted default - all in one call.
        assert_eq!(verdict.errors.len(), 3);
    }
}
