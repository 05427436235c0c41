//! Spec types describing desired database objects.
//!
//! A spec is a transient, in-memory description of a schema, table, or
//! column, independent of any live catalog. Callers build one per request
//! (or load it from a YAML/JSON file), run it through the rule engines in
//! [`validate`](crate::validate), and hand the validated spec to the
//! compiler in [`compile`](crate::compile). The core holds no persistent
//! state.

mod column_type;

pub use column_type::ColumnType;

use crate::error::{DdlError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Foreign-key target of a column.
///
/// Purely structural - no existence check is made against a live catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyRef {
    /// Referenced table name.
    pub table: String,

    /// Referenced column name.
    pub column: String,
}

/// Describes one column of a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name.
    pub name: String,

    /// Type name, compared case-insensitively (e.g. "VARCHAR", "int4").
    pub sql_type: String,

    /// Length for length-bearing types (VARCHAR/CHAR).
    #[serde(default)]
    pub length: Option<u32>,

    /// Primary-key flag. Implies NOT NULL and unique regardless of the
    /// other two flags.
    #[serde(default)]
    pub is_primary: bool,

    /// NOT NULL flag.
    #[serde(default)]
    pub is_required: bool,

    /// UNIQUE flag.
    #[serde(default)]
    pub is_unique: bool,

    /// Default value literal. Semantics depend on `sql_type`: numeric
    /// literals are emitted bare, quoted strings pass through, and
    /// SERIAL-family columns never receive a default.
    #[serde(default)]
    pub default_value: Option<String>,

    /// Foreign-key target.
    #[serde(default)]
    pub references: Option<ForeignKeyRef>,

    /// Column comment, rendered as a COMMENT ON COLUMN statement.
    #[serde(default)]
    pub comment: Option<String>,
}

impl ColumnSpec {
    /// Resolve the type name into the closed type vocabulary.
    pub fn column_type(&self) -> ColumnType {
        ColumnType::parse(&self.sql_type)
    }
}

/// Describes one table.
///
/// Column order is significant: it determines column order in the generated
/// statement, and rule-engine error messages reference 1-based positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    /// Table name.
    pub name: String,

    /// Containing schema (default: "public").
    #[serde(default = "default_schema")]
    pub schema: String,

    /// Table comment, rendered as a COMMENT ON TABLE statement.
    #[serde(default)]
    pub description: Option<String>,

    /// Ordered column definitions.
    pub columns: Vec<ColumnSpec>,
}

fn default_schema() -> String {
    "public".to_string()
}

impl TableSpec {
    /// Get the qualified table name.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }

    /// Columns flagged as primary key, in column order.
    pub fn primary_key_columns(&self) -> Vec<&ColumnSpec> {
        self.columns.iter().filter(|c| c.is_primary).collect()
    }

    /// Parse a table spec from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a table spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table spec from a file, chosen by extension (.yaml/.yml/.json).
    ///
    /// Loading does not validate: run the spec through
    /// [`validate_table`](crate::validate::validate_table) before compiling.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let format = spec_format(path.as_ref())?;
        let content = read_spec_file(path.as_ref())?;
        match format {
            SpecFormat::Yaml => Self::from_yaml(&content),
            SpecFormat::Json => Self::from_json(&content),
        }
    }
}

/// Describes one schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSpec {
    /// Schema name.
    pub name: String,

    /// Schema comment, rendered as a COMMENT ON SCHEMA statement.
    #[serde(default)]
    pub description: Option<String>,
}

impl SchemaSpec {
    /// Parse a schema spec from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a schema spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a schema spec from a file, chosen by extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let format = spec_format(path.as_ref())?;
        let content = read_spec_file(path.as_ref())?;
        match format {
            SpecFormat::Yaml => Self::from_yaml(&content),
            SpecFormat::Json => Self::from_json(&content),
        }
    }
}

enum SpecFormat {
    Yaml,
    Json,
}

fn spec_format(path: &Path) -> Result<SpecFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(SpecFormat::Yaml),
        Some("json") => Ok(SpecFormat::Json),
        other => Err(DdlError::Spec(format!(
            "unsupported spec file extension {:?} (expected .yaml, .yml, or .json)",
            other.unwrap_or("")
        ))),
    }
}

fn read_spec_file(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}
