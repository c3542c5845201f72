//! Column type mapping
//!
//! Maps source-database column types to PHP types. Each supported engine has
//! its own submodule with a single switch over normalized raw type names;
//! nullability and the array flag pass through from the column unchanged.

use crate::catalog::{Catalog, Column, Engine};

mod mysql;
mod postgres;
mod sqlite;

/// A resolved PHP type for one column or parameter.
///
/// Compared by value: structural model de-duplication depends on two
/// independently constructed `PhpType`s for the same column being equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhpType {
    /// PHP type name as it appears in declarations, e.g. `int` or `Uuid`
    pub name: String,
    /// Resolved from a user-defined enum declaration in the catalog
    pub is_enum: bool,
    pub is_array: bool,
    pub is_null: bool,
    /// Raw source type tag, kept for binding/extraction decisions
    pub data_type: String,
    pub engine: Engine,
}

impl PhpType {
    /// Render the PHP type declaration.
    ///
    /// Arrays collapse to `array` (PHP has no generic array types in
    /// declarations) and nullable types get a `?` prefix, except `mixed`
    /// which already admits null.
    pub fn declaration(&self) -> String {
        if self.is_array {
            "array".to_string()
        } else if self.is_null && self.name != "mixed" {
            format!("?{}", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Date or time without a zone: formatted `Y-m-d H:i:s` when bound
    pub fn is_time(&self) -> bool {
        self.name == "\\DateTimeImmutable" && !self.is_instant()
    }

    /// Instant-like (timestamp with time zone): bound with a zone offset
    pub fn is_instant(&self) -> bool {
        self.name == "\\DateTimeImmutable"
            && matches!(
                self.data_type.as_str(),
                "timestamptz" | "pg_catalog.timestamptz" | "pg_catalog.timetz"
            )
    }

    pub fn is_date_time(&self) -> bool {
        self.name == "\\DateTimeImmutable"
    }

    /// JSON-typed: bound via `json_encode`, extracted via `json_decode`
    pub fn is_json(&self) -> bool {
        self.name == "array"
    }

    pub fn is_uuid(&self) -> bool {
        self.name == "Uuid"
    }

    /// PHP scalar types need no conversion when hydrated from a row
    pub fn is_scalar(&self) -> bool {
        matches!(self.name.as_str(), "int" | "float" | "string" | "bool" | "mixed")
    }
}

/// Map one column to its PHP type for the given engine
pub fn map_column(catalog: &Catalog, engine: Engine, col: &Column) -> PhpType {
    let data_type = col.type_ref.data_type();
    let (name, is_enum) = match engine {
        Engine::Postgresql => postgres::map(catalog, &data_type),
        Engine::Mysql => mysql::map(&data_type),
        Engine::Sqlite => sqlite::map(&data_type),
    };
    PhpType {
        name,
        is_enum,
        is_array: col.is_array,
        is_null: !col.not_null,
        data_type,
        engine,
    }
}
