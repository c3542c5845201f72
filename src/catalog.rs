//! Resolved catalog and query metadata
//!
//! These types form the read-only input contract: the plugin host hands the
//! generator an already-resolved catalog (schemas, tables, columns, enum
//! declarations) plus per-query metadata. Nothing here is ever mutated.

use serde::Deserialize;

/// Schemas that never contribute generated models.
pub const SYSTEM_SCHEMAS: [&str; 2] = ["pg_catalog", "information_schema"];

/// Source database engine, fixed for the whole generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Postgresql,
    Mysql,
    Sqlite,
}

/// A complete generation request from the plugin host
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub catalog: Catalog,
    #[serde(default)]
    pub queries: Vec<QueryMeta>,
    pub settings: Settings,
    /// Free-form plugin options, parsed by [`crate::config::PluginConfig`]
    #[serde(default)]
    pub plugin_options: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub engine: Engine,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub default_schema: String,
    pub schemas: Vec<Schema>,
}

impl Catalog {
    /// Iterate schemas that participate in generation
    pub fn user_schemas(&self) -> impl Iterator<Item = &Schema> {
        self.schemas
            .iter()
            .filter(|s| !SYSTEM_SCHEMAS.contains(&s.name.as_str()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    pub name: String,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub enums: Vec<EnumDecl>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    pub rel: Identifier,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub comment: String,
}

/// A user-defined enum type declared in the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct EnumDecl {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Schema-qualified relation name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identifier {
    #[serde(default)]
    pub schema: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub not_null: bool,
    #[serde(default)]
    pub is_array: bool,
    /// Source table of a query result column, when the resolver knows it
    #[serde(default)]
    pub table: Option<Identifier>,
    #[serde(default)]
    pub comment: String,
}

/// Reference to a declared SQL type, possibly schema-qualified
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeRef {
    #[serde(default)]
    pub schema: String,
    pub name: String,
}

impl TypeRef {
    /// Raw type tag as engine mappers see it: `schema.name` when qualified
    pub fn data_type(&self) -> String {
        if self.schema.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.schema, self.name)
        }
    }
}

/// Metadata for a single named query
#[derive(Debug, Clone, Deserialize)]
pub struct QueryMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cmd: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub comments: Vec<String>,
    #[serde(default)]
    pub params: Vec<Parameter>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    /// 1-based positional number
    pub number: i32,
    pub column: Column,
}

/// Query command kinds
pub const CMD_ONE: &str = ":one";
pub const CMD_MANY: &str = ":many";
pub const CMD_EXEC: &str = ":exec";
pub const CMD_EXEC_ROWS: &str = ":execrows";
pub const CMD_EXEC_LAST_ID: &str = ":execlastid";
pub const CMD_COPY_FROM: &str = ":copyfrom";

/// Compare two source-table identifiers under the default-schema rule.
///
/// A table reference with an empty schema belongs to the default schema.
/// Synthesized shapes carry no table at all; they only match columns that
/// are likewise unattached to a table.
pub fn same_table(
    column_table: Option<&Identifier>,
    model_table: Option<&Identifier>,
    default_schema: &str,
) -> bool {
    match (column_table, model_table) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            let qualify = |id: &Identifier| {
                if id.schema.is_empty() {
                    default_schema.to_string()
                } else {
                    id.schema.clone()
                }
            };
            qualify(a) == qualify(b) && a.name == b.name
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(schema: &str, name: &str) -> Identifier {
        Identifier {
            schema: schema.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_data_type_unqualified() {
        let t = TypeRef {
            schema: String::new(),
            name: "integer".to_string(),
        };
        assert_eq!(t.data_type(), "integer");
    }

    #[test]
    fn test_data_type_qualified() {
        let t = TypeRef {
            schema: "pg_catalog".to_string(),
            name: "int4".to_string(),
        };
        assert_eq!(t.data_type(), "pg_catalog.int4");
    }

    #[test]
    fn test_same_table_empty_schema_uses_default() {
        let a = ident("", "authors");
        let b = ident("public", "authors");
        assert!(same_table(Some(&a), Some(&b), "public"));
        assert!(!same_table(Some(&a), Some(&b), "other"));
    }

    #[test]
    fn test_same_table_different_relation() {
        let a = ident("public", "authors");
        let b = ident("public", "books");
        assert!(!same_table(Some(&a), Some(&b), "public"));
    }

    #[test]
    fn test_same_table_missing_sides() {
        let a = ident("public", "authors");
        assert!(!same_table(Some(&a), None, "public"));
        assert!(!same_table(None, Some(&a), "public"));
        assert!(same_table(None, None, "public"));
    }

    #[test]
    fn test_user_schemas_skip_system() {
        let catalog = Catalog {
            default_schema: "public".to_string(),
            schemas: vec![
                Schema {
                    name: "public".to_string(),
                    tables: vec![],
                    enums: vec![],
                },
                Schema {
                    name: "pg_catalog".to_string(),
                    tables: vec![],
                    enums: vec![],
                },
                Schema {
                    name: "information_schema".to_string(),
                    tables: vec![],
                    enums: vec![],
                },
            ],
        };
        let names: Vec<_> = catalog.user_schemas().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["public"]);
    }

    #[test]
    fn test_request_deserializes() {
        let raw = r#"{
            "catalog": {
                "default_schema": "public",
                "schemas": [{
                    "name": "public",
                    "tables": [{
                        "rel": {"name": "authors"},
                        "columns": [
                            {"name": "id", "type": {"name": "integer"}, "not_null": true}
                        ]
                    }],
                    "enums": [{"name": "status", "values": ["on", "off"]}]
                }]
            },
            "queries": [{
                "name": "GetAuthor",
                "cmd": ":one",
                "text": "SELECT id FROM authors WHERE id = $1",
                "filename": "query.sql",
                "params": [{"number": 1, "column": {"name": "id", "type": {"name": "integer"}, "not_null": true}}],
                "columns": [{"name": "id", "type": {"name": "integer"}, "not_null": true, "table": {"schema": "public", "name": "authors"}}]
            }],
            "settings": {"engine": "postgresql"}
        }"#;
        let req: Request = serde_json::from_str(raw).expect("valid request");
        assert_eq!(req.settings.engine, Engine::Postgresql);
        assert_eq!(req.catalog.schemas[0].tables[0].rel.name, "authors");
        assert_eq!(req.queries[0].params[0].number, 1);
        assert!(req.queries[0].columns[0].not_null);
    }
}
