//! PostgreSQL type mapping

use tracing::warn;

use crate::catalog::Catalog;
use crate::naming;

/// Map a normalized PostgreSQL type name to `(php_type_name, is_enum)`.
///
/// Raw names arrive both bare (`integer`) and catalog-qualified
/// (`pg_catalog.int4`), depending on how the query was written.
pub fn map(catalog: &Catalog, column_type: &str) -> (String, bool) {
    let name = match column_type {
        "serial" | "pg_catalog.serial4" | "bigserial" | "pg_catalog.serial8" | "smallserial"
        | "pg_catalog.serial2" => "int",

        "integer" | "int" | "int4" | "pg_catalog.int4" | "bigint" | "pg_catalog.int8"
        | "smallint" | "pg_catalog.int2" => "int",

        "float" | "double precision" | "pg_catalog.float8" | "real" | "pg_catalog.float4" => {
            "float"
        }

        // Exact decimal values stay strings; see the numeric policy in DESIGN.md
        "numeric" | "pg_catalog.numeric" | "money" => "string",

        "bool" | "boolean" | "pg_catalog.bool" => "bool",

        "json" | "jsonb" | "pg_catalog.json" | "pg_catalog.jsonb" => "array",

        "bytea" | "blob" | "pg_catalog.bytea" => "string",

        "date" | "pg_catalog.date" | "pg_catalog.time" | "pg_catalog.timetz" | "time"
        | "timetz" | "pg_catalog.timestamp" | "timestamp" | "pg_catalog.timestamptz"
        | "timestamptz" => "\\DateTimeImmutable",

        "text" | "pg_catalog.varchar" | "pg_catalog.bpchar" | "varchar" | "bpchar" | "char"
        | "citext" | "string" => "string",

        "uuid" => "Uuid",

        "inet" | "cidr" | "macaddr" => "string",

        "void" | "any" => "mixed",

        _ => return resolve_enum(catalog, column_type),
    };
    (name.to_string(), false)
}

/// Fall back to user-defined enum declarations across all non-system schemas
fn resolve_enum(catalog: &Catalog, column_type: &str) -> (String, bool) {
    for schema in catalog.user_schemas() {
        for decl in &schema.enums {
            if decl.name == column_type {
                let name = if schema.name == catalog.default_schema {
                    naming::type_name(&decl.name)
                } else {
                    format!(
                        "{}_{}",
                        naming::type_name(&schema.name),
                        naming::type_name(&decl.name)
                    )
                };
                return (name, true);
            }
        }
    }
    warn!(column_type, "unknown PostgreSQL type");
    ("mixed".to_string(), false)
}
