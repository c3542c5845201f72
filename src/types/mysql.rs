//! MySQL type mapping

use tracing::warn;

/// Map a normalized MySQL type name to `(php_type_name, is_enum)`.
///
/// MySQL enum columns are plain strings: the catalog carries no declaration
/// to resolve a class name from, so `is_enum` is always false here.
pub fn map(column_type: &str) -> (String, bool) {
    let name = match column_type {
        "varchar" | "text" | "char" | "tinytext" | "mediumtext" | "longtext" => "string",

        "int" | "integer" | "smallint" | "mediumint" | "bigint" | "year" => "int",

        "blob" | "binary" | "varbinary" | "tinyblob" | "mediumblob" | "longblob" => "string",

        "double" | "double precision" | "real" | "float" => "float",

        // Exact decimal values stay strings; see the numeric policy in DESIGN.md
        "decimal" | "dec" | "fixed" | "numeric" => "string",

        "enum" | "set" => "string",

        "date" | "datetime" | "time" | "timestamp" => "\\DateTimeImmutable",

        // tinyint is the conventional MySQL boolean
        "boolean" | "bool" | "tinyint" => "bool",

        "json" => "array",

        "any" => "mixed",

        _ => {
            warn!(column_type, "unknown MySQL type");
            "mixed"
        }
    };
    (name.to_string(), false)
}
