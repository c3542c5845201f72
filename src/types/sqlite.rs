//! SQLite type mapping

use tracing::warn;

/// Map a normalized SQLite type name to `(php_type_name, is_enum)`.
///
/// SQLite declared types are case-insensitive, so the raw name is lowercased
/// before the switch.
pub fn map(column_type: &str) -> (String, bool) {
    let lowered = column_type.to_lowercase();
    let name = match lowered.as_str() {
        "text" | "varchar" | "char" | "clob" => "string",

        "integer" | "int" | "bigint" | "smallint" | "tinyint" => "int",

        "real" | "double" | "float" => "float",

        // Exact decimal values stay strings; see the numeric policy in DESIGN.md
        "numeric" | "decimal" => "string",

        "blob" => "string",

        "boolean" | "bool" => "bool",

        "date" | "datetime" | "timestamp" => "\\DateTimeImmutable",

        "json" => "array",

        "any" => "mixed",

        _ => {
            warn!(column_type, "unknown SQLite type");
            "mixed"
        }
    };
    (name.to_string(), false)
}
