//! Identifier transformation
//!
//! Deterministic snake_case to TitleCase / camelCase conversion used for
//! everything the generator names: classes, members, method arguments, and
//! the positional fallbacks for unnamed parameters and columns.

use crate::catalog::Column;

/// Convert a snake_case identifier to a TitleCase type name
pub fn type_name(s: &str) -> String {
    s.split('_').map(capitalize).collect()
}

/// Convert a snake_case identifier to a camelCase member name.
///
/// Same as [`type_name`] with the first character lowered.
pub fn member_name(s: &str) -> String {
    lower_first(&type_name(s))
}

/// Convert a snake_case identifier to a camelCase argument name.
///
/// The whole first segment is lowercased, later segments are capitalized.
pub fn arg_name(s: &str) -> String {
    let mut out = String::new();
    for (i, part) in s.split('_').enumerate() {
        if i == 0 {
            out.push_str(&part.to_lowercase());
        } else {
            out.push_str(&capitalize(part));
        }
    }
    out
}

/// Member name for a query parameter: its camelCased column name, or the
/// `dollar_<n>` positional fallback when unnamed (kept verbatim).
pub fn param_name(col: &Column, number: i32) -> String {
    if col.name.is_empty() {
        format!("dollar_{}", number)
    } else {
        arg_name(&col.name)
    }
}

/// Member name for a result column: its camelCased name, or the
/// `column_<pos+1>` positional fallback when unnamed (kept verbatim).
pub fn column_name(col: &Column, pos: i32) -> String {
    if col.name.is_empty() {
        format!("column_{}", pos + 1)
    } else {
        member_name(&col.name)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}
