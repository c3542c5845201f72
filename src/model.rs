//! Model synthesis
//!
//! Builds one canonical model class per catalog table, plus the generic
//! columns-to-model builder shared with query parameter and row synthesis.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::catalog::{Catalog, Column, Engine, Identifier};
use crate::naming;
use crate::types::{map_column, PhpType};

/// A single typed field of a generated model class
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Position in the originating parameter/column list
    pub id: i32,
    /// Member name after naming transformation
    pub name: String,
    /// Source column name, used to match override directives
    pub column_name: String,
    pub php_type: PhpType,
    /// Default value literal from an override directive, if any
    pub default: Option<String>,
    pub comment: String,
}

/// A generated model class: table-backed or synthesized for a query shape
#[derive(Debug, Clone, PartialEq)]
pub struct ModelClass {
    /// Owning table; `None` for synthesized parameter/row shapes
    pub table: Option<Identifier>,
    pub name: String,
    pub fields: Vec<Field>,
    pub comment: String,
}

/// Column paired with its stable id for model building
#[derive(Debug, Clone)]
pub struct IdColumn<'a> {
    pub id: i32,
    pub column: &'a Column,
}

/// Build one model per table across all non-system schemas, sorted by name.
///
/// Tables in the default schema keep their bare name; other tables are
/// qualified as `schema_table` before naming.
pub fn build_table_models(catalog: &Catalog, engine: Engine) -> Vec<ModelClass> {
    let mut models = Vec::new();
    for schema in catalog.user_schemas() {
        for table in &schema.tables {
            let table_name = if schema.name == catalog.default_schema {
                table.rel.name.clone()
            } else {
                format!("{}_{}", schema.name, table.rel.name)
            };
            let mut model = ModelClass {
                table: Some(Identifier {
                    schema: schema.name.clone(),
                    name: table.rel.name.clone(),
                }),
                name: naming::type_name(&table_name),
                fields: Vec::new(),
                comment: table.comment.clone(),
            };
            for (i, column) in table.columns.iter().enumerate() {
                model.fields.push(Field {
                    id: i as i32,
                    name: naming::member_name(&column.name),
                    column_name: column.name.clone(),
                    php_type: map_column(catalog, engine, column),
                    default: None,
                    comment: column.comment.clone(),
                });
            }
            debug!(model = %model.name, fields = model.fields.len(), "built table model");
            models.push(model);
        }
    }
    models.sort_by(|a, b| a.name.cmp(&b.name));
    models
}

/// Build a model from an ordered column list in a single left-to-right pass.
///
/// Columns repeating an already-seen id are dropped entirely. When two
/// different ids compute the same member name, later occurrences get a
/// `_<n>` suffix; earlier fields are never renamed.
pub fn columns_to_model(
    catalog: &Catalog,
    engine: Engine,
    name: &str,
    columns: &[IdColumn],
    namer: impl Fn(&Column, i32) -> String,
) -> ModelClass {
    let mut model = ModelClass {
        table: None,
        name: name.to_string(),
        fields: Vec::new(),
        comment: String::new(),
    };
    let mut id_seen: HashSet<i32> = HashSet::new();
    let mut name_seen: HashMap<String, usize> = HashMap::new();
    for c in columns {
        if !id_seen.insert(c.id) {
            continue;
        }
        let base = namer(c.column, c.id);
        let occurrences = name_seen.entry(base.clone()).or_insert(0);
        let field_name = if *occurrences > 0 {
            format!("{}_{}", base, *occurrences + 1)
        } else {
            base.clone()
        };
        *occurrences += 1;
        model.fields.push(Field {
            id: c.id,
            name: field_name,
            column_name: c.column.name.clone(),
            php_type: map_column(catalog, engine, c.column),
            default: None,
            comment: c.column.comment.clone(),
        });
    }
    model
}
