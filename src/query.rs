//! Query synthesis
//!
//! For each named query this derives the parameter-binding model, resolves
//! the result shape (scalar, reused model, or a freshly synthesized row
//! model), and produces the deterministic, method-name-sorted query list.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::{same_table, QueryMeta, Request, CMD_COPY_FROM};
use crate::error::PhpgenError;
use crate::model::{columns_to_model, IdColumn, ModelClass};
use crate::naming;
use crate::types::{map_column, PhpType};

/// Parameter shape of one query; always synthesized, never de-duplicated
#[derive(Debug, Clone)]
pub struct Params {
    pub model: ModelClass,
}

impl Params {
    pub fn is_empty(&self) -> bool {
        self.model.fields.is_empty()
    }
}

/// Result shape of one query
#[derive(Debug, Clone)]
pub enum ReturnValue {
    /// No result columns
    None,
    /// Exactly one result column
    Scalar(PhpType),
    /// Two or more result columns.
    ///
    /// `emit` marks a freshly synthesized row model; reused table models are
    /// referenced without emitting a second definition.
    Model { model: ModelClass, emit: bool },
}

/// One fully derived query, ready for rendering
#[derive(Debug, Clone)]
pub struct Query {
    pub class_name: String,
    pub cmd: String,
    pub comments: Vec<String>,
    pub method_name: String,
    pub field_name: String,
    pub constant_name: String,
    pub sql: String,
    pub source_name: String,
    pub ret: ReturnValue,
    pub params: Params,
}

/// Inline parameter override from a query's leading comments
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParamOverride {
    type_name: String,
    default: Option<String>,
}

const OVERRIDE_TOKEN: &str = "@phpgen-param";

/// Parse `@phpgen-param <type> <name>[=<default>]` directives.
///
/// The grammar is deliberately loose: anything that does not fit is skipped
/// without a warning.
fn parse_param_overrides(comments: &[String]) -> HashMap<String, ParamOverride> {
    let mut out = HashMap::new();
    for comment in comments {
        let line = comment.trim();
        if !line.starts_with(OVERRIDE_TOKEN) {
            continue;
        }
        let mut tokens = line.split_whitespace();
        tokens.next();
        let (Some(type_name), Some(name_token)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        let (name, default) = match name_token.split_once('=') {
            Some((name, default)) => (name, Some(default.trim().to_string())),
            None => (name_token, None),
        };
        out.insert(
            name.to_string(),
            ParamOverride {
                type_name: type_name.to_string(),
                default,
            },
        );
    }
    out
}

/// Derive all queries plus any row models that need their own emitted class.
///
/// Freshly synthesized row models join the match pool, so later queries with
/// the same shape reuse them instead of emitting another copy.
pub fn build_queries(
    req: &Request,
    table_models: &[ModelClass],
) -> Result<(Vec<Query>, Vec<ModelClass>), PhpgenError> {
    let mut queries = Vec::with_capacity(req.queries.len());
    let mut emitted: Vec<ModelClass> = Vec::new();

    for query in &req.queries {
        if query.name.is_empty() || query.cmd.is_empty() {
            continue;
        }
        if query.cmd == CMD_COPY_FROM {
            return Err(PhpgenError::UnsupportedCommand {
                query: query.name.clone(),
                cmd: query.cmd.clone(),
            });
        }

        let class_name = naming::type_name(&query.name);
        let method_name = naming::member_name(&query.name);

        let params = build_params(req, query, &class_name);
        let ret = resolve_return(req, query, &class_name, table_models, &mut emitted);

        debug!(query = %query.name, method = %method_name, "built query");
        queries.push(Query {
            class_name,
            cmd: query.cmd.clone(),
            comments: query.comments.clone(),
            method_name: method_name.clone(),
            field_name: format!("{}Stmt", method_name),
            constant_name: method_name,
            sql: query.text.clone(),
            source_name: query.filename.clone(),
            ret,
            params,
        });
    }

    queries.sort_by(|a, b| a.method_name.cmp(&b.method_name));
    Ok((queries, emitted))
}

fn build_params(req: &Request, query: &QueryMeta, class_name: &str) -> Params {
    let columns: Vec<IdColumn> = query
        .params
        .iter()
        .map(|p| IdColumn {
            id: p.number,
            column: &p.column,
        })
        .collect();
    let mut model = columns_to_model(
        &req.catalog,
        req.settings.engine,
        &format!("{}Bindings", class_name),
        &columns,
        naming::param_name,
    );

    let overrides = parse_param_overrides(&query.comments);
    if !overrides.is_empty() {
        for field in &mut model.fields {
            if let Some(o) = overrides.get(&field.column_name) {
                field.php_type.name = o.type_name.clone();
                field.php_type.is_enum = false;
                field.default = o.default.clone();
            }
        }
    }

    Params { model }
}

fn resolve_return(
    req: &Request,
    query: &QueryMeta,
    class_name: &str,
    table_models: &[ModelClass],
    emitted: &mut Vec<ModelClass>,
) -> ReturnValue {
    let catalog = &req.catalog;
    let engine = req.settings.engine;

    match query.columns.len() {
        0 => ReturnValue::None,
        1 => ReturnValue::Scalar(map_column(catalog, engine, &query.columns[0])),
        _ => {
            // First structural match wins, table models before row models.
            let existing = table_models.iter().chain(emitted.iter()).find(|model| {
                if model.fields.len() != query.columns.len() {
                    return false;
                }
                model.fields.iter().zip(query.columns.iter().enumerate()).all(
                    |(field, (i, column))| {
                        field.name == naming::column_name(column, i as i32)
                            && field.php_type == map_column(catalog, engine, column)
                            && same_table(
                                column.table.as_ref(),
                                model.table.as_ref(),
                                &catalog.default_schema,
                            )
                    },
                )
            });

            if let Some(model) = existing {
                debug!(query = %query.name, model = %model.name, "reusing model for result shape");
                return ReturnValue::Model {
                    model: model.clone(),
                    emit: false,
                };
            }

            let columns: Vec<IdColumn> = query
                .columns
                .iter()
                .enumerate()
                .map(|(i, column)| IdColumn {
                    id: i as i32,
                    column,
                })
                .collect();
            let model = columns_to_model(
                catalog,
                engine,
                &format!("{}Row", class_name),
                &columns,
                naming::column_name,
            );
            emitted.push(model.clone());
            ReturnValue::Model { model, emit: true }
        }
    }
}
