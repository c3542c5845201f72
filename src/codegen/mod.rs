//! PHP code generation
//!
//! Assembles synthesized models and queries into template contexts and
//! renders the final source files: one class per model, one string-backed
//! enum per catalog enum declaration, a query interface, and its Doctrine
//! DBAL implementation.

use std::collections::{BTreeMap, HashMap};

use minijinja::Environment;
use tracing::{debug, info};

use crate::catalog::{
    Catalog, Request, CMD_EXEC_LAST_ID, CMD_EXEC_ROWS, CMD_MANY, CMD_ONE,
};
use crate::config::PluginConfig;
use crate::error::PhpgenError;
use crate::model::{build_table_models, Field, ModelClass};
use crate::naming;
use crate::query::{build_queries, Params, Query, ReturnValue};
use crate::types::PhpType;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const UUID_IMPORT: &str = "Symfony\\Component\\Uid\\Uuid";

/// Run a full generation pass: request in, ordered filename→source map out.
///
/// Repeated runs on the same request are byte-for-byte identical.
pub fn generate(req: &Request) -> Result<BTreeMap<String, String>, PhpgenError> {
    let config = PluginConfig::from_options(req.plugin_options.as_ref())?;
    let models = build_table_models(&req.catalog, req.settings.engine);
    let (queries, row_models) = build_queries(req, &models)?;
    info!(
        models = models.len(),
        row_models = row_models.len(),
        queries = queries.len(),
        "synthesis complete"
    );
    PhpRenderer::new().render_all(&config, &req.catalog, &models, &row_models, &queries)
}

/// PHP renderer over embedded minijinja templates
pub struct PhpRenderer {
    env: Environment<'static>,
}

impl PhpRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_template("model", include_str!("templates/model.php.jinja"))
            .expect("Failed to load model template");
        env.add_template("enum", include_str!("templates/enum.php.jinja"))
            .expect("Failed to load enum template");
        env.add_template(
            "interface",
            include_str!("templates/queries_interface.php.jinja"),
        )
        .expect("Failed to load interface template");
        env.add_template("impl", include_str!("templates/queries_impl.php.jinja"))
            .expect("Failed to load impl template");
        Self { env }
    }

    /// Render every output file into a deterministic, name-ordered map
    pub fn render_all(
        &self,
        config: &PluginConfig,
        catalog: &Catalog,
        models: &[ModelClass],
        row_models: &[ModelClass],
        queries: &[Query],
    ) -> Result<BTreeMap<String, String>, PhpgenError> {
        let mut output = BTreeMap::new();

        for schema in catalog.user_schemas() {
            for decl in &schema.enums {
                let name = if schema.name == catalog.default_schema {
                    naming::type_name(&decl.name)
                } else {
                    format!(
                        "{}_{}",
                        naming::type_name(&schema.name),
                        naming::type_name(&decl.name)
                    )
                };
                let code = self.render_enum(config, &name, &decl.values)?;
                output.insert(format!("{}.php", name), code);
            }
        }

        for model in models.iter().chain(row_models.iter()) {
            let code = self.render_model(config, model)?;
            debug!(model = %model.name, "rendered model file");
            output.insert(format!("{}.php", model.name), code);
        }

        output.insert(
            "Queries.php".to_string(),
            self.render_queries(config, queries, "interface", "Queries.php")?,
        );
        output.insert(
            "QueriesImpl.php".to_string(),
            self.render_queries(config, queries, "impl", "QueriesImpl.php")?,
        );

        Ok(output)
    }

    fn render_model(
        &self,
        config: &PluginConfig,
        model: &ModelClass,
    ) -> Result<String, PhpgenError> {
        let render_err = |e: minijinja::Error| PhpgenError::Render {
            file: format!("{}.php", model.name),
            message: e.to_string(),
        };
        let template = self.env.get_template("model").map_err(render_err)?;

        let mut imports = Vec::new();
        if model.fields.iter().any(|f| f.php_type.is_uuid()) {
            imports.push(UUID_IMPORT.to_string());
        }

        let ctx = minijinja::context! {
            version => VERSION,
            package => &config.package,
            name => &model.name,
            comment => &model.comment,
            imports => imports,
            fields => model.fields.iter().map(|f| {
                minijinja::context! {
                    name => &f.name,
                    declaration => f.php_type.declaration(),
                    comment => &f.comment,
                }
            }).collect::<Vec<_>>(),
        };

        template
            .render(ctx)
            .map(|s| collapse_blank_lines(&s))
            .map_err(render_err)
    }

    fn render_enum(
        &self,
        config: &PluginConfig,
        name: &str,
        values: &[String],
    ) -> Result<String, PhpgenError> {
        let render_err = |e: minijinja::Error| PhpgenError::Render {
            file: format!("{}.php", name),
            message: e.to_string(),
        };
        let template = self.env.get_template("enum").map_err(render_err)?;

        // Distinct values can sanitize to the same identifier; suffix later
        // occurrences so the emitted cases stay unique.
        let mut name_seen: HashMap<String, usize> = HashMap::new();
        let cases: Vec<_> = values
            .iter()
            .map(|v| {
                let base = enum_case_name(v);
                let occurrences = name_seen.entry(base.clone()).or_insert(0);
                let case_name = if *occurrences > 0 {
                    format!("{}_{}", base, *occurrences + 1)
                } else {
                    base
                };
                *occurrences += 1;
                minijinja::context! {
                    name => case_name,
                    value => v,
                }
            })
            .collect();

        let ctx = minijinja::context! {
            version => VERSION,
            package => &config.package,
            name => name,
            cases => cases,
        };

        template
            .render(ctx)
            .map(|s| collapse_blank_lines(&s))
            .map_err(render_err)
    }

    fn render_queries(
        &self,
        config: &PluginConfig,
        queries: &[Query],
        template_name: &str,
        file: &str,
    ) -> Result<String, PhpgenError> {
        let render_err = |e: minijinja::Error| PhpgenError::Render {
            file: file.to_string(),
            message: e.to_string(),
        };
        let template = self.env.get_template(template_name).map_err(render_err)?;

        let ctx = minijinja::context! {
            version => VERSION,
            package => &config.package,
            imports => query_imports(queries),
            queries => queries.iter().map(|q| {
                minijinja::context! {
                    method_name => &q.method_name,
                    constant_name => &q.constant_name,
                    comments => &q.comments,
                    sql => &q.sql,
                    args => args_decl(&q.params),
                    return_decl => return_decl(q),
                    body => render_body(q),
                }
            }).collect::<Vec<_>>(),
        };

        template
            .render(ctx)
            .map(|s| collapse_blank_lines(&s))
            .map_err(render_err)
    }
}

impl Default for PhpRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// `use` lines shared by the interface and implementation files
fn query_imports(queries: &[Query]) -> Vec<String> {
    let mut uses_uuid = false;
    for q in queries {
        if q.params.model.fields.iter().any(|f| f.php_type.is_uuid()) {
            uses_uuid = true;
        }
        match &q.ret {
            ReturnValue::Scalar(t) if t.is_uuid() => uses_uuid = true,
            ReturnValue::Model { model, .. }
                if model.fields.iter().any(|f| f.php_type.is_uuid()) =>
            {
                uses_uuid = true;
            }
            _ => {}
        }
    }
    if uses_uuid {
        vec![UUID_IMPORT.to_string()]
    } else {
        Vec::new()
    }
}

/// PHP enum case names must be identifiers; values are sanitized and cased
fn enum_case_name(value: &str) -> String {
    let sanitized: String = value
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    let name = naming::type_name(&sanitized);
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("_{}", name)
    } else {
        name
    }
}

/// Argument list for a method signature; three or more spill to one per line
fn args_decl(params: &Params) -> String {
    let parts: Vec<String> = params
        .model
        .fields
        .iter()
        .map(|f| {
            let mut arg = format!("{} ${}", f.php_type.declaration(), f.name);
            if let Some(default) = &f.default {
                arg.push_str(&format!(" = {}", default));
            }
            arg
        })
        .collect();
    if parts.len() < 3 {
        parts.join(", ")
    } else {
        format!("\n{}\n    ", indent(&parts.join(",\n"), 8, -1))
    }
}

/// Declared return type, driven by the command kind
fn return_decl(q: &Query) -> String {
    match q.cmd.as_str() {
        CMD_MANY => ": array".to_string(),
        CMD_EXEC_ROWS | CMD_EXEC_LAST_ID => ": int".to_string(),
        CMD_ONE => match &q.ret {
            ReturnValue::Model { model, .. } => format!(": ?{}", model.name),
            ReturnValue::Scalar(t) => format!(": {}", nullable_declaration(t)),
            ReturnValue::None => ": void".to_string(),
        },
        _ => ": void".to_string(),
    }
}

/// A `:one` query can always come back empty, so its result admits null
fn nullable_declaration(t: &PhpType) -> String {
    let decl = t.declaration();
    if decl == "mixed" || decl.starts_with('?') {
        decl
    } else {
        format!("?{}", decl)
    }
}

/// Expression binding one parameter into the query's parameter array
fn bind_expr(f: &Field) -> String {
    let var = format!("${}", f.name);
    let t = &f.php_type;
    if t.is_array {
        if t.is_enum {
            return format!("array_map(static fn ($v) => $v->value, {})", var);
        }
        return var;
    }
    if t.is_enum {
        return if t.is_null {
            format!("{}?->value", var)
        } else {
            format!("{}->value", var)
        };
    }
    if t.is_json() {
        return if t.is_null {
            format!("{} === null ? null : json_encode({})", var, var)
        } else {
            format!("json_encode({})", var)
        };
    }
    if t.is_uuid() {
        return if t.is_null {
            format!("{}?->toRfc4122()", var)
        } else {
            format!("{}->toRfc4122()", var)
        };
    }
    if t.is_instant() {
        return if t.is_null {
            format!("{}?->format(\\DateTimeInterface::ATOM)", var)
        } else {
            format!("{}->format(\\DateTimeInterface::ATOM)", var)
        };
    }
    if t.is_time() {
        return if t.is_null {
            format!("{}?->format('Y-m-d H:i:s')", var)
        } else {
            format!("{}->format('Y-m-d H:i:s')", var)
        };
    }
    var
}

/// Expression hydrating one value read from a result row
fn extract_expr(src: &str, t: &PhpType) -> String {
    let converted = if t.is_array {
        if t.is_enum {
            format!("array_map(static fn ($v) => {}::from($v), {})", t.name, src)
        } else {
            return src.to_string();
        }
    } else if t.is_enum {
        format!("{}::from({})", t.name, src)
    } else if t.is_json() {
        format!("json_decode({}, true)", src)
    } else if t.is_uuid() {
        format!("Uuid::fromString({})", src)
    } else if t.is_date_time() {
        format!("new \\DateTimeImmutable({})", src)
    } else {
        return src.to_string();
    };

    if t.is_null {
        format!("{} === null ? null : {}", src, converted)
    } else {
        converted
    }
}

/// Row subscript for a field: the source column name, or the member name
/// when the resolver left the column unnamed (an aliased expression).
fn row_subscript(f: &Field) -> String {
    let key = if f.column_name.is_empty() {
        &f.name
    } else {
        &f.column_name
    };
    format!("$row[\"{}\"]", key)
}

/// Lines of a `$this->connection->method(self::CONST[, [...]])` call.
///
/// `suffix` closes the expression, typically `;`. Parameter keys are the
/// actual positional numbers, not the field order.
fn call_lines(prefix: &str, method: &str, q: &Query, suffix: &str) -> Vec<String> {
    let constant = format!("self::{}", q.constant_name);
    if q.params.is_empty() {
        return vec![format!(
            "{}$this->connection->{}({}){}",
            prefix, method, constant, suffix
        )];
    }
    let mut lines = vec![format!(
        "{}$this->connection->{}({}, [",
        prefix, method, constant
    )];
    for f in &q.params.model.fields {
        lines.push(format!("    '{}' => {},", f.id, bind_expr(f)));
    }
    lines.push(format!("]){}", suffix));
    lines
}

/// `new Model(...)` statement hydrating every field from `$row`
fn hydrate_stmt(model: &ModelClass, prefix: &str) -> String {
    let mut out = format!("{}new {}(", prefix, model.name);
    for f in &model.fields {
        out.push_str(&format!(
            "\n    {},",
            extract_expr(&row_subscript(f), &f.php_type)
        ));
    }
    out.push_str("\n);");
    out
}

/// Method body for one query, indented for its place inside the class
fn render_body(q: &Query) -> String {
    let mut lines: Vec<String> = Vec::new();
    match q.cmd.as_str() {
        CMD_ONE => match &q.ret {
            ReturnValue::Model { model, .. } => {
                lines.extend(call_lines("$row = ", "fetchAssociative", q, ";"));
                lines.push("if ($row === false) {".to_string());
                lines.push("    return null;".to_string());
                lines.push("}".to_string());
                lines.extend(
                    hydrate_stmt(model, "return ")
                        .split('\n')
                        .map(String::from),
                );
            }
            ReturnValue::Scalar(t) => {
                lines.extend(call_lines("$value = ", "fetchOne", q, ";"));
                lines.push("if ($value === false) {".to_string());
                lines.push("    return null;".to_string());
                lines.push("}".to_string());
                lines.push(format!("return {};", extract_expr("$value", t)));
            }
            ReturnValue::None => {
                lines.extend(call_lines("", "executeStatement", q, ";"));
            }
        },
        CMD_MANY => match &q.ret {
            ReturnValue::Model { model, .. } => {
                lines.push("$rows = [];".to_string());
                lines.extend(call_lines(
                    "foreach (",
                    "iterateAssociative",
                    q,
                    " as $row) {",
                ));
                lines.extend(
                    indent(&hydrate_stmt(model, "$rows[] = "), 4, -1)
                        .split('\n')
                        .map(String::from),
                );
                lines.push("}".to_string());
                lines.push("return $rows;".to_string());
            }
            ReturnValue::Scalar(t) => {
                if t.is_scalar() {
                    lines.extend(call_lines("return ", "fetchFirstColumn", q, ";"));
                } else {
                    lines.extend(call_lines("$values = ", "fetchFirstColumn", q, ";"));
                    lines.push(format!(
                        "return array_map(static fn ($value) => {}, $values);",
                        extract_expr("$value", t)
                    ));
                }
            }
            ReturnValue::None => {
                lines.extend(call_lines("", "executeStatement", q, ";"));
            }
        },
        CMD_EXEC_ROWS => {
            lines.extend(call_lines("return (int) ", "executeStatement", q, ";"));
        }
        CMD_EXEC_LAST_ID => {
            lines.extend(call_lines("", "executeStatement", q, ";"));
            lines.push("return (int) $this->connection->lastInsertId();".to_string());
        }
        _ => {
            // :exec and anything unrecognized: run it, return nothing
            lines.extend(call_lines("", "executeStatement", q, ";"));
        }
    }
    indent(&lines.join("\n"), 8, -1)
}

/// Indent every line by `n` spaces; `first_indent` overrides the first line
/// unless it is -1.
pub fn indent(s: &str, n: usize, first_indent: isize) -> String {
    s.split('\n')
        .enumerate()
        .map(|(i, line)| {
            let width = if i == 0 && first_indent != -1 {
                first_indent as usize
            } else {
                n
            };
            format!("{}{}", " ".repeat(width), line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse runs of blank lines to a single blank line and guarantee exactly
/// one trailing newline, so repeated runs diff cleanly.
pub fn collapse_blank_lines(s: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut last_blank = false;
    for line in s.split('\n') {
        let blank = line.trim().is_empty();
        if !blank || !last_blank {
            out.push(line);
        }
        last_blank = blank;
    }
    let mut joined = out.join("\n");
    while joined.ends_with('\n') {
        joined.pop();
    }
    joined.push('\n');
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        Column, Engine, EnumDecl, Identifier, Parameter, QueryMeta, Schema, Settings, Table,
        TypeRef,
    };

    fn column(name: &str, type_name: &str) -> Column {
        Column {
            name: name.to_string(),
            type_ref: TypeRef {
                schema: String::new(),
                name: type_name.to_string(),
            },
            not_null: true,
            is_array: false,
            table: None,
            comment: String::new(),
        }
    }

    fn request() -> Request {
        Request {
            catalog: Catalog {
                default_schema: "public".to_string(),
                schemas: vec![Schema {
                    name: "public".to_string(),
                    tables: vec![Table {
                        rel: Identifier {
                            schema: String::new(),
                            name: "authors".to_string(),
                        },
                        columns: vec![
                            column("id", "integer"),
                            column("name", "text"),
                            column("created_at", "timestamptz"),
                        ],
                        comment: String::new(),
                    }],
                    enums: vec![EnumDecl {
                        name: "status".to_string(),
                        values: vec!["active".to_string(), "inactive".to_string()],
                    }],
                }],
            },
            queries: vec![
                QueryMeta {
                    name: "GetAuthor".to_string(),
                    cmd: ":one".to_string(),
                    text: "SELECT id, name, created_at FROM authors WHERE id = $1".to_string(),
                    filename: "query.sql".to_string(),
                    comments: vec![],
                    params: vec![Parameter {
                        number: 1,
                        column: column("id", "integer"),
                    }],
                    columns: vec![
                        column("id", "integer"),
                        column("name", "text"),
                        column("created_at", "timestamptz"),
                    ],
                },
                QueryMeta {
                    name: "CountAuthors".to_string(),
                    cmd: ":one".to_string(),
                    text: "SELECT count(*) FROM authors".to_string(),
                    filename: "query.sql".to_string(),
                    comments: vec![],
                    params: vec![],
                    columns: vec![column("count", "bigint")],
                },
                QueryMeta {
                    name: "DeleteAuthor".to_string(),
                    cmd: ":exec".to_string(),
                    text: "DELETE FROM authors WHERE id = $1".to_string(),
                    filename: "query.sql".to_string(),
                    comments: vec![],
                    params: vec![Parameter {
                        number: 1,
                        column: column("id", "integer"),
                    }],
                    columns: vec![],
                },
            ],
            settings: Settings {
                engine: Engine::Postgresql,
            },
            plugin_options: Some(serde_json::json!({"package": "App\\Sqlc"})),
        }
    }

    #[test]
    fn test_generate_emits_expected_files() {
        let output = generate(&request()).expect("generate");
        let files: Vec<_> = output.keys().map(String::as_str).collect();
        assert_eq!(
            files,
            vec![
                "Authors.php",
                "GetAuthorRow.php",
                "Queries.php",
                "QueriesImpl.php",
                "Status.php",
            ]
        );
    }

    #[test]
    fn test_generate_is_deterministic() {
        let req = request();
        let first = generate(&req).expect("first run");
        let second = generate(&req).expect("second run");
        assert_eq!(first, second);
    }

    #[test]
    fn test_model_file_contents() {
        let output = generate(&request()).expect("generate");
        let model = &output["Authors.php"];
        assert!(model.contains("namespace App\\Sqlc;"));
        assert!(model.contains("final class Authors"));
        assert!(model.contains("public readonly int $id,"));
        assert!(model.contains("public readonly string $name,"));
        assert!(model.contains("public readonly \\DateTimeImmutable $createdAt,"));
    }

    #[test]
    fn test_enum_file_contents() {
        let output = generate(&request()).expect("generate");
        let code = &output["Status.php"];
        assert!(code.contains("enum Status: string"));
        assert!(code.contains("case Active = 'active';"));
        assert!(code.contains("case Inactive = 'inactive';"));
    }

    #[test]
    fn test_impl_file_contents() {
        let output = generate(&request()).expect("generate");
        let code = &output["QueriesImpl.php"];
        assert!(code.contains("use Doctrine\\DBAL\\Connection;"));
        assert!(code.contains("private const getAuthor = <<<'SQL'"));
        assert!(code.contains("public function getAuthor(int $id): ?GetAuthorRow"));
        assert!(code.contains("'1' => $id,"));
        assert!(code.contains("new \\DateTimeImmutable($row[\"created_at\"])"));
        assert!(code.contains("public function countAuthors(): ?int"));
        assert!(code.contains("public function deleteAuthor(int $id): void"));
    }

    #[test]
    fn test_interface_file_contents() {
        let output = generate(&request()).expect("generate");
        let code = &output["Queries.php"];
        assert!(code.contains("interface Queries"));
        assert!(code.contains("public function getAuthor(int $id): ?GetAuthorRow;"));
        assert!(!code.contains("fetchAssociative"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("foo", 0, -1), "foo");
        assert_eq!(indent("foo", 2, -1), "  foo");
        assert_eq!(indent("foo\nbar", 2, -1), "  foo\n  bar");
        assert_eq!(indent("foo\nbar", 2, 4), "    foo\n  bar");
        assert_eq!(indent("foo\nbar", 2, 0), "foo\n  bar");
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\n\nb\n");
        assert_eq!(collapse_blank_lines("a\nb\n"), "a\nb\n");
        assert_eq!(collapse_blank_lines("a\n\n\n"), "a\n");
    }

    #[test]
    fn test_enum_case_name() {
        assert_eq!(enum_case_name("active"), "Active");
        assert_eq!(enum_case_name("on-hold"), "OnHold");
        assert_eq!(enum_case_name("2fa"), "_2fa");
    }

    #[test]
    fn test_enum_case_collision_suffixed() {
        let renderer = PhpRenderer::new();
        let config = PluginConfig::default();
        let values = vec!["on-hold".to_string(), "on_hold".to_string()];
        let code = renderer
            .render_enum(&config, "Status", &values)
            .expect("render");
        assert!(code.contains("case OnHold = 'on-hold';"));
        assert!(code.contains("case OnHold_2 = 'on_hold';"));
    }

    #[test]
    fn test_bind_expr_variants() {
        let base = PhpType {
            name: "int".to_string(),
            is_enum: false,
            is_array: false,
            is_null: false,
            data_type: "integer".to_string(),
            engine: Engine::Postgresql,
        };
        let field = |t: PhpType| Field {
            id: 1,
            name: "x".to_string(),
            column_name: "x".to_string(),
            php_type: t,
            default: None,
            comment: String::new(),
        };

        assert_eq!(bind_expr(&field(base.clone())), "$x");

        let mut json = base.clone();
        json.name = "array".to_string();
        json.data_type = "jsonb".to_string();
        assert_eq!(bind_expr(&field(json.clone())), "json_encode($x)");
        json.is_null = true;
        assert_eq!(
            bind_expr(&field(json)),
            "$x === null ? null : json_encode($x)"
        );

        let mut instant = base.clone();
        instant.name = "\\DateTimeImmutable".to_string();
        instant.data_type = "timestamptz".to_string();
        assert_eq!(
            bind_expr(&field(instant)),
            "$x->format(\\DateTimeInterface::ATOM)"
        );

        let mut time = base.clone();
        time.name = "\\DateTimeImmutable".to_string();
        time.data_type = "timestamp".to_string();
        assert_eq!(bind_expr(&field(time)), "$x->format('Y-m-d H:i:s')");

        let mut uuid = base;
        uuid.name = "Uuid".to_string();
        uuid.data_type = "uuid".to_string();
        uuid.is_null = true;
        assert_eq!(bind_expr(&field(uuid)), "$x?->toRfc4122()");
    }

    #[test]
    fn test_extract_expr_null_guard() {
        let t = PhpType {
            name: "Uuid".to_string(),
            is_enum: false,
            is_array: false,
            is_null: true,
            data_type: "uuid".to_string(),
            engine: Engine::Postgresql,
        };
        assert_eq!(
            extract_expr("$row[\"id\"]", &t),
            "$row[\"id\"] === null ? null : Uuid::fromString($row[\"id\"])"
        );
    }

    #[test]
    fn test_args_decl_spills_to_multiple_lines() {
        let req = request();
        let models = build_table_models(&req.catalog, req.settings.engine);
        let mut meta = QueryMeta {
            name: "CreateAuthor".to_string(),
            cmd: ":exec".to_string(),
            text: "INSERT ...".to_string(),
            filename: "query.sql".to_string(),
            comments: vec![],
            params: vec![],
            columns: vec![],
        };
        for (i, name) in ["id", "name", "bio"].into_iter().enumerate() {
            meta.params.push(Parameter {
                number: i as i32 + 1,
                column: column(name, "text"),
            });
        }
        let mut req = req;
        req.queries = vec![meta];
        let (queries, _) = build_queries(&req, &models).expect("build");
        let args = args_decl(&queries[0].params);
        assert!(args.starts_with('\n'));
        assert!(args.contains("        string $id,\n"));
        assert!(args.ends_with("string $bio\n    "));
    }
}
