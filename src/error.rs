use thiserror::Error;

/// phpgen errors
///
/// Generation is all-or-nothing: any error here aborts the run with no
/// partial output.
#[derive(Error, Debug)]
pub enum PhpgenError {
    #[error("query '{query}' uses unsupported command '{cmd}': bulk copy is not implemented")]
    UnsupportedCommand { query: String, cmd: String },

    #[error("invalid plugin options: {0}")]
    Config(String),

    #[error("rendering '{file}' failed: {message}")]
    Render { file: String, message: String },
}
