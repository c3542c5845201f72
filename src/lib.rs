//! # phpgen
//!
//! Generate typed PHP data access code from resolved SQL catalogs
//!
//! This crate takes an already-resolved database catalog plus parameterized
//! query metadata and synthesizes PHP model classes and Doctrine DBAL query
//! code. It performs no SQL parsing and opens no database connections; the
//! request arrives fully resolved from the plugin host.

pub mod catalog;
pub mod codegen;
pub mod config;
pub mod error;
pub mod model;
pub mod naming;
pub mod query;
pub mod types;

pub mod prelude {
    pub use crate::catalog::{Catalog, Column, Engine, Request, Schema, Table};
    pub use crate::codegen::{generate, PhpRenderer};
    pub use crate::config::PluginConfig;
    pub use crate::error::PhpgenError;
    pub use crate::model::{Field, ModelClass};
    pub use crate::query::{Query, ReturnValue};
    pub use crate::types::PhpType;
}

pub use codegen::generate;
