//! Shared utilities: code generation, URL normalization, error helpers.

pub mod code_generator;
pub mod db_error;
pub mod url_normalizer;
