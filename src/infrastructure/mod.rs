//! Infrastructure layer: database integration.

pub mod persistence;
