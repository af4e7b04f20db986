//! HTTP middleware: rate limiting, CORS, request tracing.

pub mod cors;
pub mod rate_limit;
pub mod tracing;
