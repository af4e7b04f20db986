//! Repository traits implemented by the infrastructure layer.

mod link_repository;

pub use link_repository::{InsertResult, LinkRepository};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
