//! Core logic - framework-agnostic bootstrap, query, association and transaction operations.

/// Schema creation and the fixed product seed list
pub mod catalog;
/// Order, order item and many-to-many association operations
pub mod order;
/// Connectivity smoke test against a `posts` table
pub mod posts;
/// Read-only product query demonstrations
pub mod product;
/// Transactional units of work
pub mod transaction;
