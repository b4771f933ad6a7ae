//! Core business logic - framework-agnostic ledger operations.
//!
//! Every operation takes the database connection and the acting staff
//! member's display name explicitly; nothing reads ambient actor state.

/// Location category seeding and lookups
pub mod category;
/// Room balance clearing at checkout
pub mod clearing;
/// Structured filters and free-text search
pub mod filter;
/// Periodic transaction list refresh
pub mod refresh;
/// Single and bulk status transitions
pub mod status;
/// Charge creation, lookups, and audit history
pub mod transaction;
