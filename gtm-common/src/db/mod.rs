//! SQLite persistence
//!
//! One module per table family. Every function takes the pool explicitly;
//! nothing here caches or holds state between calls.

pub mod briefs;
pub mod brand;
pub mod feasibility;
pub mod init;
pub mod landscape;
pub mod packaging;
pub mod plans;
pub mod projects;
pub mod research;
pub mod segments;
pub mod sentiment;

pub use init::{create_schema, init_database, open_in_memory};
