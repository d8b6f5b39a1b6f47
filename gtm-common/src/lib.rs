//! # GTM Kit Common Library
//!
//! Shared code for the GTM Kit BFF service and its client:
//! - Funnel board engine (reorder, recategorize, filter, export)
//! - Record models and SQLite queries
//! - Bearer-token verification
//! - Project context and module progress
//! - Creative brief drafting and section edits
//! - Bootstrap configuration
//! - Canned analysis content

pub mod auth;
pub mod brief;
pub mod config;
pub mod content;
pub mod context;
#[cfg(feature = "sqlx")]
pub mod db;
pub mod error;
pub mod funnel;
pub mod models;
pub mod uuid_utils;

pub use error::{Error, Result};
