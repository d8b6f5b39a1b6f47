//! Canned "analysis" content
//!
//! Every module returns fixed sample data (or a random pick from a fixed
//! table). Nothing here looks at real market data.

pub mod brief;
pub mod feasibility;
pub mod gtm;
pub mod landscape;
pub mod packaging;
pub mod research;
pub mod segments;
pub mod sentiment;
