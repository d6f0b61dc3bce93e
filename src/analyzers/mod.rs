//! Capacity aggregation pipeline.
//!
//! This module groups plant records by year and country, computes capacity
//! statistics with green and renewable shares, derives start-to-latest growth
//! per country, and assembles the summary document written for the map site.

pub mod aggregate;
pub mod analyzer;
pub mod fuel;
pub mod grouper;
pub mod growth;
pub mod types;
pub mod utility;
