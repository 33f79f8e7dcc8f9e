//! Rendering of query results for terminal and file output

pub mod chart;
pub mod table;
