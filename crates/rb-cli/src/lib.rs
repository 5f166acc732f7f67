//! CLI library components for the report builder replay tool.

pub mod logging;
pub mod replay;
pub mod summary;
