//! Data model for the report builder.
//!
//! These types mirror the JSON shapes exchanged with the report backend.
//! They carry no behavior beyond construction helpers and partial-update
//! patches; all state transitions live in `rb-core`.

pub mod entity;
pub mod error;
pub mod field;
pub mod filter_type;
pub mod ids;
pub mod report;

pub use entity::{DisplayField, DisplayFieldPatch, Filter, FilterPatch};
pub use error::{ModelError, Result};
pub use field::{Field, NewReportField, RelatedField};
pub use filter_type::FilterType;
pub use ids::ReportId;
pub use report::{
    LastGeneratedReport, NewReportInfo, PreviewMeta, ReportDetailed, ReportPreview, ReportSummary,
};
