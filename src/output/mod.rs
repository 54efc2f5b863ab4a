//! Report formatting and analysis records

pub mod formatter;
pub mod record;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use record::AnalysisRecord;
