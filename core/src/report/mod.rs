//! Report rendering and output

mod cleaned;
mod csv_export;
mod error;
mod writer;

pub use cleaned::{SECTION_RULE_WIDTH, render_cleaned_report};
pub use csv_export::{DATE_FORMAT, ExportMode, render_csv};
pub use error::ReportError;
pub use writer::{OutputFile, write_all_or_nothing};
