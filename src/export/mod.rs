mod delimited_exporter;
mod export_error;
mod json_exporter;
mod log_exporter;
mod report_exporter;

pub use delimited_exporter::DelimitedExporter;
pub use export_error::ExportError;
pub use json_exporter::JsonExporter;
pub use log_exporter::LogExporter;
pub use report_exporter::{ExportFormat, ReportExporter};
