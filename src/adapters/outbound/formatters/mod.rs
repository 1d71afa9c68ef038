mod cyclonedx_formatter;
mod json_report_formatter;
mod spdx_formatter;
mod text_report_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
pub use json_report_formatter::JsonReportFormatter;
pub use spdx_formatter::SpdxFormatter;
pub use text_report_formatter::TextReportFormatter;
