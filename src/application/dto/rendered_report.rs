use super::ReportFormat;
use chrono::{DateTime, Utc};

/// Prefix of exported report file names
const REPORT_FILE_PREFIX: &str = "sbom-analysis-report";

/// A rendered report and the file name it should be saved under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub format: ReportFormat,
    pub file_name: String,
    pub content: String,
}

impl RenderedReport {
    /// `sbom-analysis-report-YYYY-MM-DD.<ext>`
    pub fn file_name_for(format: ReportFormat, generated_at: DateTime<Utc>) -> String {
        format!(
            "{}-{}.{}",
            REPORT_FILE_PREFIX,
            generated_at.format("%Y-%m-%d"),
            format.extension()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_file_name_embeds_date() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 0).unwrap();
        assert_eq!(
            RenderedReport::file_name_for(ReportFormat::Json, at),
            "sbom-analysis-report-2024-03-09.json"
        );
        assert_eq!(
            RenderedReport::file_name_for(ReportFormat::Text, at),
            "sbom-analysis-report-2024-03-09.txt"
        );
    }
}
