use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonReportFormatter adapter: the report read model serialized as pretty JSON
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog::RepositoryCatalog;

    #[test]
    fn test_format_empty_catalog() {
        let mut catalog = RepositoryCatalog::new();
        catalog.log_challenge("Report generated", "empty", true, None);
        let model = ReportReadModel::from_catalog(&catalog, "2024-01-01T00:00:00Z".to_string());

        let output = JsonReportFormatter::new().format(&model).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            vec!["metadata", "repositories", "analysis", "challengeLog", "artifacts"]
        );
        assert_eq!(json["metadata"]["totalRepositories"], 0);
        assert!(json["analysis"]["comparison"].is_null());
        assert_eq!(json["challengeLog"][0]["title"], "Report generated");
        assert_eq!(json["artifacts"]["syft"], 0);
    }
}
