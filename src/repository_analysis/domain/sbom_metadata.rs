use super::ScannerTool;

/// Per-document metadata: when it was produced, by which simulated tool, and its serial
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    timestamp: String,
    tool: ScannerTool,
    serial_number: String,
}

impl SbomMetadata {
    pub fn new(timestamp: String, tool: ScannerTool, serial_number: String) -> Self {
        Self {
            timestamp,
            tool,
            serial_number,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool(&self) -> ScannerTool {
        self.tool
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }
}
