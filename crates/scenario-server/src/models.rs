//! API request and response models.

use serde::{Deserialize, Serialize};

use scenario_core::ClassificationResult;

/// Request body for POST /api/analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The scenario text to classify.
    pub content: String,
    /// Original file name, for logging only.
    pub file_name: Option<String>,
}

/// Request body for POST /api/extract.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// Uploaded file name; the extension selects the extractor.
    pub file_name: String,
    /// File bytes, base64-encoded.
    pub data: String,
}

/// Response body for POST /api/extract.
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    /// Extracted plain text.
    pub text: String,
}

/// Request body for POST /api/report.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    /// Name of the analyzed file, used in the report header.
    pub file_name: String,
    /// Report format: "docx" or "pdf".
    pub format: ReportFormatParam,
    /// The verdict to render.
    pub result: ClassificationResult,
}

/// Wire form of the report format.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatParam {
    Docx,
    Pdf,
}

impl From<ReportFormatParam> for scenario_report::ReportFormat {
    fn from(param: ReportFormatParam) -> Self {
        match param {
            ReportFormatParam::Docx => scenario_report::ReportFormat::Docx,
            ReportFormatParam::Pdf => scenario_report::ReportFormat::Pdf,
        }
    }
}

/// Response body for POST /api/report.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    /// Suggested file name for the generated report.
    pub file_name: String,
    /// Report bytes, base64-encoded.
    pub data: String,
}

/// Response body for GET /api/health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Whether an external classifier worker is configured.
    pub external_classifier: bool,
}
