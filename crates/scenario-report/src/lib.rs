//! Scenario Report - human-readable rating reports.
//!
//! Renders a [`ClassificationResult`] into a byte stream: a DOCX document
//! or a framed plain-text report (the historical "pdf" export format).
//! Both contain the same sections: title and date header, rating,
//! category table with per-category counts, recommendations, and the
//! detailed issue listing.

mod docx;
mod text;

use scenario_core::{Category, ClassificationResult};
use thiserror::Error;

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Docx,
    Pdf,
}

impl ReportFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Docx => "docx",
            ReportFormat::Pdf => "pdf",
        }
    }
}

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// DOCX packaging failed.
    #[error("DOCX rendering failed: {0}")]
    Docx(String),
}

/// Renders a report for the given verdict.
pub fn render_report(
    file_name: &str,
    result: &ClassificationResult,
    format: ReportFormat,
) -> Result<Vec<u8>, ReportError> {
    match format {
        ReportFormat::Docx => docx::render(file_name, result),
        ReportFormat::Pdf => Ok(text::render(file_name, result).into_bytes()),
    }
}

/// Number of flagged fragments reported for a category.
///
/// Counts the issues of the first scene; a category present in the
/// verdict always reports at least one fragment, even when the issue
/// list is sparse.
pub(crate) fn category_count(result: &ClassificationResult, category: Category) -> usize {
    let count = result
        .scenes
        .first()
        .map(|s| s.issues.iter().filter(|i| i.category == category).count())
        .unwrap_or(0);
    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenario_core::{Issue, Rating, RuleClassifier, Scene, SeverityTier};

    fn sample_result() -> ClassificationResult {
        RuleClassifier::new().classify("Сука! Он готов убить.\nВторая строка.")
    }

    #[test]
    fn pdf_report_contains_all_sections() {
        let result = sample_result();
        let bytes = render_report("сценарий.txt", &result, ReportFormat::Pdf).unwrap();
        let report = String::from_utf8(bytes).unwrap();

        assert!(report.contains("ОТЧЕТ О ПРОВЕРКЕ ВОЗРАСТНОГО РЕЙТИНГА СЦЕНАРИЯ"));
        assert!(report.contains("Файл: сценарий.txt"));
        assert!(report.contains("Возрастной рейтинг: 18+"));
        assert!(report.contains("Обнаружены сцены насилия"));
        assert!(report.contains("Ненормативная лексика: 1 фрагментов"));
        assert!(report.contains("Насилие: 1 фрагментов"));
        assert!(report.contains("РЕКОМЕНДАЦИИ ПО УЛУЧШЕНИЮ"));
        assert!(report.contains("[profanity] Сука! Он готов убить."));
        assert!(report.contains("[violence] Сука! Он готов убить."));
        assert!(report.contains("Конец отчета"));
    }

    #[test]
    fn pdf_report_for_clean_verdict_omits_category_table() {
        let result = RuleClassifier::new().classify("Тихий вечер.");
        let bytes = render_report("clean.txt", &result, ReportFormat::Pdf).unwrap();
        let report = String::from_utf8(bytes).unwrap();

        assert!(report.contains("Возрастной рейтинг: OK"));
        assert!(!report.contains("ОБНАРУЖЕННЫЕ КАТЕГОРИИ НАРУШЕНИЙ"));
        assert!(!report.contains("ПОДРОБНЫЙ АНАЛИЗ"));
    }

    #[test]
    fn docx_report_is_a_zip_archive() {
        let result = sample_result();
        let bytes = render_report("сценарий.docx", &result, ReportFormat::Docx).unwrap();
        // DOCX is a ZIP container; check the local-file-header magic.
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn category_count_floors_at_one() {
        // External verdicts may list a category without a matching issue.
        let result = ClassificationResult {
            rating: Rating::EighteenPlus,
            categories: vec![scenario_core::Category::Violence],
            comment: "x".to_string(),
            scenes: vec![Scene {
                scene_id: 1,
                content: "x".to_string(),
                issues: vec![],
            }],
        };
        assert_eq!(category_count(&result, scenario_core::Category::Violence), 1);
    }

    #[test]
    fn category_count_counts_issues() {
        let issue = |cat| Issue {
            line: 1,
            text: "x".to_string(),
            category: cat,
            severity: SeverityTier::High,
        };
        let result = ClassificationResult {
            rating: Rating::EighteenPlus,
            categories: vec![scenario_core::Category::Violence],
            comment: "x".to_string(),
            scenes: vec![Scene {
                scene_id: 1,
                content: "x".to_string(),
                issues: vec![
                    issue(scenario_core::Category::Violence),
                    issue(scenario_core::Category::Violence),
                ],
            }],
        };
        assert_eq!(category_count(&result, scenario_core::Category::Violence), 2);
    }

    #[test]
    fn report_format_extensions() {
        assert_eq!(ReportFormat::Docx.extension(), "docx");
        assert_eq!(ReportFormat::Pdf.extension(), "pdf");
    }
}
