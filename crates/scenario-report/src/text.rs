//! Framed plain-text report (the "pdf" export format).

use chrono::Local;
use scenario_core::ClassificationResult;

use crate::category_count;

const HEAVY_RULE: &str =
    "═══════════════════════════════════════════════════════════════";
const LIGHT_RULE: &str =
    "───────────────────────────────────────────────────────────────";

/// Renders the report as framed UTF-8 text.
pub fn render(file_name: &str, result: &ClassificationResult) -> String {
    let mut out = String::new();

    out.push_str(HEAVY_RULE);
    out.push('\n');
    out.push_str("   ОТЧЕТ О ПРОВЕРКЕ ВОЗРАСТНОГО РЕЙТИНГА СЦЕНАРИЯ\n");
    out.push_str(HEAVY_RULE);
    out.push_str("\n\n");

    out.push_str(&format!("Файл: {file_name}\n"));
    out.push_str(&format!(
        "Дата анализа: {}\n\n",
        Local::now().format("%d.%m.%Y %H:%M:%S")
    ));

    section(&mut out, "РЕЗУЛЬТАТ АНАЛИЗА");
    out.push_str(&format!("Возрастной рейтинг: {}\n", result.rating));
    out.push_str(&format!("{}\n\n", result.comment));

    if !result.categories.is_empty() {
        section(&mut out, "ОБНАРУЖЕННЫЕ КАТЕГОРИИ НАРУШЕНИЙ");
        for category in &result.categories {
            out.push_str(&format!(
                "• {}: {} фрагментов\n",
                category.display_name(),
                category_count(result, *category)
            ));
        }
        out.push('\n');
    }

    section(&mut out, "РЕКОМЕНДАЦИИ ПО УЛУЧШЕНИЮ");
    out.push_str("Для понижения возрастного рейтинга рекомендуется:\n\n");
    for category in &result.categories {
        out.push_str(&format!(
            "• {}: Пересмотрите содержание данной категории\n",
            category.display_name()
        ));
    }

    let issues: Vec<_> = result
        .scenes
        .first()
        .map(|s| s.issues.as_slice())
        .unwrap_or_default()
        .to_vec();
    if !issues.is_empty() {
        out.push('\n');
        section(&mut out, "ПОДРОБНЫЙ АНАЛИЗ ПРОБЛЕМНЫХ ФРАГМЕНТОВ");
        for issue in &issues {
            out.push_str(&format!("[{}] {}\n", issue.category.id(), issue.text));
        }
    }

    out.push('\n');
    out.push_str(HEAVY_RULE);
    out.push('\n');
    out.push_str("Конец отчета\n");
    out.push_str(HEAVY_RULE);
    out.push('\n');

    out
}

fn section(out: &mut String, title: &str) {
    out.push_str(LIGHT_RULE);
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(LIGHT_RULE);
    out.push_str("\n\n");
}
