//! DOCX report rendering.

use std::io::Cursor;

use chrono::Local;
use docx_rs::{AlignmentType, Docx, Paragraph, Run, Table, TableCell, TableRow};
use scenario_core::ClassificationResult;

use crate::{category_count, ReportError};

/// Renders the report as a DOCX document.
pub fn render(file_name: &str, result: &ClassificationResult) -> Result<Vec<u8>, ReportError> {
    let mut docx = Docx::new()
        .add_paragraph(
            Paragraph::new()
                .add_run(
                    Run::new()
                        .add_text("Отчет о проверке возрастного рейтинга сценария")
                        .bold()
                        .size(32),
                )
                .align(AlignmentType::Center),
        )
        .add_paragraph(text_paragraph(&format!("Файл: {file_name}")))
        .add_paragraph(text_paragraph(&format!(
            "Дата анализа: {}",
            Local::now().format("%d.%m.%Y %H:%M:%S")
        )))
        .add_paragraph(heading("Результат анализа"))
        .add_paragraph(
            Paragraph::new().add_run(
                Run::new()
                    .add_text(format!("Возрастной рейтинг: {}", result.rating))
                    .bold()
                    .size(24),
            ),
        )
        .add_paragraph(text_paragraph(&result.comment));

    if !result.categories.is_empty() {
        docx = docx
            .add_paragraph(heading("Обнаруженные категории нарушений"))
            .add_table(category_table(result));
    }

    docx = docx
        .add_paragraph(heading("Рекомендации по улучшению"))
        .add_paragraph(text_paragraph(
            "Для понижения возрастного рейтинга рекомендуется:",
        ));
    for category in &result.categories {
        docx = docx.add_paragraph(text_paragraph(&format!(
            "• {}: Пересмотрите содержание данной категории",
            category.display_name()
        )));
    }

    let issues = result
        .scenes
        .first()
        .map(|s| s.issues.as_slice())
        .unwrap_or_default();
    if !issues.is_empty() {
        docx = docx.add_paragraph(heading("Подробный анализ проблемных фрагментов"));
        for issue in issues {
            docx = docx.add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(format!("[{}] ", issue.category.id())).bold())
                    .add_run(Run::new().add_text(issue.text.clone())),
            );
        }
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ReportError::Docx(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn category_table(result: &ClassificationResult) -> Table {
    let mut rows = vec![TableRow::new(vec![
        header_cell("Категория"),
        header_cell("Количество"),
    ])];
    for category in &result.categories {
        rows.push(TableRow::new(vec![
            text_cell(category.display_name()),
            text_cell(&category_count(result, *category).to_string()),
        ]));
    }
    Table::new(rows)
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold().size(28))
}

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn header_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text).bold()))
}

fn text_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(text_paragraph(text))
}
