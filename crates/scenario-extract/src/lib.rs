//! Scenario Extract - document text extraction.
//!
//! Turns uploaded scenario files (txt, docx, pdf) into plain UTF-8 text
//! for the classification engine. Format is declared by the caller,
//! normally from the file extension.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use thiserror::Error;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Txt,
    Docx,
    Pdf,
}

impl DocumentFormat {
    /// Resolves a format from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<DocumentFormat> {
        match ext.to_lowercase().as_str() {
            "txt" => Some(DocumentFormat::Txt),
            "docx" => Some(DocumentFormat::Docx),
            "pdf" => Some(DocumentFormat::Pdf),
            _ => None,
        }
    }

    /// Resolves a format from a file name.
    pub fn from_file_name(name: &str) -> Option<DocumentFormat> {
        let ext = name.rsplit_once('.').map(|(_, e)| e)?;
        Self::from_extension(ext)
    }
}

/// Errors that can occur during extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file extension maps to no supported format.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// A txt upload was not valid UTF-8.
    #[error("file is not valid UTF-8 text")]
    InvalidEncoding,

    /// DOCX parsing failed.
    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    /// PDF parsing failed.
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
}

/// Extracts UTF-8 text from document bytes in the declared format.
pub fn extract_text(data: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Txt => {
            String::from_utf8(data.to_vec()).map_err(|_| ExtractError::InvalidEncoding)
        }
        DocumentFormat::Docx => extract_docx(data),
        DocumentFormat::Pdf => extract_pdf(data),
    }
}

/// Extracts text for a named file, resolving the format from its
/// extension.
pub fn extract_text_from_file_name(data: &[u8], file_name: &str) -> Result<String, ExtractError> {
    let format = DocumentFormat::from_file_name(file_name)
        .ok_or_else(|| ExtractError::UnsupportedFormat(file_name.to_string()))?;
    extract_text(data, format)
}

fn extract_docx(data: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(data).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children.iter() {
        if let DocumentChild::Paragraph(para) = child {
            let text: String = para
                .children
                .iter()
                .filter_map(|pc| match pc {
                    ParagraphChild::Run(run) => Some(
                        run.children
                            .iter()
                            .filter_map(|rc| match rc {
                                RunChild::Text(t) => Some(t.text.clone()),
                                _ => None,
                            })
                            .collect::<Vec<_>>()
                            .join(""),
                    ),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("");

            if !text.is_empty() {
                paragraphs.push(text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}

fn extract_pdf(data: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Pdf(e.to_string()))
}
