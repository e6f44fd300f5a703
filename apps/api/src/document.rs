//! Document extraction boundary: file bytes in, plain text plus formatting
//! signals out. The analysis pipeline never touches file bytes itself.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::analysis::models::FormattingSignals;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.rsplit('.').next()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ExtractedDocument {
    pub text: String,
    pub signals: FormattingSignals,
    /// Only populated for PDFs; admission-control input for OCR.
    pub page_count: usize,
}

pub fn extract(path: &Path, kind: DocumentKind) -> Result<ExtractedDocument> {
    match kind {
        DocumentKind::Pdf => extract_pdf(path),
        DocumentKind::Docx => extract_docx(path),
    }
}

fn signals_for(text: &str, has_tables: bool, has_images: bool) -> FormattingSignals {
    FormattingSignals {
        has_tables,
        has_images,
        word_count: text.split_whitespace().count(),
        line_count: text.split('\n').count(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PDF
// ────────────────────────────────────────────────────────────────────────────

/// Extraction failures degrade to empty text; the OCR triage downstream is
/// the recovery path for unreadable PDFs.
fn extract_pdf(path: &Path) -> Result<ExtractedDocument> {
    let text = match pdf_extract::extract_text(path) {
        Ok(text) => text,
        Err(err) => {
            warn!("PDF text extraction failed: {err}");
            String::new()
        }
    };

    let (page_count, has_images) = inspect_pdf(path);
    let has_tables = looks_columnar(&text);

    Ok(ExtractedDocument {
        signals: signals_for(&text, has_tables, has_images),
        text,
        page_count,
    })
}

/// Walks the PDF object table for the page count and any embedded image
/// XObject. Failures report zero pages and no images.
fn inspect_pdf(path: &Path) -> (usize, bool) {
    let doc = match lopdf::Document::load(path) {
        Ok(doc) => doc,
        Err(err) => {
            warn!("PDF structure inspection failed: {err}");
            return (0, false);
        }
    };

    let page_count = doc.get_pages().len();
    let has_images = doc.objects.values().any(|obj| {
        matches!(
            obj,
            lopdf::Object::Stream(stream)
                if matches!(stream.dict.get(b"Subtype"), Ok(lopdf::Object::Name(name)) if name == b"Image")
        )
    });

    (page_count, has_images)
}

/// Text-level table heuristic: several lines carrying multiple wide gaps
/// usually mean column-aligned layout.
fn looks_columnar(text: &str) -> bool {
    let columnar_lines = text
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && trimmed.matches("   ").count() >= 2
        })
        .count();
    columnar_lines >= 3
}

// ────────────────────────────────────────────────────────────────────────────
// DOCX
// ────────────────────────────────────────────────────────────────────────────

fn extract_docx(path: &Path) -> Result<ExtractedDocument> {
    let bytes = std::fs::read(path).context("failed to read DOCX file")?;
    let docx = docx_rs::read_docx(&bytes)
        .map_err(|err| anyhow::anyhow!("failed to parse DOCX: {err}"))?;

    let mut text = String::new();
    let mut has_tables = false;
    let mut has_images = false;

    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(paragraph) => {
                append_paragraph(paragraph, &mut text, &mut has_images);
                text.push('\n');
            }
            docx_rs::DocumentChild::Table(table) => {
                has_tables = true;
                for row in &table.rows {
                    let docx_rs::TableChild::TableRow(row) = row;
                    for cell in &row.cells {
                        let docx_rs::TableRowChild::TableCell(cell) = cell;
                        for content in &cell.children {
                            if let docx_rs::TableCellContent::Paragraph(paragraph) = content {
                                append_paragraph(paragraph, &mut text, &mut has_images);
                                text.push(' ');
                            }
                        }
                    }
                    text.push('\n');
                }
            }
            _ => {}
        }
    }

    Ok(ExtractedDocument {
        signals: signals_for(&text, has_tables, has_images),
        text,
        page_count: 0,
    })
}

fn append_paragraph(paragraph: &docx_rs::Paragraph, text: &mut String, has_images: &mut bool) {
    for child in &paragraph.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    docx_rs::RunChild::Text(t) => text.push_str(&t.text),
                    docx_rs::RunChild::Drawing(_) => *has_images = true,
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(DocumentKind::from_filename("resume.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_filename("My.Resume.DOCX"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_filename("notes.txt"), None);
        assert_eq!(DocumentKind::from_filename("no_extension"), None);
    }

    #[test]
    fn test_columnar_heuristic() {
        let tabular = "\
Name        Role         Years
Jane        Engineer     4
John        Designer     2";
        assert!(looks_columnar(tabular));

        let prose = "Jane Doe\nSenior Engineer at Acme\n• Built things";
        assert!(!looks_columnar(prose));
    }

    #[test]
    fn test_signals_counts() {
        let signals = signals_for("one two three\nfour", false, false);
        assert_eq!(signals.word_count, 4);
        assert_eq!(signals.line_count, 2);
    }
}
