//! Recognition backend boundary. The pipeline only sees `Arc<dyn OcrEngine>`;
//! the default backend shells out to poppler and tesseract, probed once at
//! startup.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tracing::info;

/// Recognition backend. Implement this to swap engines without touching the
/// triage controller or handlers.
///
/// Carried in `AppState` as `Arc<dyn OcrEngine>`.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Capability probe, computed once and cached for the process lifetime.
    fn is_available(&self) -> bool;

    /// Recognize up to `max_pages` pages of the PDF and return the raw
    /// concatenated text. Runs on a blocking worker; the caller bounds it
    /// with a timeout.
    async fn recognize(&self, pdf_path: &Path, max_pages: usize) -> Result<String>;
}

const OCR_DPI: u32 = 300;

/// `pdftoppm` + `tesseract` CLI backend (`--oem 3 --psm 6`, English, 300 DPI).
pub struct TesseractEngine {
    available: bool,
}

impl TesseractEngine {
    pub fn probe() -> Self {
        // poppler tools only understand -v; tesseract wants --version.
        let available = command_exists("pdftoppm", "-v") && command_exists("tesseract", "--version");
        if available {
            info!("OCR backend available (pdftoppm + tesseract)");
        } else {
            info!("OCR backend not installed; scanned documents will degrade");
        }
        Self { available }
    }
}

fn command_exists(name: &str, version_flag: &str) -> bool {
    Command::new(name)
        .arg(version_flag)
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn recognize(&self, pdf_path: &Path, max_pages: usize) -> Result<String> {
        if !self.available {
            bail!("OCR backend not installed");
        }
        let pdf_path = pdf_path.to_path_buf();
        tokio::task::spawn_blocking(move || recognize_blocking(&pdf_path, max_pages))
            .await
            .context("OCR worker panicked")?
    }
}

fn recognize_blocking(pdf_path: &Path, max_pages: usize) -> Result<String> {
    let workdir = tempfile::tempdir().context("failed to create OCR scratch dir")?;
    let prefix = workdir.path().join("page");

    let status = Command::new("pdftoppm")
        .arg("-png")
        .arg("-r")
        .arg(OCR_DPI.to_string())
        .arg("-f")
        .arg("1")
        .arg("-l")
        .arg(max_pages.to_string())
        .arg(pdf_path)
        .arg(&prefix)
        .status()
        .context("failed to spawn pdftoppm")?;
    if !status.success() {
        bail!("pdftoppm exited with {status}");
    }

    let mut pages: Vec<PathBuf> = std::fs::read_dir(workdir.path())
        .context("failed to list rendered pages")?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().map(|ext| ext == "png").unwrap_or(false))
        .collect();
    pages.sort();
    if pages.is_empty() {
        bail!("pdftoppm produced no pages");
    }

    let mut all_text = Vec::with_capacity(pages.len());
    for page in pages.iter().take(max_pages) {
        let output = Command::new("tesseract")
            .arg(page)
            .arg("stdout")
            .arg("-l")
            .arg("eng")
            .arg("--oem")
            .arg("3")
            .arg("--psm")
            .arg("6")
            .output()
            .context("failed to spawn tesseract")?;
        if !output.status.success() {
            bail!("tesseract exited with {}", output.status);
        }
        all_text.push(String::from_utf8_lossy(&output.stdout).into_owned());
    }

    Ok(all_text.join("\n\n"))
}
