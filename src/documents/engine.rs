//! Typst rendering engine.
//!
//! Handles the low-level details of writing Typst source and sibling assets
//! to a temporary directory, invoking the compiler, and reading the output
//! PDF back.

use std::fs;
use std::process::Command;
use tempfile::{tempdir, TempDir};

use super::common::{sanitize_filename, today_spelled_out};
use super::{DocumentAsset, DocumentError, GeneratedDocument};

/// Stateless engine for rendering Typst source to PDF.
pub struct TypstRenderEngine;

impl TypstRenderEngine {
    /// Render a Typst string to a PDF document.
    ///
    /// # Arguments
    /// * `template_filename` - The name of the source file (e.g., "residency.typ").
    /// * `source` - The complete, rendered Typst source.
    /// * `assets` - Binary files (seal images) referenced by the source.
    /// * `output_name_base` - Base name for the output file (e.g., resident's name).
    /// * `date_override` - Optional spelled-out issue date; defaults to today.
    pub fn render(
        template_filename: &str,
        source: &str,
        assets: &[DocumentAsset],
        output_name_base: &str,
        date_override: Option<String>,
    ) -> Result<GeneratedDocument, DocumentError> {
        let issued_on = date_override.unwrap_or_else(today_spelled_out);

        let temp_dir = tempdir().map_err(DocumentError::TempDir)?;
        let typ_path = temp_dir.path().join(template_filename);
        fs::write(&typ_path, source).map_err(DocumentError::WriteSource)?;

        for asset in assets {
            let asset_path = temp_dir.path().join(&asset.filename);
            fs::write(&asset_path, &asset.bytes)
                .map_err(|e| DocumentError::WriteAsset(asset.filename.clone(), e))?;
        }

        let safe_name = sanitize_filename(output_name_base, "document");
        let output_filename = format!("output-{}.pdf", safe_name);

        let pdf = compile_typst_to_pdf(&temp_dir, template_filename, &output_filename)?;

        let final_filename = format!(
            "{}-{}.pdf",
            sanitize_filename(template_filename.trim_end_matches(".typ"), "certificate"),
            safe_name
        );

        Ok(GeneratedDocument {
            filename: final_filename,
            pdf,
            issued_on,
        })
    }
}

/// Compile a Typst source file to PDF.
fn compile_typst_to_pdf(
    temp_dir: &TempDir,
    typ_filename: &str,
    output_filename: &str,
) -> Result<Vec<u8>, DocumentError> {
    let typ_path = temp_dir.path().join(typ_filename);
    let output_path = temp_dir.path().join(output_filename);

    let status = Command::new("typst")
        .arg("compile")
        .arg(&typ_path)
        .arg(&output_path)
        .current_dir(temp_dir.path())
        .status()
        .map_err(DocumentError::TypstIo)?;

    if !status.success() {
        let code = status.code().unwrap_or(-1);
        return Err(DocumentError::TypstExit(code));
    }

    fs::read(&output_path).map_err(DocumentError::ReadPdf)
}
