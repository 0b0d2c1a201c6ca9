//! The PDF engine seam.
//!
//! All byte-level PDF work happens behind [`PdfEngine`], backed by `lopdf`.
//! The rest of the crate only sees the four calls the orchestrator needs:
//! merge, encrypt, decrypt, validate. Output paths are create-or-overwrite.

mod crypt;
mod merge;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lopdf::Document;

use crate::error::{PdfMixError, Result};

/// Handle to the PDF engine.
#[derive(Debug, Default)]
pub struct PdfEngine;

impl PdfEngine {
    /// Create an engine handle.
    pub fn new() -> Self {
        Self
    }

    /// Merge `inputs` in order into a single document at `output`.
    ///
    /// # Errors
    ///
    /// Fails when fewer than two inputs are given, when any input is
    /// missing or unreadable, or when the merged output does not validate.
    pub fn merge_files(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        merge::merge_files(inputs, output)
    }

    /// Encrypt `input` with AES-256 and write the result to `output`.
    ///
    /// Owner and user password are the same. Refuses inputs that are
    /// already encrypted, before anything is written.
    pub fn encrypt_file(&self, input: &Path, output: &Path, password: &str) -> Result<()> {
        crypt::encrypt_file(input, output, password)
    }

    /// Decrypt `input` with `password` and write the result to `output`.
    ///
    /// Refuses inputs that are not encrypted. A wrong password surfaces as
    /// [`PdfMixError::DecryptionFailed`].
    pub fn decrypt_file(&self, input: &Path, output: &Path, password: &str) -> Result<()> {
        crypt::decrypt_file(input, output, password)
    }

    /// Check that `path` parses as a PDF with at least one page.
    pub fn validate_file(&self, path: &Path) -> Result<()> {
        let doc = load_document(path)?;
        if doc.get_pages().is_empty() {
            return Err(PdfMixError::CorruptedPdf {
                path: path.to_path_buf(),
                details: "document has no pages".to_string(),
            });
        }
        Ok(())
    }
}

pub(crate) fn load_document(path: &Path) -> Result<Document> {
    Document::load(path).map_err(|err| PdfMixError::FailedToLoadPdf {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

pub(crate) fn save_document(doc: &mut Document, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|err| PdfMixError::FailedToCreateOutput {
        path: path.to_path_buf(),
        source: err,
    })?;

    let mut writer = BufWriter::new(file);
    doc.save_to(&mut writer)
        .map_err(|err| PdfMixError::FailedToWrite {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
    writer.flush().map_err(|err| PdfMixError::FailedToWrite {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    Ok(())
}
