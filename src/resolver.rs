//! Classification of positional arguments.
//!
//! Every command accepts either nothing (interactive, scan the working
//! directory), a single directory (interactive, scan it), or an explicit
//! list of files (non-interactive, used verbatim). This module decides
//! which of the three applies and collects the candidate PDFs.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PdfMixError, Result};

/// Outcome of argument classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArgs {
    /// Candidate PDFs: file names relative to `dir` in interactive mode,
    /// the argument paths verbatim otherwise.
    pub pdfs: Vec<String>,
    /// Directory the candidates live in. Empty in explicit-list mode.
    pub dir: PathBuf,
    /// Whether a selection UI must run.
    pub interactive: bool,
}

impl ResolvedArgs {
    /// Turn candidate names back into full paths.
    ///
    /// Interactive candidates are joined onto `dir`; explicit arguments are
    /// already paths and pass through unchanged.
    pub fn qualified(&self, names: &[String]) -> Vec<PathBuf> {
        names
            .iter()
            .map(|name| {
                if self.interactive {
                    self.dir.join(name)
                } else {
                    PathBuf::from(name)
                }
            })
            .collect()
    }
}

/// Classify the positional arguments of a command.
///
/// # Errors
///
/// Returns [`PdfMixError::FileNotFound`] when an explicit argument does not
/// exist, and [`PdfMixError::DirectoryArgument`] when a directory appears
/// among explicit file arguments.
pub fn resolve_args(args: &[String]) -> Result<ResolvedArgs> {
    if args.is_empty() {
        let dir = env::current_dir()?;
        let pdfs = pdf_files_in(&dir)?;
        debug!(count = pdfs.len(), dir = %dir.display(), "no arguments, scanning working directory");
        return Ok(ResolvedArgs {
            pdfs,
            dir,
            interactive: true,
        });
    }

    if args.len() == 1 && Path::new(&args[0]).is_dir() {
        let dir = PathBuf::from(&args[0]);
        let pdfs = pdf_files_in(&dir)?;
        debug!(count = pdfs.len(), dir = %dir.display(), "single directory argument");
        return Ok(ResolvedArgs {
            pdfs,
            dir,
            interactive: true,
        });
    }

    for arg in args {
        let meta = fs::metadata(arg).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                PdfMixError::FileNotFound {
                    path: PathBuf::from(arg),
                }
            } else {
                PdfMixError::Io(err)
            }
        })?;
        if meta.is_dir() {
            return Err(PdfMixError::DirectoryArgument {
                path: PathBuf::from(arg),
            });
        }
    }

    debug!(count = args.len(), "explicit file list");
    Ok(ResolvedArgs {
        pdfs: args.to_vec(),
        dir: PathBuf::new(),
        interactive: false,
    })
}

/// List the PDF files directly inside `dir`, sorted by name.
///
/// Matches file names case-insensitively against the `.pdf` suffix and
/// skips directories. The scan is not recursive.
pub fn pdf_files_in(dir: &Path) -> Result<Vec<String>> {
    let mut pdfs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.to_lowercase().ends_with(".pdf") {
            pdfs.push(name.to_string());
        }
    }

    pdfs.sort();
    Ok(pdfs)
}
