//! pdfmix - merge, encrypt, and decrypt PDF files from the terminal.
//!
//! The crate splits into three layers:
//!
//! - [`resolver`] classifies positional arguments into interactive mode
//!   (nothing given, or a single folder) or an explicit file list.
//! - [`ui`] holds the interactive stages: a selection checklist, a
//!   reordering list, and a masked password form, all driven by one modal
//!   event loop.
//! - [`engine`] wraps the PDF engine (`lopdf`) behind the four calls the
//!   orchestrator in [`commands`] needs.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmix::engine::PdfEngine;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> pdfmix::Result<()> {
//! let engine = PdfEngine::new();
//! engine.merge_files(
//!     &[PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!     Path::new("merged_output.pdf"),
//! )?;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod op;
pub mod output;
pub mod resolver;
pub mod ui;

pub use error::{PdfMixError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
