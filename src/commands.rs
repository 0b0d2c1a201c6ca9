//! The orchestrator.
//!
//! Each command runs the same backbone: resolve arguments, drive whichever
//! interactive stages apply, then hand the engine full paths. Any error
//! aborts the invocation; later stages never run after a failure.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::{Cli, Command, CryptArgs, MergeArgs};
use crate::engine::PdfEngine;
use crate::error::{PdfMixError, Result};
use crate::op::Operation;
use crate::output::Reporter;
use crate::resolver::{ResolvedArgs, resolve_args};
use crate::ui::{
    PasswordModel, PasswordOutcome, ReorderModel, ReorderOutcome, SelectModel, SelectOutcome,
    Theme, run_model,
};

/// Dispatch a parsed invocation.
pub fn run(cli: Cli, reporter: &Reporter) -> Result<()> {
    match cli.command {
        Command::Merge(args) => merge(&args, reporter),
        Command::Encrypt(args) => crypt(&args, Operation::Encrypt, reporter),
        Command::Decrypt(args) => crypt(&args, Operation::Decrypt, reporter),
    }
}

/// Run the `merge` command.
pub fn merge(args: &MergeArgs, reporter: &Reporter) -> Result<()> {
    args.validate()?;

    let resolved = resolve_args(&args.inputs)?;
    let theme = Theme::default();

    let selected = if resolved.interactive {
        select_for_merge(&resolved, &theme)?
    } else {
        resolved.pdfs.clone()
    };

    let ordered = if args.order {
        match run_model(ReorderModel::new(selected), &theme)? {
            ReorderOutcome::Confirmed(items) => items,
            ReorderOutcome::Cancelled => return Err(PdfMixError::Cancelled),
        }
    } else {
        selected
    };

    let inputs = resolved.qualified(&ordered);
    let save_dir = env::current_dir()?;
    let output = save_dir.join(output_file_name(&args.name));
    debug!(inputs = inputs.len(), output = %output.display(), "merging");

    let engine = PdfEngine::new();
    engine.merge_files(&inputs, &output)?;

    let password = match (&args.password, args.encrypt) {
        (Some(password), _) => Some(password.clone()),
        (None, true) => match run_model(PasswordModel::new(Operation::Encrypt), &theme)? {
            PasswordOutcome::Submitted(password) => Some(password),
            PasswordOutcome::Cancelled => return Err(PdfMixError::Cancelled),
        },
        (None, false) => None,
    };

    if let Some(password) = password {
        // Replaces the unencrypted intermediate in one overwrite; the
        // document is fully in memory before the path is reopened.
        engine.encrypt_file(&output, &output, &password)?;
        reporter.success(&format!(
            "PDF files merged and encrypted successfully to: {}",
            output.display()
        ));
    } else {
        reporter.info(&format!(
            "PDF files merged successfully to: {}",
            output.display()
        ));
    }

    Ok(())
}

/// Loop the selection UI until it confirms at least two files.
///
/// Auto-rejection is terminal: the candidate pool cannot change within one
/// invocation, so retrying it could never succeed. A confirmed selection
/// that is too small re-runs the UI.
fn select_for_merge(resolved: &ResolvedArgs, theme: &Theme) -> Result<Vec<String>> {
    loop {
        let model = SelectModel::new(
            resolved.pdfs.clone(),
            resolved.dir.display().to_string(),
            Operation::Merge,
        );
        match run_model(model, theme)? {
            SelectOutcome::Confirmed(selection) if selection.len() >= 2 => return Ok(selection),
            SelectOutcome::Confirmed(_) => continue,
            SelectOutcome::Cancelled => return Err(PdfMixError::Cancelled),
            SelectOutcome::AutoRejected(reason) => return Err(PdfMixError::NothingToSelect(reason)),
        }
    }
}

/// Run the `encrypt` or `decrypt` command.
pub fn crypt(args: &CryptArgs, op: Operation, reporter: &Reporter) -> Result<()> {
    let resolved = resolve_args(&args.inputs)?;
    let theme = Theme::default();

    let selected = if resolved.interactive {
        let model = SelectModel::new(
            resolved.pdfs.clone(),
            resolved.dir.display().to_string(),
            op,
        );
        match run_model(model, &theme)? {
            SelectOutcome::Confirmed(selection) => {
                if selection.is_empty() {
                    reporter.info("No PDFs were selected. Exiting.");
                    return Ok(());
                }
                selection
            }
            SelectOutcome::Cancelled => return Err(PdfMixError::Cancelled),
            SelectOutcome::AutoRejected(reason) => return Err(PdfMixError::NothingToSelect(reason)),
        }
    } else {
        resolved.pdfs.clone()
    };

    let password = match &args.password {
        Some(password) => password.clone(),
        None => match run_model(PasswordModel::new(op), &theme)? {
            PasswordOutcome::Submitted(password) => password,
            PasswordOutcome::Cancelled => return Err(PdfMixError::Cancelled),
        },
    };

    let engine = PdfEngine::new();
    let save_dir = env::current_dir()?;

    for input in resolved.qualified(&selected) {
        let output = save_dir.join(prefixed_file_name(&input, &args.prefix));
        debug!(input = %input.display(), output = %output.display(), op = %op, "processing file");

        match op {
            Operation::Encrypt => engine.encrypt_file(&input, &output, &password)?,
            Operation::Decrypt => engine.decrypt_file(&input, &output, &password)?,
            Operation::Merge => unreachable!("merge is not a per-file operation"),
        }

        reporter.success(&format!(
            "PDF file {}ed successfully to: {}",
            op.verb(),
            output.display()
        ));
    }

    Ok(())
}

/// Resolve the merged output's file name, appending `.pdf` unless the name
/// already carries the suffix.
fn output_file_name(name: &str) -> String {
    if name.to_lowercase().ends_with(".pdf") {
        name.to_string()
    } else {
        format!("{name}.pdf")
    }
}

/// Output name for one encrypt/decrypt input: the prefix glued onto the
/// input's file name.
fn prefixed_file_name(input: &Path, prefix: &str) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    PathBuf::from(format!("{prefix}{file_name}"))
}
