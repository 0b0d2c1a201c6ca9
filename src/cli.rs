//! Command-line surface.
//!
//! Three subcommands sharing the same positional shape: zero or more paths,
//! where nothing or a single directory means interactive mode.

use clap::{Args, Parser, Subcommand};

use crate::error::{PdfMixError, Result};

/// Merge, encrypt, and decrypt PDF files from the terminal.
#[derive(Parser, Debug)]
#[command(name = "pdfmix")]
#[command(version)]
#[command(about = "Merge, encrypt, and decrypt PDF files", long_about = None)]
pub struct Cli {
    /// The operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge PDFs together.
    ///
    /// With no arguments, pick files interactively from the current
    /// directory; with a single folder argument, pick from that folder;
    /// otherwise merge the listed files in order.
    Merge(MergeArgs),

    /// Encrypt PDF files with a password.
    Encrypt(CryptArgs),

    /// Decrypt password-protected PDF files.
    Decrypt(CryptArgs),
}

/// Arguments of the `merge` subcommand.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Files to merge, or a single folder to pick from interactively.
    #[arg(value_name = "FILE|FOLDER")]
    pub inputs: Vec<String>,

    /// Custom name for the merged PDF file.
    #[arg(short, long, default_value = "merged_output")]
    pub name: String,

    /// Password to encrypt the merged PDF file.
    #[arg(short, long)]
    pub password: Option<String>,

    /// Reorder the PDF files before merging.
    #[arg(short, long)]
    pub order: bool,

    /// Prompt for an encryption password interactively.
    #[arg(short, long, conflicts_with = "password")]
    pub encrypt: bool,
}

impl MergeArgs {
    /// Re-check flag conflicts for programmatically constructed arguments.
    ///
    /// Clap already rejects `--password` together with `--encrypt` at parse
    /// time; this covers the library path.
    pub fn validate(&self) -> Result<()> {
        if self.encrypt && self.password.is_some() {
            return Err(PdfMixError::ConflictingPasswordFlags);
        }
        Ok(())
    }
}

/// Arguments of the `encrypt` and `decrypt` subcommands.
#[derive(Args, Debug)]
pub struct CryptArgs {
    /// Files to process, or a single folder to pick from interactively.
    #[arg(value_name = "FILE|FOLDER")]
    pub inputs: Vec<String>,

    /// Password to use. Prompted for interactively when omitted.
    #[arg(short, long)]
    pub password: Option<String>,

    /// Prefix prepended to each output file name.
    ///
    /// Without a prefix, files whose input lives in the working directory
    /// are overwritten in place.
    #[arg(short = 'P', long, default_value = "")]
    pub prefix: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_defaults() {
        let cli = Cli::try_parse_from(["pdfmix", "merge", "a.pdf", "b.pdf"]).unwrap();
        let Command::Merge(args) = cli.command else {
            panic!("expected merge command");
        };
        assert_eq!(args.inputs, vec!["a.pdf".to_string(), "b.pdf".to_string()]);
        assert_eq!(args.name, "merged_output");
        assert!(args.password.is_none());
        assert!(!args.order);
        assert!(!args.encrypt);
    }

    #[test]
    fn test_merge_password_and_encrypt_conflict_at_parse() {
        let result = Cli::try_parse_from(["pdfmix", "merge", "-p", "pw", "--encrypt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_validate_conflict() {
        let args = MergeArgs {
            inputs: vec![],
            name: "merged_output".to_string(),
            password: Some("pw".to_string()),
            order: false,
            encrypt: true,
        };
        assert!(matches!(
            args.validate(),
            Err(PdfMixError::ConflictingPasswordFlags)
        ));
    }

    #[test]
    fn test_merge_validate_password_alone_is_fine() {
        let args = MergeArgs {
            inputs: vec![],
            name: "merged_output".to_string(),
            password: Some("pw".to_string()),
            order: false,
            encrypt: false,
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_encrypt_flags() {
        let cli =
            Cli::try_parse_from(["pdfmix", "encrypt", "a.pdf", "-p", "pw", "-P", "locked-"])
                .unwrap();
        let Command::Encrypt(args) = cli.command else {
            panic!("expected encrypt command");
        };
        assert_eq!(args.password.as_deref(), Some("pw"));
        assert_eq!(args.prefix, "locked-");
    }

    #[test]
    fn test_decrypt_allows_no_arguments() {
        let cli = Cli::try_parse_from(["pdfmix", "decrypt"]).unwrap();
        let Command::Decrypt(args) = cli.command else {
            panic!("expected decrypt command");
        };
        assert!(args.inputs.is_empty());
        assert_eq!(args.prefix, "");
    }
}
