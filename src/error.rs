//! Error types for pdfmix.
//!
//! Every failure the tool can report goes through [`PdfMixError`]. Variants
//! are grouped by where they originate: argument resolution, the interactive
//! stages, and the PDF engine. Each variant maps to a process exit code.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfmix operations.
pub type Result<T> = std::result::Result<T, PdfMixError>;

/// Main error type for pdfmix operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfMixError {
    /// A named file or directory does not exist on disk.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// A directory was supplied among explicit file arguments.
    #[error("{} is a directory not a pdf", path.display())]
    DirectoryArgument {
        /// The offending directory path.
        path: PathBuf,
    },

    /// `--password` and `--encrypt` were both supplied.
    #[error(
        "please provide either the --password flag or use the --encrypt flag for interactive encryption"
    )]
    ConflictingPasswordFlags,

    /// The user backed out of an interactive stage.
    #[error("operation canceled")]
    Cancelled,

    /// A selection UI rejected its candidate pool before any input.
    #[error("{0}")]
    NothingToSelect(String),

    /// The merge call received an empty input list.
    #[error("no PDF files provided")]
    NoFilesToMerge,

    /// The merge call received a single input.
    #[error("please provide more than one file to merge pdfs")]
    NotEnoughFilesToMerge,

    /// A PDF could not be parsed.
    #[error("Failed to load PDF {}: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason reported by the engine.
        reason: String,
    },

    /// A PDF parsed but its structure is unusable.
    #[error("Corrupted or invalid PDF {}: {details}", path.display())]
    CorruptedPdf {
        /// Path to the corrupted PDF.
        path: PathBuf,
        /// Details about the corruption.
        details: String,
    },

    /// Encrypt was asked to encrypt an already-encrypted file.
    #[error("PDF is already encrypted: {}", path.display())]
    AlreadyEncrypted {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// Decrypt was asked to decrypt a file that is not encrypted.
    #[error("PDF is not encrypted: {}", path.display())]
    NotEncrypted {
        /// Path to the plain PDF.
        path: PathBuf,
    },

    /// The engine failed to encrypt a document.
    #[error("Failed to encrypt PDF {}: {reason}", path.display())]
    EncryptionFailed {
        /// Path to the input PDF.
        path: PathBuf,
        /// Reason reported by the engine.
        reason: String,
    },

    /// The engine failed to decrypt a document (usually a wrong password).
    #[error("Failed to decrypt PDF {}: {reason}", path.display())]
    DecryptionFailed {
        /// Path to the input PDF.
        path: PathBuf,
        /// Reason reported by the engine.
        reason: String,
    },

    /// The output file could not be created.
    #[error("Failed to create output file {}: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("Failed to write PDF {}: {reason}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Reason reported by the engine.
        reason: String,
    },

    /// An interactive stage was requested without a terminal attached.
    #[error("interactive mode requires a terminal")]
    NotATerminal,

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PdfMixError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } | Self::DirectoryArgument { .. } => 2,
            Self::FailedToLoadPdf { .. }
            | Self::CorruptedPdf { .. }
            | Self::AlreadyEncrypted { .. }
            | Self::NotEncrypted { .. } => 3,
            Self::EncryptionFailed { .. } | Self::DecryptionFailed { .. } => 6,
            Self::FailedToCreateOutput { .. } | Self::FailedToWrite { .. } | Self::Io(_) => 5,
            Self::Cancelled => 130, // Standard exit code for SIGINT
            Self::ConflictingPasswordFlags
            | Self::NothingToSelect(_)
            | Self::NoFilesToMerge
            | Self::NotEnoughFilesToMerge
            | Self::NotATerminal => 1,
        }
    }

    /// True when the error is a clean user cancellation rather than a fault.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = PdfMixError::FileNotFound {
            path: PathBuf::from("/tmp/missing.pdf"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("File not found"));
        assert!(msg.contains("missing.pdf"));
    }

    #[test]
    fn test_directory_argument_display() {
        let err = PdfMixError::DirectoryArgument {
            path: PathBuf::from("somedir"),
        };
        assert_eq!(format!("{err}"), "somedir is a directory not a pdf");
    }

    #[test]
    fn test_cancelled_display() {
        assert_eq!(format!("{}", PdfMixError::Cancelled), "operation canceled");
    }

    #[test]
    fn test_decryption_failed_display() {
        let err = PdfMixError::DecryptionFailed {
            path: PathBuf::from("secret.pdf"),
            reason: "incorrect password".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("secret.pdf"));
        assert!(msg.contains("incorrect password"));
    }

    #[test]
    fn test_exit_codes() {
        let not_found = PdfMixError::FileNotFound {
            path: PathBuf::from("x"),
        };
        assert_eq!(not_found.exit_code(), 2);
        assert_eq!(PdfMixError::NoFilesToMerge.exit_code(), 1);
        assert_eq!(PdfMixError::ConflictingPasswordFlags.exit_code(), 1);
        assert_eq!(PdfMixError::Cancelled.exit_code(), 130);

        let load = PdfMixError::FailedToLoadPdf {
            path: PathBuf::from("x"),
            reason: "bad header".to_string(),
        };
        assert_eq!(load.exit_code(), 3);
    }

    #[test]
    fn test_is_cancellation() {
        assert!(PdfMixError::Cancelled.is_cancellation());
        assert!(!PdfMixError::NoFilesToMerge.is_cancellation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: PdfMixError = io_err.into();
        assert!(matches!(err, PdfMixError::Io(_)));
    }
}
