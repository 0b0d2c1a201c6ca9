//! The active operation mode.
//!
//! One [`Operation`] tag is fixed per command invocation. It drives the copy
//! shown by the interactive stages and the minimum-candidate policy applied
//! before a selection UI opens.

use std::fmt;

/// The operation a command invocation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Merge several PDFs into one document.
    Merge,
    /// Encrypt PDFs with a password.
    Encrypt,
    /// Decrypt password-protected PDFs.
    Decrypt,
}

impl Operation {
    /// Lowercase verb for messages ("merge", "encrypt", "decrypt").
    pub fn verb(self) -> &'static str {
        match self {
            Operation::Merge => "merge",
            Operation::Encrypt => "encrypt",
            Operation::Decrypt => "decrypt",
        }
    }

    /// Question shown above the selection checklist.
    pub fn select_prompt(self) -> &'static str {
        match self {
            Operation::Merge => "Which PDFs do you want to merge together?",
            Operation::Encrypt => "Which PDFs do you want to encrypt?",
            Operation::Decrypt => "Which PDFs do you want to decrypt?",
        }
    }

    /// Reject an insufficient candidate pool before the selection UI opens.
    ///
    /// Merging needs at least two candidates; encrypting or decrypting needs
    /// at least one. Returns the rejection message, or `None` when the pool
    /// is large enough.
    pub fn auto_reject(self, candidates: usize) -> Option<String> {
        match self {
            Operation::Merge if candidates <= 1 => {
                Some("need at least 2 PDFs to merge".to_string())
            }
            Operation::Encrypt | Operation::Decrypt if candidates == 0 => {
                Some(format!("no PDFs found to {}", self.verb()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Operation::Merge, 0, true)]
    #[case(Operation::Merge, 1, true)]
    #[case(Operation::Merge, 2, false)]
    #[case(Operation::Encrypt, 0, true)]
    #[case(Operation::Encrypt, 1, false)]
    #[case(Operation::Decrypt, 0, true)]
    #[case(Operation::Decrypt, 3, false)]
    fn test_auto_reject_policy(
        #[case] op: Operation,
        #[case] candidates: usize,
        #[case] rejected: bool,
    ) {
        assert_eq!(op.auto_reject(candidates).is_some(), rejected);
    }

    #[test]
    fn test_auto_reject_messages() {
        assert_eq!(
            Operation::Merge.auto_reject(1).unwrap(),
            "need at least 2 PDFs to merge"
        );
        assert_eq!(
            Operation::Decrypt.auto_reject(0).unwrap(),
            "no PDFs found to decrypt"
        );
    }

    #[test]
    fn test_display_is_verb() {
        assert_eq!(Operation::Merge.to_string(), "merge");
        assert_eq!(Operation::Encrypt.to_string(), "encrypt");
        assert_eq!(Operation::Decrypt.to_string(), "decrypt");
    }
}
