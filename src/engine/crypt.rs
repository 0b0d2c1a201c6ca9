//! Document encryption and decryption.
//!
//! AES-256 (the V5 security handler) with the same owner and user password
//! and all permissions granted, matching the tool's single-password model.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use lopdf::encryption::crypt_filters::{Aes256CryptFilter, CryptFilter};
use lopdf::encryption::{EncryptionState, EncryptionVersion, Permissions};
use rand::Rng as _;
use tracing::debug;

use super::{load_document, save_document};
use crate::error::{PdfMixError, Result};

const CRYPT_FILTER_NAME: &[u8] = b"StdCF";

/// Encrypt `input` and write the encrypted document to `output`.
pub(super) fn encrypt_file(input: &Path, output: &Path, password: &str) -> Result<()> {
    let mut doc = load_document(input)?;

    if doc.is_encrypted() {
        return Err(PdfMixError::AlreadyEncrypted {
            path: input.to_path_buf(),
        });
    }

    let mut crypt_filters: BTreeMap<Vec<u8>, Arc<dyn CryptFilter>> = BTreeMap::new();
    crypt_filters.insert(CRYPT_FILTER_NAME.to_vec(), Arc::new(Aes256CryptFilter));

    let mut file_encryption_key = [0u8; 32];
    rand::rng().fill(&mut file_encryption_key);

    let version = EncryptionVersion::V5 {
        encrypt_metadata: true,
        crypt_filters,
        file_encryption_key: &file_encryption_key,
        stream_filter: CRYPT_FILTER_NAME.to_vec(),
        string_filter: CRYPT_FILTER_NAME.to_vec(),
        owner_password: password,
        user_password: password,
        permissions: Permissions::all(),
    };

    let state =
        EncryptionState::try_from(version).map_err(|err| PdfMixError::EncryptionFailed {
            path: input.to_path_buf(),
            reason: err.to_string(),
        })?;

    doc.encrypt(&state)
        .map_err(|err| PdfMixError::EncryptionFailed {
            path: input.to_path_buf(),
            reason: err.to_string(),
        })?;

    debug!(input = %input.display(), output = %output.display(), "encrypted document");
    save_document(&mut doc, output)
}

/// Decrypt `input` with `password` and write the plain document to `output`.
pub(super) fn decrypt_file(input: &Path, output: &Path, password: &str) -> Result<()> {
    let mut doc = load_document(input)?;

    if !doc.is_encrypted() {
        return Err(PdfMixError::NotEncrypted {
            path: input.to_path_buf(),
        });
    }

    doc.decrypt(password)
        .map_err(|err| PdfMixError::DecryptionFailed {
            path: input.to_path_buf(),
            reason: err.to_string(),
        })?;

    debug!(input = %input.display(), output = %output.display(), "decrypted document");
    save_document(&mut doc, output)
}
