//! Document merging.

use std::path::{Path, PathBuf};

use lopdf::{Document, Object, ObjectId};
use tracing::debug;

use super::{load_document, save_document};
use crate::error::{PdfMixError, Result};

/// Merge the documents at `inputs`, in order, into `output`.
pub(super) fn merge_files(inputs: &[PathBuf], output: &Path) -> Result<()> {
    if inputs.is_empty() {
        return Err(PdfMixError::NoFilesToMerge);
    }
    if inputs.len() == 1 {
        return Err(PdfMixError::NotEnoughFilesToMerge);
    }

    for path in inputs {
        if !path.exists() {
            return Err(PdfMixError::FileNotFound {
                path: path.clone(),
            });
        }
        if !path.is_file() {
            return Err(PdfMixError::DirectoryArgument {
                path: path.clone(),
            });
        }
    }

    let mut merged = load_document(&inputs[0])?;
    debug!(path = %inputs[0].display(), pages = merged.get_pages().len(), "loaded base document");

    let mut max_id = merged.max_id;

    for path in &inputs[1..] {
        let mut doc = load_document(path)?;
        debug!(path = %path.display(), pages = doc.get_pages().len(), "appending document");

        // Shift object ids past the ids already in use.
        doc.renumber_objects_with(max_id + 1);
        max_id = doc.max_id;

        let new_pages: Vec<ObjectId> = doc.get_pages().into_iter().map(|(_, id)| id).collect();
        let page_count = new_pages.len();

        merged.objects.extend(doc.objects);
        append_pages(&mut merged, new_pages, page_count);
    }

    merged.renumber_objects();
    merged.compress();

    let total_pages = merged.get_pages().len();
    debug!(pages = total_pages, output = %output.display(), "writing merged document");

    save_document(&mut merged, output)?;

    // Final guard: the written file must itself be a readable PDF.
    let written = load_document(output)?;
    if written.get_pages().is_empty() {
        return Err(PdfMixError::CorruptedPdf {
            path: output.to_path_buf(),
            details: "merged document has no pages".to_string(),
        });
    }

    Ok(())
}

/// Splice `pages` into the merged document's page tree.
fn append_pages(merged: &mut Document, pages: Vec<ObjectId>, count: usize) {
    let pages_id = match merged
        .catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(|pages| pages.as_reference())
    {
        Ok(id) => id,
        Err(_) => return,
    };

    if let Ok(Object::Dictionary(pages_dict)) = merged.get_object_mut(pages_id) {
        if let Ok(Object::Array(kids)) = pages_dict.get_mut(b"Kids") {
            for page_id in pages {
                kids.push(Object::Reference(page_id));
            }
        }

        if let Ok(Object::Integer(existing)) = pages_dict.get(b"Count") {
            let new_count = existing + count as i64;
            pages_dict.set("Count", Object::Integer(new_count));
        }
    }
}
