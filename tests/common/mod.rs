//! Shared helpers for integration tests.
//!
//! Test PDFs are generated with lopdf instead of shipping binary fixtures.

#![allow(dead_code)]

use std::env;
use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

/// Write a minimal valid PDF with the given number of pages.
pub fn write_pdf(path: &Path, pages: usize) {
    assert!(pages > 0, "a PDF needs at least one page");

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for number in 1..=pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(format!("page {number}"))]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).unwrap();
}

/// Number of pages in the PDF at `path`.
pub fn page_count(path: &Path) -> usize {
    Document::load(path).unwrap().get_pages().len()
}

/// Whether the PDF at `path` carries encryption.
pub fn is_encrypted(path: &Path) -> bool {
    Document::load(path).unwrap().is_encrypted()
}

/// Run `body` with the process working directory set to `dir`.
///
/// Callers must hold the `serial_test` lock; the working directory is
/// process-global state.
pub fn with_cwd<T>(dir: &Path, body: impl FnOnce() -> T) -> T {
    let previous = env::current_dir().unwrap();
    env::set_current_dir(dir).unwrap();
    let result = body();
    env::set_current_dir(previous).unwrap();
    result
}

/// Absolute path of `name` inside `dir`, as a `String` argument.
pub fn arg(dir: &Path, name: &str) -> String {
    dir.join(name).to_str().unwrap().to_string()
}

/// Convenience for building `PathBuf` arguments.
pub fn path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}
