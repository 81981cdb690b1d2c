//! Symbol discovery.
//!
//! Symbols come either from a directory of `.png` files (one symbol per
//! file, named by the file stem) or from generated names when no directory
//! is configured. Pixels are never read here; the image path is stored in
//! the symbol's `path` attribute for the front end.

use std::path::Path;

use tracing::{debug, info};

use crate::cards::{Symbol, PATH_ATTRIBUTE};
use crate::error::{Error, Result};

const IMAGE_EXTENSION: &str = "png";

/// Scan a directory for symbol images.
///
/// Returns symbols sorted by name so the deck is the same on every run.
/// Subdirectories and other file types are skipped.
pub fn scan(dir: &Path) -> Result<Vec<Symbol>> {
    let io_error = |source: std::io::Error| Error::ConfigIo {
        path: dir.to_path_buf(),
        source,
    };

    let mut symbols = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if !path.is_file() {
            continue;
        }
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION));
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if is_image {
            symbols.push(Symbol::new(stem).with_attr(PATH_ATTRIBUTE, path.display().to_string()));
        } else {
            debug!(path = %path.display(), "skipping non-image file");
        }
    }

    symbols.sort_by(|a, b| a.name.cmp(&b.name));
    info!(dir = %dir.display(), count = symbols.len(), "found symbol images");
    Ok(symbols)
}

/// Spreadsheet-style name for a zero-based index: A..Z, AA..AZ, BA...
#[must_use]
pub fn generated_name(index: usize) -> String {
    let mut n = index + 1;
    let mut name = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}

/// Payload-free symbols with generated names.
#[must_use]
pub fn generated(count: usize) -> Vec<Symbol> {
    (0..count).map(|i| Symbol::new(generated_name(i))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_names() {
        assert_eq!(generated_name(0), "A");
        assert_eq!(generated_name(6), "G");
        assert_eq!(generated_name(25), "Z");
        assert_eq!(generated_name(26), "AA");
        assert_eq!(generated_name(27), "AB");
        assert_eq!(generated_name(52), "BA");
        assert_eq!(generated_name(701), "ZZ");
        assert_eq!(generated_name(702), "AAA");
    }

    #[test]
    fn test_generated_are_distinct() {
        let symbols = generated(183);
        let names: rustc_hash::FxHashSet<_> = symbols.iter().map(|s| s.name.clone()).collect();
        assert_eq!(names.len(), 183);
    }

    #[test]
    fn test_scan_directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["moon.png", "apple.PNG", "notes.txt", "sun.png"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let symbols = scan(dir.path()).unwrap();
        let names: Vec<_> = symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["apple", "moon", "sun"]);

        let path = symbols[1].attributes.get_text(PATH_ATTRIBUTE).unwrap();
        assert!(path.ends_with("moon.png"));
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = scan(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, Error::ConfigIo { .. }));
    }
}
