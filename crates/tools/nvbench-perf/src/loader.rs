//! Reading result documents from disk.

use std::path::Path;

use crate::error::{CompareError, Result};
use crate::model::ResultDocument;

/// Read and parse one result file.
///
/// # Errors
///
/// Returns [`CompareError::Io`] if the file cannot be read and
/// [`CompareError::Parse`] if it is not a valid result document.
pub fn load_document(path: &Path) -> Result<ResultDocument> {
    let json = std::fs::read_to_string(path).map_err(|source| CompareError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&json, path)
}

/// Parse a result document from JSON text. `path` is only used for errors.
///
/// # Errors
///
/// Returns [`CompareError::Parse`] if `json` is not a valid result document.
pub fn parse_document(json: &str, path: &Path) -> Result<ResultDocument> {
    serde_json::from_str(json).map_err(|source| CompareError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Check that two documents were recorded on the same devices.
///
/// # Errors
///
/// Returns [`CompareError::DeviceMismatch`] unless the `devices` sections are
/// exactly equal.
pub fn check_devices(reference: &ResultDocument, compare: &ResultDocument) -> Result<()> {
    if reference.devices == compare.devices {
        Ok(())
    } else {
        Err(CompareError::DeviceMismatch)
    }
}

/// Load the reference and comparison documents and check their devices.
///
/// Both files are read in full before the device check.
///
/// # Errors
///
/// Propagates [`load_document`] failures and returns
/// [`CompareError::DeviceMismatch`] if the devices differ.
pub fn load_pair(reference: &Path, compare: &Path) -> Result<(ResultDocument, ResultDocument)> {
    let reference = load_document(reference)?;
    let compare = load_document(compare)?;
    check_devices(&reference, &compare)?;
    Ok((reference, compare))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GPU0: &str = r#"{ "devices": [{ "id": 0, "name": "GPU0" }], "benchmarks": [] }"#;
    const GPU1: &str = r#"{ "devices": [{ "id": 1, "name": "GPU1" }], "benchmarks": [] }"#;

    #[test]
    fn matching_devices_pass() {
        let a = parse_document(GPU0, Path::new("a.json")).unwrap();
        let b = parse_document(GPU0, Path::new("b.json")).unwrap();
        assert!(check_devices(&a, &b).is_ok());
    }

    #[test]
    fn differing_devices_fail() {
        let a = parse_document(GPU0, Path::new("a.json")).unwrap();
        let b = parse_document(GPU1, Path::new("b.json")).unwrap();
        assert!(matches!(check_devices(&a, &b), Err(CompareError::DeviceMismatch)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_document("{ not json", Path::new("broken.json")).unwrap_err();
        match err {
            CompareError::Parse { path, .. } => assert_eq!(path, Path::new("broken.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_benchmarks_is_parse_error() {
        let err = parse_document(r#"{ "devices": [] }"#, Path::new("x.json")).unwrap_err();
        assert!(matches!(err, CompareError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_document(Path::new("/nonexistent/nvbench/results.json")).unwrap_err();
        assert!(matches!(err, CompareError::Io { .. }));
    }
}
