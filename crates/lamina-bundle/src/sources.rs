//! Source file listing and reading.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::bundler::BundleError;

/// List source file names directly under `dir`, sorted by name.
///
/// The listing is flat; subdirectories are skipped. Sorting makes the
/// listing order deterministic across platforms, and that order carries
/// through to the generated documents.
pub fn list_sources(dir: &Path) -> Result<Vec<String>, BundleError> {
    if !dir.is_dir() {
        return Err(BundleError::Read(format!(
            "Source directory not found: {}",
            dir.display()
        )));
    }

    let mut names = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

/// Read the full text contents of one source file.
pub fn read_source(dir: &Path, name: &str) -> Result<String, BundleError> {
    let path = dir.join(name);
    fs::read_to_string(&path).map_err(|e| BundleError::Read(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lists_files_sorted_by_name() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("b.js"), "2").unwrap();
        fs::write(temp.path().join("a.js"), "1").unwrap();

        let names = list_sources(temp.path()).unwrap();
        assert_eq!(names, vec!["a.js", "b.js"]);
    }

    #[test]
    fn skips_subdirectories() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.js"), "1").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("b.js"), "2").unwrap();

        let names = list_sources(temp.path()).unwrap();
        assert_eq!(names, vec!["a.js"]);
    }

    #[test]
    fn missing_directory_errors() {
        let temp = tempdir().unwrap();
        assert!(list_sources(&temp.path().join("absent")).is_err());
    }

    #[test]
    fn reads_source_contents() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("x.js"), "console.log(1)").unwrap();

        let content = read_source(temp.path(), "x.js").unwrap();
        assert_eq!(content, "console.log(1)");
    }
}
