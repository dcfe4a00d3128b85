// pixback/src/processors/scanner.rs
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Immediate subdirectories of `source_dir`, sorted by name so output
/// numbering is reproducible across runs. Files and deeper levels are
/// never yielded.
pub fn scan_entity_dirs(source_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_yields_only_direct_subdirectories() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("bulbasaur").join("mega")).unwrap();
        fs::create_dir(temp.path().join("charmander")).unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();

        let dirs = scan_entity_dirs(temp.path());

        assert_eq!(
            dirs,
            vec![
                temp.path().join("bulbasaur"),
                temp.path().join("charmander"),
            ]
        );
    }

    #[test]
    fn test_sorted_by_name() {
        let temp = tempfile::tempdir().unwrap();
        for name in ["zubat", "abra", "mew"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }

        let names: Vec<_> = scan_entity_dirs(temp.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_os_string())
            .collect();

        assert_eq!(names, vec!["abra", "mew", "zubat"]);
    }

    #[test]
    fn test_missing_directory_yields_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let dirs = scan_entity_dirs(&temp.path().join("nope"));
        assert!(dirs.is_empty());
    }
}
