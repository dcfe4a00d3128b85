// pixback/src/utils/mod.rs
use crate::core::{CollectError, Result};
use std::path::{Path, PathBuf};

/// Project root derived from the installed binary's location: the parent of
/// the directory holding the executable.
pub fn default_project_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(CollectError::CurrentExe)?;
    let root = exe
        .parent()
        .and_then(|bin_dir| bin_dir.parent())
        .ok_or_else(|| CollectError::ProjectRoot(exe.clone()))?;
    Ok(root.to_path_buf())
}

/// Zero-padded output stem: `back0001`, `back0002`, ...
pub fn numbered_stem(index: usize) -> String {
    format!("back{index:04}")
}

/// Path relative to `root` for display, or the path itself when it is not
/// under `root`.
pub fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_stem_is_zero_padded() {
        assert_eq!(numbered_stem(1), "back0001");
        assert_eq!(numbered_stem(42), "back0042");
        assert_eq!(numbered_stem(1234), "back1234");
        assert_eq!(numbered_stem(99999), "back99999");
    }

    #[test]
    fn test_relative_to_strips_the_root() {
        let root = Path::new("/proj");
        let path = Path::new("/proj/graphics/pokemon/abra/back.png");
        assert_eq!(
            relative_to(path, root),
            Path::new("graphics/pokemon/abra/back.png")
        );
    }

    #[test]
    fn test_relative_to_leaves_foreign_paths_alone() {
        let root = Path::new("/proj");
        let path = Path::new("/elsewhere/back.png");
        assert_eq!(relative_to(path, root), path);
    }
}
