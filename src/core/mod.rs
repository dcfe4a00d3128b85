// pixback/src/core/mod.rs
mod collector;

pub use collector::Collector;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The only filename collected from each entity directory.
pub const SPRITE_FILE: &str = "back.png";

/// Caption written next to every collected sprite.
pub const CAPTION: &str = "pixback creature, back view, pixel art sprite";

pub const TARGET_WIDTH: u32 = 512;
pub const TARGET_HEIGHT: u32 = 512;

#[derive(Debug, Clone)]
pub struct CollectConfig {
    pub project_root: PathBuf,
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub caption: String,
}

impl CollectConfig {
    /// Standard layout: sprites under `<root>/graphics/pokemon`, output
    /// under `<root>/backs`, upscaled to 512x512.
    pub fn for_project_root(root: &Path) -> Self {
        Self {
            project_root: root.to_path_buf(),
            source_dir: root.join("graphics").join("pokemon"),
            dest_dir: root.join("backs"),
            width: TARGET_WIDTH,
            height: TARGET_HEIGHT,
            caption: CAPTION.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CollectStats {
    pub copied: usize,
    /// One entry per output file left at its original dimensions, with the
    /// reason the resize did not happen.
    pub resize_warnings: Vec<(PathBuf, String)>,
}

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("source directory does not exist: {0}")]
    MissingSourceRoot(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot locate the running executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("cannot derive a project root from {0}")]
    ProjectRoot(PathBuf),
}

pub type Result<T> = std::result::Result<T, CollectError>;
