// pixback/src/processors/resizer.rs
use std::path::{Path, PathBuf};
use std::process::Command;

/// Probe order: modern ImageMagick 7 entry point first, then the legacy
/// name still shipped by ImageMagick 6 installs.
const CANDIDATE_TOOLS: &[&str] = &["magick", "convert"];

#[derive(Debug, Clone, PartialEq)]
pub enum ResizeOutcome {
    Resized,
    /// No candidate executable was found on PATH.
    ToolUnavailable,
    /// The tool ran but did not exit zero, or could not be launched.
    Failed(String),
}

/// In-place resize via an external ImageMagick invocation. Point-filter,
/// forced exact geometry (`WxH!`), so pixel art stays blocky and the aspect
/// ratio is not preserved.
pub struct MagickResizer {
    width: u32,
    height: u32,
    tool: Option<PathBuf>,
}

impl MagickResizer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_candidates(width, height, CANDIDATE_TOOLS)
    }

    pub fn with_candidates(width: u32, height: u32, candidates: &[&str]) -> Self {
        Self {
            width,
            height,
            tool: find_tool(candidates),
        }
    }

    /// The resolved executable, if any candidate was found.
    pub fn tool(&self) -> Option<&Path> {
        self.tool.as_deref()
    }

    pub fn resize_in_place(&self, path: &Path) -> ResizeOutcome {
        let Some(tool) = &self.tool else {
            return ResizeOutcome::ToolUnavailable;
        };

        let geometry = format!("{}x{}!", self.width, self.height);
        let output = Command::new(tool)
            .arg(path)
            .args(["-filter", "point", "-resize"])
            .arg(&geometry)
            .arg(path)
            .output();

        match output {
            Ok(out) if out.status.success() => ResizeOutcome::Resized,
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                ResizeOutcome::Failed(format!("{} ({})", out.status, stderr.trim()))
            }
            Err(e) => ResizeOutcome::Failed(format!("could not launch {}: {e}", tool.display())),
        }
    }
}

/// First candidate that resolves to an existing file on PATH, in order.
fn find_tool(candidates: &[&str]) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    let dirs: Vec<PathBuf> = std::env::split_paths(&path_var).collect();

    for candidate in candidates {
        for dir in &dirs {
            let full = dir.join(candidate);
            if full.is_file() {
                return Some(full);
            }
            #[cfg(windows)]
            {
                let exe = dir.join(format!("{candidate}.exe"));
                if exe.is_file() {
                    return Some(exe);
                }
            }
        }
    }

    None
}
