// pixback/src/core/collector.rs
use super::{CollectConfig, CollectError, CollectStats, Result, SPRITE_FILE};
use crate::processors::{scan_entity_dirs, MagickResizer, ResizeOutcome};
use crate::utils::{numbered_stem, relative_to};
use std::fs;

pub struct Collector {
    config: CollectConfig,
    resizer: MagickResizer,
}

impl Collector {
    pub fn new(config: CollectConfig) -> Self {
        let resizer = MagickResizer::new(config.width, config.height);
        Self { config, resizer }
    }

    /// Inject a resizer with a non-default tool list. Used by tests to run
    /// without ImageMagick on the host.
    pub fn with_resizer(config: CollectConfig, resizer: MagickResizer) -> Self {
        Self { config, resizer }
    }

    pub fn config(&self) -> &CollectConfig {
        &self.config
    }

    /// One full pass: wipe the destination, then copy, resize, and caption
    /// one sprite per entity directory in sorted order.
    pub fn run(&self) -> Result<CollectStats> {
        // The source check comes first so a missing source never costs the
        // caller their existing destination contents.
        if !self.config.source_dir.is_dir() {
            return Err(CollectError::MissingSourceRoot(
                self.config.source_dir.clone(),
            ));
        }

        self.reset_dest_dir()?;

        let entity_dirs = scan_entity_dirs(&self.config.source_dir);
        log::info!(
            "Found {} entity directories under {}",
            entity_dirs.len(),
            self.config.source_dir.display()
        );

        let mut stats = CollectStats::default();
        let mut index = 1usize;

        for entity_dir in &entity_dirs {
            // Only the top-level sprite counts; nested copies (mega/ etc.)
            // are ignored.
            let sprite = entity_dir.join(SPRITE_FILE);
            if !sprite.is_file() {
                log::debug!("no {} in {}, skipping", SPRITE_FILE, entity_dir.display());
                continue;
            }

            let stem = numbered_stem(index);
            let dest_png = self.config.dest_dir.join(format!("{stem}.png"));
            fs::copy(&sprite, &dest_png)?;

            match self.resizer.resize_in_place(&dest_png) {
                ResizeOutcome::Resized => {}
                ResizeOutcome::ToolUnavailable => {
                    log::warn!(
                        "failed to resize {} (is ImageMagick installed?)",
                        dest_png.display()
                    );
                    stats
                        .resize_warnings
                        .push((dest_png.clone(), "no resize tool on PATH".to_string()));
                }
                ResizeOutcome::Failed(detail) => {
                    log::warn!("failed to resize {}: {}", dest_png.display(), detail);
                    stats.resize_warnings.push((dest_png.clone(), detail));
                }
            }

            let dest_txt = self.config.dest_dir.join(format!("{stem}.txt"));
            fs::write(&dest_txt, &self.config.caption)?;

            println!(
                "{} -> {} ({}x{})",
                relative_to(&sprite, &self.config.project_root).display(),
                relative_to(&dest_png, &self.config.project_root).display(),
                self.config.width,
                self.config.height
            );

            index += 1;
            stats.copied += 1;
        }

        Ok(stats)
    }

    /// Destructive: pre-existing destination contents do not survive a run.
    fn reset_dest_dir(&self) -> Result<()> {
        if self.config.dest_dir.is_dir() {
            fs::remove_dir_all(&self.config.dest_dir)?;
        }
        fs::create_dir_all(&self.config.dest_dir)?;
        Ok(())
    }
}
