mod cli;
mod core;
mod processors;
mod utils;

pub use cli::Cli;
pub use core::{
    CollectConfig, CollectError, CollectStats, Collector, Result, CAPTION, SPRITE_FILE,
    TARGET_HEIGHT, TARGET_WIDTH,
};
pub use processors::{scan_entity_dirs, MagickResizer, ResizeOutcome};
pub use utils::{default_project_root, numbered_stem, relative_to};

pub mod prelude {
    pub use crate::{CollectConfig, Collector, MagickResizer};
}
