// pixback/src/processors/mod.rs
mod resizer;
mod scanner;

pub use resizer::{MagickResizer, ResizeOutcome};
pub use scanner::scan_entity_dirs;
