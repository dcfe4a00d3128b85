// pixback/src/cli.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pixback",
    version,
    about = "Collect, upscale, and caption back sprites into a flat dataset"
)]
pub struct Cli {
    /// Project root containing graphics/pokemon/. Defaults to the parent of
    /// the directory the executable lives in.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
