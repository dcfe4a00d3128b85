use clap::Parser;
use log::LevelFilter;
use pixback::{default_project_root, relative_to, Cli, CollectConfig, CollectError, Collector};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CollectError::MissingSourceRoot(dir)) => {
            eprintln!("Error: {} does not exist.", dir.display());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> pixback::Result<()> {
    let root = match cli.root {
        Some(root) => root,
        None => default_project_root()?,
    };

    let config = CollectConfig::for_project_root(&root);
    let collector = Collector::new(config);
    let stats = collector.run()?;

    if !stats.resize_warnings.is_empty() {
        log::warn!(
            "{} file(s) were copied but not resized",
            stats.resize_warnings.len()
        );
    }

    println!(
        "\nDone: copied and upscaled {} files to {}/",
        stats.copied,
        relative_to(&collector.config().dest_dir, &collector.config().project_root).display()
    );

    Ok(())
}
