use std::path::PathBuf;

use clap::Parser;
use readme_sync::{Result, SyncConfig, logging, sync};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init(if cli.verbose { "debug" } else { "warn" })?;
    let config = cli.into_config();
    sync::run(&config)?;
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Copy README.md into the doc comments of src/lib.rs."
)]
struct Cli {
    /// Project root holding README.md and src/lib.rs.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// README to read, overriding the one under the root.
    #[arg(long)]
    readme: Option<PathBuf>,

    /// Source file to rewrite, overriding the one under the root.
    #[arg(long)]
    target: Option<PathBuf>,

    /// Log progress at debug level.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> SyncConfig {
        let mut config = SyncConfig::from_root(&self.root);
        if let Some(readme) = self.readme {
            config.readme = readme;
        }
        if let Some(target) = self.target {
            config.target = target;
        }
        config
    }
}
