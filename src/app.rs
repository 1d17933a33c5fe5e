use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{ArgAction, Parser};
use tracing::{Level, debug, info};

use crate::config::{APP_NAME, DEFAULT_ROOT};
use crate::dump::Dumper;
use crate::exclusion::ExclusionSet;

#[derive(Parser, Debug)]
#[command(name = APP_NAME, version, about = "Print the relative path and text content of every file under a directory tree.")]
pub struct App {
    /// Directory to walk.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Additional filename suffix to skip (case-insensitive, repeatable).
    #[arg(short, long, value_name = "SUFFIX")]
    exclude: Vec<String>,

    /// Order the entries of each directory by name.
    #[arg(short, long)]
    sort: bool,

    /// Log more to stderr (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl App {
    pub fn init() -> Result<Self> {
        let app = Self::parse();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_max_level(app.log_level())
            .with_file(true)
            .with_line_number(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(app)
    }

    pub fn execute(self) -> Result<()> {
        let root = std::path::absolute(&self.root).with_context(|| format!("invalid root: {}", self.root.display()))?;
        ensure!(root.is_dir(), "root is not a directory: {}", root.display());

        let exclusions = ExclusionSet::new(&self.exclude);
        debug!(root = %root.display(), suffixes = ?exclusions.suffixes(), sorted = self.sort, "starting dump");

        let stdout = BufWriter::new(io::stdout().lock());
        let summary = Dumper::new(stdout, exclusions)
            .dump_tree(&root, self.sort)
            .with_context(|| format!("dump failed: {}", root.display()))?;

        info!(visited = summary.visited(), "{summary}");

        Ok(())
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}
