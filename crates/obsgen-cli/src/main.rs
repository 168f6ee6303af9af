//! obsgen CLI - Go bindings generator for the obs-websocket protocol
//!
//! ```text
//! obsgen --all -o ./obsws protocol.json
//! obsgen --events --requests --no-fmt protocol.json
//! obsgen --typeswitches --strict protocol.json
//! ```

use clap::{ArgAction, Parser};
use obsgen_core::Selection;
use std::path::PathBuf;

mod format;
mod generate;
mod logging;
mod writer;

#[derive(Parser)]
#[command(name = "obsgen")]
#[command(author, version, about = "Generate Go bindings for the obs-websocket protocol", long_about = None)]
struct Cli {
    /// Path to the protocol JSON document
    path: PathBuf,

    /// Generate one events_<category>.go per event category
    #[arg(long)]
    events: bool,

    /// Generate one requests_<category>.go per request category
    #[arg(long)]
    requests: bool,

    /// Generate the dispatch registry (typeswitches.go)
    #[arg(long, visible_alias = "registry")]
    typeswitches: bool,

    /// Generate everything
    #[arg(long)]
    all: bool,

    /// Output directory for generated code
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Path to obsgen.toml (default: ./obsgen.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the formatter even if the config enables it
    #[arg(long)]
    no_fmt: bool,

    /// Exit with an error if any diagnostic was reported
    #[arg(long)]
    strict: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Less log output (-q warnings, -qq errors only)
    #[arg(short, long, action = ArgAction::Count)]
    quiet: u8,
}

impl Cli {
    fn selection(&self) -> Selection {
        if self.all {
            return Selection::all();
        }
        Selection {
            events: self.events,
            requests: self.requests,
            registry: self.typeswitches,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let options = generate::Options {
        selection: cli.selection(),
        work_dir: std::env::current_dir()?,
        format: !cli.no_fmt,
        strict: cli.strict,
        path: cli.path,
        output: cli.output,
        config: cli.config,
    };

    generate::run(&options)?;
    Ok(())
}
