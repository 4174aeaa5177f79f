use clap::Parser;

use unistore::cli::{self, Cli};
use unistore::logging;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();
    tracing::debug!(?cli, "Parsed arguments");
    cli::run(cli)
}
