//! CLI entry point for the photomosaic generation tool

use clap::Parser;
use mosatile::io::cli::{Cli, MosaicProcessor};

fn main() -> mosatile::Result<()> {
    let cli = Cli::parse();
    let mut processor = MosaicProcessor::new(cli);
    processor.process()
}
