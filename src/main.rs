//! CLI entry point for the toroidal maze animation generator

use clap::Parser;
use torusmaze::io::cli::{Cli, GifWriter};

fn main() -> torusmaze::Result<()> {
    let cli = Cli::parse();
    let mut writer = GifWriter::new(cli);
    writer.run()
}
