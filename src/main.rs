//! CLI entry point for the Hilbert knot renderer

use clap::Parser;
use knotwork::io::cli::{Cli, KnotRenderer};

fn main() -> knotwork::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let renderer = KnotRenderer::new(cli);
    renderer.run()
}
