mod cli;
mod error;
mod render;

use std::process::exit;

use clap::Parser;

use crate::cli::Cli;
use crate::cli::Commands;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => render::render(args),
    };

    if let Err(error) = result {
        eprintln!("{error}");
        exit(1);
    }
}
